use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from constructing or querying a disjoint set, or from
/// running a benchmark with unusable parameters.
#[derive(Debug, Clone)]
pub enum UnionFindError {
    InvalidSize,
    IndexOutOfRange { index: usize, len: usize },
    InvalidParameters(String),
}

impl Error for UnionFindError {}

impl Display for UnionFindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            UnionFindError::InvalidSize => {
                String::from("A disjoint set must contain at least one element")
            }
            UnionFindError::IndexOutOfRange { index, len } => {
                format!("Index {index} is out of range for a disjoint set of {len} elements")
            }
            UnionFindError::InvalidParameters(msg) => format!("Invalid benchmark parameters: {msg}"),
        };
        write!(f, "{message}")
    }
}
