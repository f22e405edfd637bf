use env_logger::{Env, WriteStyle};
use log::LevelFilter;
use std::io::Write;

/// Installs the global logger. Records are written to stderr as `[UFB | LEVEL] message`,
/// at `Info` and above unless `RUST_LOG` says otherwise.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[UFB | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Auto)
        .filter(None, LevelFilter::Info)
        .parse_env(Env::default())
        .try_init()
}
