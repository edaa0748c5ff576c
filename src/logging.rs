use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Map the `-v` count to a level for this crate.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // default: only errors
        1 => LevelFilter::Info,  // -v: provider calls, variant counts
        2 => LevelFilter::Debug, // -vv: built instructions
        _ => LevelFilter::Trace, // -vvv: raw provider bodies
    }
}

/// Logs go to stderr so stdout stays clean JSON.
pub fn init_logger(verbosity: u8) {
    let mut builder = Builder::new();
    // Dependencies (reqwest, hyper) stay quiet unless RUST_LOG says otherwise.
    builder.filter_level(LevelFilter::Warn);
    builder.filter_module(env!("CARGO_CRATE_NAME"), level_for(verbosity));
    builder.parse_default_env();

    builder.format(|buf, record| {
        let level_label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        writeln!(buf, "{} {}", level_label, record.args())
    });

    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Error);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
