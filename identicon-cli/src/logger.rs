use std::io::Write;

use log::LevelFilter;

/// Map the number of `-v` flags to a level filter.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger. `RUST_LOG` is applied on top of `level`.
pub fn configure_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}
