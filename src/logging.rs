use env_logger::{Builder, Target};
use log::{LevelFilter, debug};

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Install the global logger on stderr, so stdout stays machine-readable.
///
/// `log_level` comes from `--log-level` or `PRTIME_LOG` (clap merges both);
/// the default is `info`. `module=level` pairs set per-module filters.
pub fn init_logger(log_level: Option<&str>) {
    let log_level = log_level.unwrap_or("info");

    let mut builder = Builder::new();
    builder.target(Target::Stderr).format_timestamp(None);

    for pair in log_level.split(',') {
        match pair.split_once('=') {
            Some((module, level)) => {
                builder.filter_module(module.trim(), get_log_level(level));
            }
            None => {
                builder.filter_level(get_log_level(pair));
            }
        }
    }

    builder.init();
    debug!("log level {log_level}");
}
