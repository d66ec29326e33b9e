// crates/cli/src/logging.rs
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Log level selected by `-v`/`-q`.
pub const fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` wins over the flags when set.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    builder
        .filter_level(level_filter(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .target(Target::Stderr);

    if let Err(e) = builder.try_init() {
        log::debug!("keeping the installed logger: {e}");
    }
}
