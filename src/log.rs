use log::LevelFilter;

/// Initialize logging for the crossfill binaries.
///
/// # Behavior
/// - Default level is `Warn`, so a normal run prints nothing.
/// - With `debug_enabled` (the CLI sets this from `CROSSFILL_DEBUG`), this
///   crate's own modules log at `Debug` — prune counts, propagation
///   outcome, search result.
/// - `RUST_LOG`, when set, overrides both via the standard `env_logger`
///   filter syntax.
///
/// Lines are bare `LEVEL message` — no timestamps, no module paths.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, LevelFilter::Warn)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if debug_enabled {
        builder.filter(Some("crossfill"), LevelFilter::Debug);
    }

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("debug logging enabled");
}
