use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit `level_filter` wins; otherwise `RUST_LOG` is honored and the
/// default is `info`.
pub fn init(level_filter: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(level_filter) = level_filter {
        builder.filter_level(level_filter);
    }

    builder
        .format_timestamp(None)
        .format_target(false)
        .init();
}
