use std::sync::Once;

use log::LevelFilter;

/// How the debug-draw binaries set up `env_logger`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"conduit=trace,conduit_xcde=debug"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Filter source, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Filter {
    Directives(String),
    Level(LevelFilter),
}

fn resolve_filter(config_filter: Option<String>, rust_log: Option<String>) -> Filter {
    match config_filter.or(rust_log) {
        Some(directives) => Filter::Directives(directives),
        None => Filter::Level(LevelFilter::Info),
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call does anything.
///
/// If the embedding process already set a logger, that one is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Filter::Directives(d) => builder.parse_filters(&d),
            Filter::Level(level) => builder.filter_level(level),
        };
        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("env_logger installed"),
            Err(_) => log::debug!("a logger was already installed; leaving it in place"),
        }
    });
}
