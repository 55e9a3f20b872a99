use std::sync::Once;

/// Crates that are chatty at `info` during device creation.
const NOISY_CRATES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax (e.g. "debug",
/// "cubix_engine=trace,wgpu_core=warn") and wins over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Call early in `main`, before the runtime starts.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        let filter = config.env_filter.or_else(|| std::env::var("RUST_LOG").ok());
        apply_filter(&mut builder, filter.as_deref(), config.default_level);
        builder.write_style(config.write_style);

        if let Err(e) = builder.try_init() {
            // Another logger was installed by the host; keep it.
            eprintln!("cubix: logger already set: {e}");
            return;
        }

        log::debug!("logging initialized");
    });
}

fn apply_filter(builder: &mut env_logger::Builder, filter: Option<&str>, default_level: log::LevelFilter) {
    match filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder.filter_level(default_level);
            for name in NOISY_CRATES {
                builder.filter_module(name, default_level.min(log::LevelFilter::Warn));
            }
        }
    }
}
