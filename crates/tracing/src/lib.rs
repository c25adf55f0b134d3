use std::env::{self, VarError};
use std::sync::Once;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

pub const LOG_ENV: &str = "GOTC_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    pub fn from_env() -> Self {
        let filter = env::var(LOG_ENV);
        Self { filter }
    }
}

static INIT: Once = Once::new();

/// Installs a hierarchical subscriber filtered by `GOTC_LOG`
/// (e.g. `GOTC_LOG=gotc_checker=trace`). Does nothing when the variable is
/// unset. Only the first call has an effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let cfg = LoggerConfig::from_env();
        let filter = match cfg.filter {
            Ok(filter) => EnvFilter::new(filter),
            _ => return,
        };
        let layer = tracing_tree::HierarchicalLayer::default().with_writer(std::io::stderr);
        let subscribe = tracing_subscriber::Registry::default()
            .with(filter)
            .with(layer);
        if tracing::subscriber::set_global_default(subscribe).is_err() {
            eprintln!("{LOG_ENV} is set but a global tracing subscriber already exists");
        }
    });
}
