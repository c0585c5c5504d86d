//! Logging setup.

use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Build a subscriber writing to stderr. `RUST_LOG` wins over
/// `env_filter` when set.
pub fn get_subscriber(env_filter: &str) -> impl Subscriber + Sync + Send {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let stderr = fmt::Layer::new().with_writer(std::io::stderr).with_target(false);
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default.
///
/// Only the first call has any effect; later calls return `false`.
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) -> bool {
    set_global_default(subscriber).is_ok()
}
