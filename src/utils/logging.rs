use tracing_subscriber::{EnvFilter, fmt};

use crate::utils::consts::LOG_LEVEL;

/// Install the global subscriber. `RUST_LOG` wins over [`LOG_LEVEL`].
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LOG_LEVEL));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stdout)
        .init();
}
