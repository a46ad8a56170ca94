//! Logging setup for the command-line renderer.
//!
//! Log records always go to stderr so rendered HTML on stdout stays clean.
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `RUST_LOG` | Log filter, overrides the configured level | unset |
//! | `MAIL_COMPOSER__LOGGING__LEVEL` | Log filter used when `RUST_LOG` is unset | `warn` |
//! | `MAIL_COMPOSER__LOGGING__JSON` | Emit JSON log records | `false` |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` when set, the configured level otherwise
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup; a second call panics like any other global
/// subscriber installation.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = env_filter(config);

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(level = %config.level, json = config.json, "Tracing initialized");
}
