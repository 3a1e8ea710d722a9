use crate::config::Config;
use color_eyre::Result;
use std::fs::create_dir_all;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "nbts.log";

/// # Errors
pub fn setup_logger(config: &Config) -> Result<()> {
    create_dir_all(&config.log_dir)?;

    let logfile = if cfg!(debug_assertions) {
        rolling::daily(&config.log_dir, LOG_FILE)
    } else {
        rolling::never(&config.log_dir, LOG_FILE)
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(feature = "bunyan")]
    {
        use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

        tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new("nbts".into(), logfile))
            .try_init()?;
    }

    #[cfg(not(feature = "bunyan"))]
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(logfile),
        )
        .try_init()?;

    Ok(())
}
