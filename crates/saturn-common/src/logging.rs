//! Structured logging setup for the dashboard binary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `level` is an `EnvFilter` directive string ("info", "saturn_data=debug",
/// ...). An unparseable directive falls back to "info". `RUST_LOG` takes
/// precedence when set.
pub fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_failure() {
        // First init in the process wins; later ones must error, not panic.
        let first = init_logging("debug");
        let second = init_logging("info");
        assert!(first.is_ok() || second.is_err());
    }
}
