use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize tracing for the CLI. `RUST_LOG` wins over the configured level
/// so an operator can crank verbosity per invocation.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
            .ok();
    }

    tracing::debug!("leaddesk telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span wrapping one status-transition attempt end to end.
pub fn create_transition_span(lead_id: &str, correlation_id: &str) -> tracing::Span {
    tracing::info_span!(
        "lead_transition",
        lead.id = lead_id,
        correlation.id = correlation_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_ids_are_unique() {
        assert_ne!(generate_correlation_id(), generate_correlation_id());
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            json_logs: false,
        };
        assert!(init_telemetry(&config).is_ok());
        // A second init must not panic even though a subscriber is installed.
        assert!(init_telemetry(&config).is_ok());
    }
}
