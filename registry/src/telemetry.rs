//! Console tracing setup.
//!
//! Provides [`Telemetry`] for installing a `tracing` subscriber that writes
//! to stderr, leaving stdout to command output. Only available with the
//! `telemetry` feature.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when neither `RUST_LOG` nor a configured level is set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Service identity and log level for the subscriber.
#[derive(Debug, Default)]
pub struct Telemetry {
    name: Option<String>,
    version: Option<String>,
    log_level: Option<String>,
}

impl Telemetry {
    /// Creates a new, empty [`Telemetry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the service version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the log level filter used when `RUST_LOG` is not set.
    ///
    /// Accepts any valid [`EnvFilter`] directive string (e.g. `"debug"`,
    /// `"router_registry=trace"`).
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Resolves the filter: `RUST_LOG`, then the configured level, then `warn`.
    fn filter(&self) -> EnvFilter {
        let fallback = self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }

    /// Installs the global subscriber.
    ///
    /// A second registration in the same process is ignored.
    pub fn register(self) {
        let installed = tracing_subscriber::registry()
            .with(self.filter())
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(
                name = self.name.as_deref().unwrap_or_default(),
                version = self.version.as_deref().unwrap_or_default(),
                "console logging initialised"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configured_level_falls_back() {
        let telemetry = Telemetry::new().with_log_level("not a [valid directive");
        // Building the filter must not panic on bad input.
        let _filter = telemetry.filter();
    }

    #[test]
    fn register_twice_is_harmless() {
        Telemetry::new().with_name("test").register();
        Telemetry::new().with_log_level("debug").register();
    }
}
