//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for interactive use
    Development,
    /// JSON structured output for pipelines
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Parse a profile name as used in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "development" => Some(Profile::Development),
            "production" => Some(Profile::Production),
            "test" => Some(Profile::Test),
            _ => None,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// Logs always go to stderr so that stdout stays reserved for the
/// result document.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `dfxdelta=debug` unless `RUST_LOG` is set
/// - **Production**: JSON structured logs, `dfxdelta=info` unless `RUST_LOG` is set
/// - **Test**: Bare registry; capture is wired separately via `init_test_capture()`
///
/// # Example
///
/// ```
/// use dfxdelta_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    init_with_default_filter(profile, None);
}

/// Initialize the logging facility with an explicit default filter directive
///
/// `RUST_LOG` still takes precedence when set.
pub fn init_with_default_filter(profile: Profile, default_filter: Option<&str>) {
    INIT_ONCE.call_once(|| {
        let filter = |fallback: &str| {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or(fallback)))
        };
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter("dfxdelta=debug"))
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter("dfxdelta=info"))
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
