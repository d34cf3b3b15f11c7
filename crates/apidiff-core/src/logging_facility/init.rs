//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "apidiff=warn";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for interactive use
    Development,
    /// JSON structured output for CI pipelines
    Production,
}

impl Profile {
    /// Pick a profile from a format name such as the `APIDIFF_LOG_FORMAT` value.
    ///
    /// `json` selects [`Profile::Production`]; anything else, including an
    /// unset variable, selects [`Profile::Development`].
    pub fn from_format(format: Option<&str>) -> Self {
        match format.map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => Profile::Production,
            _ => Profile::Development,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup; later calls are ignored.
///
/// # Example
///
/// ```
/// use apidiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
                )
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_format() {
        assert_eq!(Profile::from_format(Some("json")), Profile::Production);
        assert_eq!(Profile::from_format(Some(" JSON ")), Profile::Production);
        assert_eq!(Profile::from_format(Some("pretty")), Profile::Development);
        assert_eq!(Profile::from_format(None), Profile::Development);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }
}
