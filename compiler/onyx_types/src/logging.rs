//! Tracing setup for debug output.
//!
//! Enable with `ONYX_LOG=onyx_types=debug`, or `ONYX_LOG=onyx_types=trace`
//! to see every builder step. `RUST_LOG` is honored when `ONYX_LOG` is unset.

use std::sync::Once;

/// Primary filter variable.
pub const LOG_ENV: &str = "ONYX_LOG";

/// Fallback filter variable.
pub const FALLBACK_LOG_ENV: &str = "RUST_LOG";

static TRACING_INIT: Once = Once::new();

/// The filter directives configured in the environment, if any.
pub fn filter_from_env() -> Option<String> {
    pick_filter(
        std::env::var(LOG_ENV).ok(),
        std::env::var(FALLBACK_LOG_ENV).ok(),
    )
}

fn pick_filter(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|directives| !directives.trim().is_empty())
        .or_else(|| fallback.filter(|directives| !directives.trim().is_empty()))
}

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing when
/// no filter is configured, or when another subscriber is already installed.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = filter_from_env() else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("a global subscriber was already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn some(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    #[test]
    fn primary_wins() {
        assert_eq!(
            pick_filter(some("onyx_types=trace"), some("warn")),
            some("onyx_types=trace")
        );
    }

    #[test]
    fn falls_back_when_primary_missing_or_blank() {
        assert_eq!(pick_filter(None, some("info")), some("info"));
        assert_eq!(pick_filter(some("  "), some("info")), some("info"));
    }

    #[test]
    fn nothing_configured() {
        assert_eq!(pick_filter(None, None), None);
        assert_eq!(pick_filter(None, some("")), None);
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
