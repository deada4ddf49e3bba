//! Diagnostic tracing for the `pathbuilder` CLI.
//!
//! What gets emitted, by module:
//!
//! - `core`: nothing.
//! - `nav::navigator`: `debug!` on every path edit with the resulting depth,
//!   and on `recompute` with whether a builder claimed the path.
//! - `io::scenario`: `debug!` when a scenario file is loaded.
//! - `resolve`: `info!` for a full resolution or no match, `warn!` when path
//!   entries were left unclaimed.
//! - the binary: `info!` after `init` writes its example.
//!
//! Events go to stderr; stdout carries only the resolved views.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset or unparsable. Keeps the
/// partial-resolution warning visible.
pub const DEFAULT_DIRECTIVE: &str = "pathbuilder=warn";

/// Filter for `directives`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=pathbuilder::nav=debug pathbuilder resolve scenario.toml
/// ```
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_env_uses_crate_default() {
        assert_eq!(filter_from(None).to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn explicit_directives_win() {
        assert_eq!(
            filter_from(Some("pathbuilder::nav=debug")).to_string(),
            "pathbuilder::nav=debug"
        );
    }

    #[test]
    fn unparsable_directives_fall_back() {
        assert_eq!(
            filter_from(Some("pathbuilder=verbose")).to_string(),
            DEFAULT_DIRECTIVE
        );
    }
}
