//! Tracing subscriber setup for hosts embedding the editor.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "postercanvas=info";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Returns false if a global subscriber was already installed (by the host
/// or an earlier call), which is not an error.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
