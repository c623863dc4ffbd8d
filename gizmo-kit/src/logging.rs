//! Logging setup for applications embedding gizmo-kit
//!
//! The library itself only emits events through the `gizmo_*` macros. These
//! helpers install a `tracing-subscriber` formatter so that degenerate picks
//! and drag fallbacks show up while developing an editor.

/// Default filter: debug for gizmo_kit, warn for everything else
pub const DEFAULT_FILTER: &str = "gizmo_kit=debug,warn";

/// Initialize tracing subscriber with sensible defaults
///
/// Honors `RUST_LOG` when set, otherwise falls back to [`DEFAULT_FILTER`].
/// Calling it twice is harmless: the second installation is ignored.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize tracing subscriber with custom filter
#[cfg(feature = "tracing")]
pub fn init_tracing_with_filter(filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

// Fallback implementations when tracing is not available
#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing_with_filter(_filter: &str) {}
