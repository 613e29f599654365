//! Startup
//!
//! Builds the tracker and reports whether a display was found. A display
//! that is missing or not ready at this point is never retried; the
//! tracker runs log-only for the rest of the session.

use holdkey_core::{KeyStateTracker, Renderer, TrackerConfig};
use holdkey_display::{DisplayBackend, ScreenRenderer};

use crate::config::HoldkeyConfig;

/// Create the tracker for any renderer
pub fn init<R: Renderer, const N: usize>(
    renderer: R,
    config: TrackerConfig,
) -> KeyStateTracker<R, N> {
    let tracker = KeyStateTracker::new(renderer, config);

    #[cfg(feature = "defmt")]
    if tracker.has_display() {
        defmt::info!("pressed_keys: display found");
    } else {
        defmt::info!("pressed_keys: display not found or not ready");
    }

    #[cfg(feature = "defmt")]
    defmt::info!("pressed_keys: initialized");

    tracker
}

/// Create the tracker drawing on a text display backend
pub fn init_display<B: DisplayBackend, const N: usize>(
    backend: B,
    config: &HoldkeyConfig,
) -> KeyStateTracker<ScreenRenderer<B>, N> {
    init(ScreenRenderer::new(backend, config.display), config.tracker)
}
