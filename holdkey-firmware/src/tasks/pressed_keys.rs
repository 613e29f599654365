//! Pressed keys task
//!
//! Applies key events from the host to the tracker, one render pass per
//! event, and logs every rendered line.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;

use holdkey_core::{KeyChange, KeyEvent, KeyStateTracker, Renderer};

/// Pressed keys task - drains key events into the tracker forever
pub async fn pressed_keys_task<M, R, const N: usize, const C: usize>(
    events: Receiver<'_, M, KeyEvent, C>,
    tracker: &mut KeyStateTracker<R, N>,
) -> !
where
    M: RawMutex,
    R: Renderer,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Pressed keys task started");

    loop {
        process_next(&events, tracker).await;
    }
}

/// Wait for the next key event and apply it
pub async fn process_next<M, R, const N: usize, const C: usize>(
    events: &Receiver<'_, M, KeyEvent, C>,
    tracker: &mut KeyStateTracker<R, N>,
) -> KeyChange
where
    M: RawMutex,
    R: Renderer,
{
    let event = events.receive().await;
    apply(tracker, event)
}

/// Apply every queued key event without waiting
///
/// Returns the number of events applied.
pub fn drain_pending<M, R, const N: usize, const C: usize>(
    events: &Receiver<'_, M, KeyEvent, C>,
    tracker: &mut KeyStateTracker<R, N>,
) -> usize
where
    M: RawMutex,
    R: Renderer,
{
    let mut applied = 0;
    while let Ok(event) = events.try_receive() {
        apply(tracker, event);
        applied += 1;
    }
    applied
}

/// Apply a single key event and log the outcome
pub fn apply<R: Renderer, const N: usize>(
    tracker: &mut KeyStateTracker<R, N>,
    event: KeyEvent,
) -> KeyChange {
    let change = tracker.handle(event);

    #[cfg(feature = "defmt")]
    log_change(tracker, event, change);

    change
}

#[cfg(feature = "defmt")]
fn log_change<R: Renderer, const N: usize>(
    tracker: &KeyStateTracker<R, N>,
    event: KeyEvent,
    change: KeyChange,
) {
    match change {
        KeyChange::Unchanged => {
            defmt::trace!("{} ignored, held set unchanged", event);
            return;
        }
        KeyChange::Replaced(evicted) => {
            defmt::debug!("Held keys full, {} overwrote {}", event.code, evicted);
        }
        KeyChange::Added | KeyChange::Removed => {}
    }

    defmt::info!("Pressed: {=str}", tracker.line());
}
