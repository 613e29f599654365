//! Inter-task communication channels
//!
//! The host's key event dispatcher and the pressed keys task talk through
//! a static embassy-sync channel. Sending never blocks, so the callback is
//! safe to call from the dispatcher's context.

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::{Channel, TrySendError};

use holdkey_core::{KeyCode, KeyEvent};

/// Channel capacity for key events from the host
pub const KEY_EVENT_CHANNEL_SIZE: usize = 16;

/// Channel type carrying key events to the pressed keys task
pub type KeyEventChannel = Channel<CriticalSectionRawMutex, KeyEvent, KEY_EVENT_CHANNEL_SIZE>;

/// Key events from the host dispatcher
pub static KEY_EVENTS: KeyEventChannel = Channel::new();

/// Key event callback to register with the host dispatcher
///
/// Returns false if the channel was full and the event was dropped.
pub fn on_key_event(code: KeyCode, pressed: bool) -> bool {
    submit(&KEY_EVENTS, KeyEvent::new(code, pressed))
}

/// Queue a key event without waiting
///
/// Returns false if the channel was full and the event was dropped.
pub fn submit<M: RawMutex, const C: usize>(
    channel: &Channel<M, KeyEvent, C>,
    event: KeyEvent,
) -> bool {
    match channel.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(_dropped)) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Key event channel full, dropped {}", _dropped);
            false
        }
    }
}
