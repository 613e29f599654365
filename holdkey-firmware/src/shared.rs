//! Tracker shared between execution contexts
//!
//! The tracker assumes a single writer. Hosts that deliver key events from
//! more than one context (for example an interrupt and a thread) call it
//! through this wrapper, which serializes access with an embassy-sync
//! blocking mutex.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Vec;

use holdkey_core::{KeyChange, KeyCode, KeyEvent, KeyStateTracker, Renderer, MAX_PRESSED};

use crate::tasks::apply;

/// Key state tracker behind a blocking mutex
///
/// The renderer must not call back into the same `SharedTracker` while it
/// draws.
pub struct SharedTracker<M: RawMutex, R, const N: usize = MAX_PRESSED> {
    inner: Mutex<M, RefCell<KeyStateTracker<R, N>>>,
}

impl<M: RawMutex, R: Renderer, const N: usize> SharedTracker<M, R, N> {
    pub fn new(tracker: KeyStateTracker<R, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(tracker)),
        }
    }

    /// Apply a key event from any context
    ///
    /// Logs the outcome the same way the pressed keys task does.
    pub fn handle(&self, event: KeyEvent) -> KeyChange {
        self.with(|tracker| apply(tracker, event))
    }

    pub fn press(&self, code: KeyCode) -> KeyChange {
        self.handle(KeyEvent::press(code))
    }

    pub fn release(&self, code: KeyCode) -> KeyChange {
        self.handle(KeyEvent::release(code))
    }

    /// Copy of the held codes in display order
    pub fn snapshot(&self) -> Vec<KeyCode, N> {
        self.with(|tracker| Vec::from_slice(tracker.snapshot()).unwrap_or_default())
    }

    /// Run `f` with exclusive access to the tracker
    pub fn with<T>(&self, f: impl FnOnce(&mut KeyStateTracker<R, N>) -> T) -> T {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn into_inner(self) -> KeyStateTracker<R, N> {
        self.inner.into_inner().into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use embassy_sync::channel::Channel;
    use holdkey_core::{NoDisplay, TrackerConfig};

    use crate::tasks::process_next;

    #[test]
    fn test_shared_press_release() {
        let shared: SharedTracker<NoopRawMutex, _> =
            SharedTracker::new(KeyStateTracker::new(NoDisplay, TrackerConfig::default()));

        assert_eq!(shared.press(4), KeyChange::Added);
        assert_eq!(shared.handle(KeyEvent::press(40)), KeyChange::Added);
        assert_eq!(shared.release(4), KeyChange::Removed);

        assert_eq!(shared.snapshot().as_slice(), &[40]);
        assert!(shared.with(|tracker| tracker.line() == "ENTER"));
    }

    #[test]
    fn test_shared_matches_task_on_overflow() {
        let events = [
            KeyEvent::press(4),
            KeyEvent::press(5),
            KeyEvent::press(6),
            KeyEvent::press(7),
            KeyEvent::press(8),
            KeyEvent::press(9),
            KeyEvent::press(10),
            KeyEvent::press(11),
            KeyEvent::release(4),
            KeyEvent::release(99),
        ];

        let shared: SharedTracker<NoopRawMutex, _> =
            SharedTracker::new(KeyStateTracker::new(NoDisplay, TrackerConfig::default()));
        let mut via_shared: Vec<KeyChange, 10> = Vec::new();
        for event in events {
            via_shared.push(shared.handle(event)).unwrap();
        }

        let channel: Channel<NoopRawMutex, KeyEvent, 16> = Channel::new();
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(NoDisplay, TrackerConfig::default());
        let mut via_task: Vec<KeyChange, 10> = Vec::new();
        for event in events {
            assert!(channel.try_send(event).is_ok());
            let change = block_on(process_next(&channel.receiver(), &mut tracker));
            via_task.push(change).unwrap();
        }

        assert_eq!(via_shared, via_task);
        assert_eq!(via_shared[6], KeyChange::Replaced(9));
        assert_eq!(via_shared[7], KeyChange::Replaced(10));
        assert_eq!(via_shared[9], KeyChange::Unchanged);
        assert_eq!(shared.snapshot().as_slice(), tracker.snapshot());
        assert!(shared.with(|shared| shared.line() == tracker.line()));
    }

    #[test]
    fn test_shared_across_threads() {
        extern crate std;

        let shared: SharedTracker<CriticalSectionRawMutex, NoDisplay> =
            SharedTracker::new(KeyStateTracker::new(NoDisplay, TrackerConfig::default()));

        std::thread::scope(|s| {
            s.spawn(|| {
                for code in [4, 5, 6] {
                    shared.press(code);
                }
            });
            s.spawn(|| {
                for code in [30, 31, 32] {
                    shared.press(code);
                }
            });
        });

        let held = shared.snapshot();
        assert_eq!(held.len(), 6);
        for code in [4, 5, 6, 30, 31, 32] {
            assert!(held.contains(&code));
        }

        let tracker = shared.into_inner();
        assert_eq!(tracker.snapshot().len(), 6);
    }
}
