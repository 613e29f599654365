//! Bounded set of held keys
//!
//! Keeps the codes of keys currently held down in the order they were
//! pressed. A code appears at most once and the set never grows past its
//! capacity.

use heapless::Vec;

use crate::keycode::KeyCode;

/// Default number of keys tracked at once
pub const MAX_PRESSED: usize = 6;

/// Outcome of a press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyChange {
    /// Nothing changed (repeat press, or release of a key not held)
    Unchanged,
    /// Key appended to the end of the set
    Added,
    /// Set was full; the last slot was overwritten, dropping this code
    Replaced(KeyCode),
    /// Key removed, later keys shifted left
    Removed,
}

impl KeyChange {
    /// Check if the held set changed (a render is due)
    pub fn is_changed(&self) -> bool {
        !matches!(self, KeyChange::Unchanged)
    }
}

/// Ordered, duplicate-free set of held key codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys<const N: usize = MAX_PRESSED> {
    keys: Vec<KeyCode, N>,
}

impl<const N: usize> HeldKeys<N> {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Record a key press
    ///
    /// When the set is already full the newest code overwrites the last
    /// slot; earlier keys keep their place.
    pub fn press(&mut self, code: KeyCode) -> KeyChange {
        if self.contains(code) {
            return KeyChange::Unchanged;
        }

        match self.keys.push(code) {
            Ok(()) => KeyChange::Added,
            Err(code) => match self.keys.last_mut() {
                Some(last) => KeyChange::Replaced(core::mem::replace(last, code)),
                // Zero capacity, nothing can be held
                None => KeyChange::Unchanged,
            },
        }
    }

    /// Record a key release
    pub fn release(&mut self, code: KeyCode) -> KeyChange {
        match self.keys.iter().position(|&held| held == code) {
            Some(index) => {
                self.keys.remove(index);
                KeyChange::Removed
            }
            None => KeyChange::Unchanged,
        }
    }

    /// Held codes in display order (first pressed first)
    pub fn as_slice(&self) -> &[KeyCode] {
        &self.keys
    }

    pub fn contains(&self, code: KeyCode) -> bool {
        self.keys.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.is_full()
    }

    /// Maximum number of keys held at once
    pub const fn capacity(&self) -> usize {
        N
    }
}
