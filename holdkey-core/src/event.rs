//! Key events delivered by the host

use crate::keycode::KeyCode;

/// One physical key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Key that changed
    pub code: KeyCode,
    /// True on press, false on release
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, pressed: bool) -> Self {
        Self { code, pressed }
    }

    pub const fn press(code: KeyCode) -> Self {
        Self::new(code, true)
    }

    pub const fn release(code: KeyCode) -> Self {
        Self::new(code, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(KeyEvent::press(4), KeyEvent::new(4, true));
        assert_eq!(KeyEvent::release(4), KeyEvent::new(4, false));
        assert!(KeyEvent::press(40).pressed);
        assert!(!KeyEvent::release(40).pressed);
    }
}
