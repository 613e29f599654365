//! Key code to display label mapping
//!
//! Total over every [`KeyCode`]: letters and digits become a single
//! character, a small table of named keys becomes a mnemonic, and anything
//! else is shown as its decimal value.

use core::fmt::Write;

use heapless::String;

use crate::keycode::{self, KeyCode};

/// Maximum visible characters in a label
pub const MAX_LABEL_LEN: usize = 7;

/// A short display token for one key code
pub type Label = String<MAX_LABEL_LEN>;

/// Top-row digit ordering, `0` comes last
const DIGITS: &[u8; 10] = b"1234567890";

/// Named keys and their mnemonics
///
/// Two raw codes map to "LCTRL" on purpose; keymaps disagree on which one
/// the left control key reports.
const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (keycode::ENTER, "ENTER"),
    (keycode::ESCAPE, "ESC"),
    (keycode::BACKSPACE, "BS"),
    (keycode::TAB, "TAB"),
    (keycode::SPACE, "SPC"),
    (keycode::LEFT_CTRL, "LCTRL"),
    (keycode::LEFT_CTRL_ALT, "LCTRL"),
    (keycode::LEFT_ALT, "LALT"),
    (keycode::LEFT_GUI, "LGUI"),
    (keycode::LEFT_SHIFT, "LSHFT"),
];

/// Look up the mnemonic for a named key
pub fn named(code: KeyCode) -> Option<&'static str> {
    NAMED_KEYS
        .iter()
        .find(|(named, _)| *named == code)
        .map(|(_, name)| *name)
}

/// Map a key code to its display label
pub fn label_for(code: KeyCode) -> Label {
    let mut label = Label::new();

    if keycode::is_letter(code) {
        let _ = label.push((b'a' + (code - keycode::KEY_A) as u8) as char);
    } else if keycode::is_digit(code) {
        let _ = label.push(DIGITS[(code - keycode::KEY_1) as usize] as char);
    } else if let Some(name) = named(code) {
        let _ = label.push_str(name);
    } else {
        // u16::MAX is five digits, always fits
        let _ = write!(label, "{}", code);
    }

    label
}
