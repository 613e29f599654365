//! HID keyboard usage codes
//!
//! Only the codes the label table names are listed here. Anything else is
//! still a valid [`KeyCode`] and falls back to its decimal form.

/// Numeric identifier for a physical key, as delivered by the host
pub type KeyCode = u16;

pub const KEY_A: KeyCode = 4;
pub const KEY_Z: KeyCode = 29;
pub const KEY_1: KeyCode = 30;
pub const KEY_0: KeyCode = 39;

pub const ENTER: KeyCode = 40;
pub const ESCAPE: KeyCode = 41;
pub const BACKSPACE: KeyCode = 42;
pub const TAB: KeyCode = 43;
pub const SPACE: KeyCode = 44;

// Modifier codes as the host keymap reports them. 224 and 225 both show
// up for the left control key depending on the driver.
pub const LEFT_CTRL: KeyCode = 225;
pub const LEFT_CTRL_ALT: KeyCode = 224;
pub const LEFT_ALT: KeyCode = 226;
pub const LEFT_SHIFT: KeyCode = 228;
pub const LEFT_GUI: KeyCode = 229;

/// Returns true if the code is in the `a`..`z` block
pub fn is_letter(code: KeyCode) -> bool {
    (KEY_A..=KEY_Z).contains(&code)
}

/// Returns true if the code is in the top-row digit block (`1`..`9`, `0`)
pub fn is_digit(code: KeyCode) -> bool {
    (KEY_1..=KEY_0).contains(&code)
}
