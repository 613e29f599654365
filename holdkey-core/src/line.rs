//! Bounded text line
//!
//! The render path joins labels into a fixed-capacity buffer. Text that
//! does not fit is cut at the capacity (on a character boundary) and the
//! buffer remembers that it was truncated. Nothing ever overflows.

use heapless::String;

use crate::keycode::KeyCode;
use crate::label::label_for;

/// Capacity of the rendered line, in bytes
pub const LINE_CAPACITY: usize = 128;

/// Fixed-capacity text buffer with a truncation contract
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer<const CAP: usize = LINE_CAPACITY> {
    text: String<CAP>,
    truncated: bool,
}

impl<const CAP: usize> LineBuffer<CAP> {
    /// Create an empty line
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            truncated: false,
        }
    }

    /// Empty the line and reset the truncation flag
    pub fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }

    /// Append as much of `s` as fits
    ///
    /// Returns false if anything was cut off.
    pub fn push_str(&mut self, s: &str) -> bool {
        let room = CAP - self.text.len();
        if s.len() <= room {
            let _ = self.text.push_str(s);
            return true;
        }

        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        let _ = self.text.push_str(&s[..end]);
        self.truncated = true;
        false
    }

    /// Append a single character if it fits
    pub fn push(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.push_str(c.encode_utf8(&mut buf))
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if any appended text was cut off since the last clear
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }
}

/// Build the display line for a sequence of held codes
///
/// Labels are joined with `separator`. The line is cleared first. Returns
/// false if the result had to be truncated.
pub fn assemble<const CAP: usize>(
    codes: &[KeyCode],
    separator: char,
    line: &mut LineBuffer<CAP>,
) -> bool {
    line.clear();

    for (i, &code) in codes.iter().enumerate() {
        if i > 0 {
            line.push(separator);
        }
        line.push_str(label_for(code).as_str());
    }

    !line.is_truncated()
}
