//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

/// Number of character rows on a 128x64 OLED with a 6x8 font
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns on a 128x64 OLED with a 6x8 font
pub const SCREEN_COLS: usize = 21;

/// Screen buffer for text-mode displays
///
/// Holds the rows currently shown and whether they need to be redrawn.
/// The usable size can be smaller than the buffer for displays with fewer
/// cells.
#[derive(Clone, Debug)]
pub struct Screen {
    /// Current display content
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    /// Usable columns
    cols: usize,
    /// Usable rows
    rows: usize,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen using the full buffer
    pub fn new() -> Self {
        Self::with_size(SCREEN_COLS, SCREEN_ROWS)
    }

    /// Create a screen limited to `cols` x `rows` cells
    ///
    /// Sizes larger than the buffer are clamped.
    pub fn with_size(cols: usize, rows: usize) -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            cols: cols.min(SCREEN_COLS),
            rows: rows.min(SCREEN_ROWS),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Replace the screen content with `text` wrapped onto the rows
    ///
    /// Breaks at spaces where possible and splits words longer than a row.
    /// Text past the last row is dropped. The screen is only marked dirty
    /// if the content changed. Returns false if text was dropped.
    pub fn set_wrapped(&mut self, text: &str) -> bool {
        let mut lines: [String<SCREEN_COLS>; SCREEN_ROWS] =
            core::array::from_fn(|_| String::new());
        let fits = wrap(text, &mut lines[..self.rows], self.cols);

        if lines != self.lines {
            self.lines = lines;
            self.dirty = true;
        }

        fits
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        if row < self.rows {
            self.lines.get(row).map(|s| s.as_str())
        } else {
            None
        }
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get the usable lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines[..self.rows].iter().map(|s| s.as_str())
    }

    /// Get number of usable rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of usable columns
    pub const fn cols(&self) -> usize {
        self.cols
    }
}

/// Word-wrap `text` into `lines`, each at most `cols` bytes
fn wrap(text: &str, lines: &mut [String<SCREEN_COLS>], cols: usize) -> bool {
    if cols == 0 {
        return text.trim().is_empty();
    }

    let mut row = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let mut word = word;

        loop {
            let Some(line) = lines.get_mut(row) else {
                return false;
            };

            let needed = if line.is_empty() {
                word.len()
            } else {
                word.len() + 1
            };

            if line.len() + needed <= cols {
                if !line.is_empty() {
                    let _ = line.push(' ');
                }
                let _ = line.push_str(word);
                break;
            }

            if line.is_empty() {
                // Longer than a whole row
                let (head, tail) = split_at_boundary(word, cols);
                let _ = line.push_str(head);
                word = tail;
            }
            row += 1;
        }
    }

    true
}

/// Split `s` at the last char boundary at or before `max` bytes
fn split_at_boundary(s: &str, max: usize) -> (&str, &str) {
    let mut end = max.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.split_at(end)
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}
