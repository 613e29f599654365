//! Display backend trait
//!
//! Defines the interface the host's display driver provides.

use holdkey_core::RenderError;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

impl From<DisplayError> for RenderError {
    fn from(err: DisplayError) -> Self {
        match err {
            DisplayError::Communication => RenderError::Communication,
            DisplayError::NotInitialized => RenderError::NotReady,
            DisplayError::InvalidCoordinates | DisplayError::BufferOverflow => {
                RenderError::BufferOverflow
            }
        }
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing text rows on a small
/// display. Implementations handle the font and the controller specifics.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Set display contrast (0-255)
    fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError>;

    /// Turn blanking on (display dark) or off (content visible)
    fn set_blanking(&mut self, blank: bool) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
