//! Pressed keys renderer for text displays
//!
//! Bridges the core `Renderer` trait to a `DisplayBackend`. Each draw turns
//! blanking off and applies the configured contrast before writing, since
//! other widgets on the host may have changed either.

use holdkey_core::{RenderError, Renderer};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::backend::DisplayBackend;
use crate::screen::Screen;

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Contrast applied before every draw (0-255)
    pub contrast: u8,
    /// First row used for the pressed keys, rows above are left alone
    pub first_row: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contrast: 255,
            first_row: 0,
        }
    }
}

/// Renders the pressed keys line onto a display backend
pub struct ScreenRenderer<B> {
    backend: B,
    screen: Screen,
    config: DisplayConfig,
}

impl<B: DisplayBackend> ScreenRenderer<B> {
    /// Create a renderer sized to the backend
    pub fn new(backend: B, config: DisplayConfig) -> Self {
        let (cols, rows) = backend.dimensions();
        let rows = rows.saturating_sub(config.first_row);
        let screen = Screen::with_size(cols as usize, rows as usize);

        Self {
            backend,
            screen,
            config,
        }
    }

    /// Get the screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Get the display backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the display backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Release the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn draw(&mut self) -> Result<(), RenderError> {
        self.backend.clear()?;

        for (i, text) in self.screen.lines().enumerate() {
            if text.is_empty() {
                continue;
            }
            let row = self.config.first_row.saturating_add(i as u8);
            self.backend.draw_text(row, 0, text)?;
        }

        self.backend.flush()?;
        self.screen.mark_clean();
        Ok(())
    }
}

impl<B: DisplayBackend> Renderer for ScreenRenderer<B> {
    fn is_ready(&self) -> bool {
        self.backend.is_ready()
    }

    fn render(&mut self, line: &str) -> Result<(), RenderError> {
        self.backend.set_blanking(false)?;
        self.backend.set_contrast(self.config.contrast)?;

        self.screen.set_wrapped(line);
        if !self.screen.is_dirty() {
            return Ok(());
        }

        self.draw()
    }
}
