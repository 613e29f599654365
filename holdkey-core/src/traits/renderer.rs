//! Renderer trait for the pressed keys line

/// Errors a renderer can report for a single draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Communication with the display failed
    Communication,
    /// Display is not initialized
    NotReady,
    /// Text did not fit the display buffer
    BufferOverflow,
}

/// Trait for whatever shows the rendered line
///
/// The tracker checks [`is_ready`](Renderer::is_ready) once when it is
/// created. A renderer that is not ready then is never called again.
pub trait Renderer {
    /// Check if the display can accept lines
    fn is_ready(&self) -> bool;

    /// Show a line of text, replacing what was shown before
    ///
    /// An empty line clears the display.
    fn render(&mut self, line: &str) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn render(&mut self, line: &str) -> Result<(), RenderError> {
        (**self).render(line)
    }
}

/// Renderer for boards without a display
///
/// Never ready, so a tracker built with it runs log-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoDisplay;

impl Renderer for NoDisplay {
    fn is_ready(&self) -> bool {
        false
    }

    fn render(&mut self, _line: &str) -> Result<(), RenderError> {
        Err(RenderError::NotReady)
    }
}
