//! Key state tracker
//!
//! Owns the held key set and the render path. Every press or release that
//! changes the set rebuilds the line and hands it to the renderer before
//! returning; nothing is deferred or batched.

use crate::config::TrackerConfig;
use crate::event::KeyEvent;
use crate::held::{HeldKeys, KeyChange, MAX_PRESSED};
use crate::keycode::KeyCode;
use crate::line::{assemble, LineBuffer};
use crate::traits::Renderer;

/// Tracks held keys and renders them on change
///
/// If the renderer is not ready when the tracker is created, the tracker
/// drops it and keeps running without a display. The line is still built
/// on every change so the host can log it.
pub struct KeyStateTracker<R, const N: usize = MAX_PRESSED> {
    keys: HeldKeys<N>,
    renderer: Option<R>,
    config: TrackerConfig,
    line: LineBuffer,
    render_errors: u32,
}

impl<R: Renderer, const N: usize> KeyStateTracker<R, N> {
    /// Create a tracker with an empty held set
    pub fn new(renderer: R, config: TrackerConfig) -> Self {
        let renderer = if renderer.is_ready() {
            Some(renderer)
        } else {
            None
        };

        Self {
            keys: HeldKeys::new(),
            renderer,
            config,
            line: LineBuffer::new(),
            render_errors: 0,
        }
    }

    /// Record a key press, rendering if the held set changed
    pub fn press(&mut self, code: KeyCode) -> KeyChange {
        let change = self.keys.press(code);
        if change.is_changed() {
            self.render();
        }
        change
    }

    /// Record a key release, rendering if the held set changed
    pub fn release(&mut self, code: KeyCode) -> KeyChange {
        let change = self.keys.release(code);
        if change.is_changed() {
            self.render();
        }
        change
    }

    /// Apply a key event from the host
    pub fn handle(&mut self, event: KeyEvent) -> KeyChange {
        if event.pressed {
            self.press(event.code)
        } else {
            self.release(event.code)
        }
    }

    /// Held codes in display order
    pub fn snapshot(&self) -> &[KeyCode] {
        self.keys.as_slice()
    }

    /// The most recently rendered line
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Check if the last line was cut to fit the buffer
    pub fn line_truncated(&self) -> bool {
        self.line.is_truncated()
    }

    /// Check if a display is attached
    pub fn has_display(&self) -> bool {
        self.renderer.is_some()
    }

    /// Number of render passes the display rejected
    pub fn render_errors(&self) -> u32 {
        self.render_errors
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get the renderer, if one is attached
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    fn render(&mut self) {
        assemble(self.keys.as_slice(), self.config.separator, &mut self.line);

        if let Some(renderer) = self.renderer.as_mut() {
            if renderer.render(self.line.as_str()).is_err() {
                self.render_errors = self.render_errors.saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{NoDisplay, RenderError};
    use heapless::{String, Vec};

    /// Renderer that records every line it is given
    struct RecordingRenderer {
        ready: bool,
        fail: bool,
        lines: Vec<String<128>, 16>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self {
                ready: true,
                fail: false,
                lines: Vec::new(),
            }
        }
    }

    impl Renderer for RecordingRenderer {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn render(&mut self, line: &str) -> Result<(), RenderError> {
            assert!(self.ready, "render called on a display that was not ready");
            if self.fail {
                return Err(RenderError::Communication);
            }
            let _ = self.lines.push(String::try_from(line).unwrap());
            Ok(())
        }
    }

    fn rendered(tracker: &KeyStateTracker<RecordingRenderer>) -> &[String<128>] {
        tracker.renderer().unwrap().lines.as_slice()
    }

    #[test]
    fn test_press_renders_once() {
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());

        assert_eq!(tracker.press(4), KeyChange::Added);
        assert_eq!(tracker.press(40), KeyChange::Added);

        let lines = rendered(&tracker);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str(), "a");
        assert_eq!(lines[1].as_str(), "a ENTER");
        assert_eq!(tracker.line(), "a ENTER");
    }

    #[test]
    fn test_unchanged_does_not_render() {
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());

        tracker.press(4);
        assert_eq!(tracker.press(4), KeyChange::Unchanged);
        assert_eq!(tracker.release(5), KeyChange::Unchanged);

        assert_eq!(rendered(&tracker).len(), 1);
    }

    #[test]
    fn test_release_last_key_renders_empty_line() {
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());

        tracker.press(4);
        assert_eq!(tracker.release(4), KeyChange::Removed);

        let lines = rendered(&tracker);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].as_str(), "");
        assert!(tracker.snapshot().is_empty());
    }

    #[test]
    fn test_handle_events() {
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());

        tracker.handle(KeyEvent::press(225));
        tracker.handle(KeyEvent::press(6));
        tracker.handle(KeyEvent::release(225));

        assert_eq!(tracker.snapshot(), &[6]);
        assert_eq!(tracker.line(), "c");
    }

    #[test]
    fn test_overflow_renders_replacement() {
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());

        for code in 4..11 {
            tracker.press(code);
        }

        assert_eq!(tracker.snapshot(), &[4, 5, 6, 7, 8, 10]);
        assert_eq!(tracker.line(), "a b c d e g");
        assert_eq!(rendered(&tracker).len(), 7);
    }

    #[test]
    fn test_custom_separator() {
        let config = TrackerConfig { separator: '+' };
        let mut tracker: KeyStateTracker<_> = KeyStateTracker::new(RecordingRenderer::new(), config);

        tracker.press(225);
        tracker.press(6);
        assert_eq!(tracker.line(), "LCTRL+c");
    }

    #[test]
    fn test_not_ready_runs_without_display() {
        let mut renderer = RecordingRenderer::new();
        renderer.ready = false;

        // RecordingRenderer panics if rendered while not ready
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(renderer, TrackerConfig::default());
        assert!(!tracker.has_display());

        tracker.press(4);
        tracker.press(40);
        tracker.release(4);

        assert_eq!(tracker.snapshot(), &[40]);
        assert_eq!(tracker.line(), "ENTER");
        assert_eq!(tracker.render_errors(), 0);
    }

    #[test]
    fn test_no_display() {
        let mut tracker: KeyStateTracker<NoDisplay> =
            KeyStateTracker::new(NoDisplay, TrackerConfig::default());
        assert!(!tracker.has_display());
        assert!(tracker.renderer().is_none());

        assert_eq!(tracker.press(30), KeyChange::Added);
        assert_eq!(tracker.line(), "1");
    }

    #[test]
    fn test_render_errors_counted() {
        let mut tracker: KeyStateTracker<_> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());
        tracker.renderer.as_mut().unwrap().fail = true;

        assert_eq!(tracker.press(4), KeyChange::Added);
        assert_eq!(tracker.release(4), KeyChange::Removed);

        assert_eq!(tracker.render_errors(), 2);
        assert!(tracker.has_display());
        assert!(tracker.snapshot().is_empty());
    }

    #[test]
    fn test_smaller_capacity() {
        let mut tracker: KeyStateTracker<_, 2> =
            KeyStateTracker::new(RecordingRenderer::new(), TrackerConfig::default());

        tracker.press(4);
        tracker.press(5);
        assert_eq!(tracker.press(6), KeyChange::Replaced(5));
        assert_eq!(tracker.snapshot(), &[4, 6]);
    }

    #[test]
    fn test_borrowed_renderer() {
        let mut renderer = RecordingRenderer::new();
        {
            let mut tracker: KeyStateTracker<&mut RecordingRenderer> =
                KeyStateTracker::new(&mut renderer, TrackerConfig::default());
            tracker.press(44);
        }
        assert_eq!(renderer.lines[0].as_str(), "SPC");
    }
}
