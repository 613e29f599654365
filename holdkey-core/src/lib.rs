//! Board-agnostic core logic for the pressed keys display
//!
//! This crate contains everything that does not depend on a particular
//! keyboard firmware host or display driver:
//!
//! - Key code constants and the code-to-label mapping
//! - The bounded, order-preserving set of held keys
//! - Line assembly into a bounded text buffer
//! - The renderer collaborator trait
//! - The key state tracker that ties them together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod event;
pub mod held;
pub mod keycode;
pub mod label;
pub mod line;
pub mod tracker;
pub mod traits;

pub use config::TrackerConfig;
pub use event::KeyEvent;
pub use held::{HeldKeys, KeyChange, MAX_PRESSED};
pub use keycode::KeyCode;
pub use label::{label_for, Label, MAX_LABEL_LEN};
pub use line::{assemble, LineBuffer, LINE_CAPACITY};
pub use tracker::KeyStateTracker;
pub use traits::{NoDisplay, RenderError, Renderer};
