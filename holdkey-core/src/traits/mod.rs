//! Collaborator traits
//!
//! These traits define the interface between the key tracking logic and
//! whatever the host firmware uses to show the result.

pub mod renderer;

pub use renderer::{NoDisplay, RenderError, Renderer};
