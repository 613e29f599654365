//! Display backend and screen renderer for Holdkey
//!
//! This crate provides:
//! - `DisplayBackend` trait for the character-cell OLED the keyboard carries
//! - `Screen`, a text buffer that wraps the pressed keys line onto rows
//! - `ScreenRenderer`, which implements the core `Renderer` on any backend
//!
//! # Architecture
//!
//! The host firmware owns the display driver and implements
//! `DisplayBackend` for it. Font rendering and framebuffer paging stay on
//! that side; this crate only decides which text goes on which row.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use renderer::{DisplayConfig, ScreenRenderer};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
