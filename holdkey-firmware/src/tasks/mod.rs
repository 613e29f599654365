//! Embassy async tasks
//!
//! Tasks are generic over the renderer, so the host wraps them in its own
//! `#[embassy_executor::task]` with concrete types.

pub mod pressed_keys;

pub use pressed_keys::{apply, drain_pending, pressed_keys_task, process_next};
