//! Holdkey - Pressed Keys Display
//!
//! Integration layer for embassy-based keyboard firmware. The host's event
//! dispatcher calls [`on_key_event`] for every key transition; a task the
//! host spawns drains those events into a [`KeyStateTracker`], which draws
//! the held keys on the attached display.
//!
//! ```text
//! host dispatcher ──on_key_event──▶ KEY_EVENTS ──▶ pressed_keys_task
//!                                                        │
//!                                                 KeyStateTracker
//!                                                        │
//!                                              ScreenRenderer ──▶ display
//! ```
//!
//! Hosts that call the tracker synchronously from more than one context
//! can use [`SharedTracker`] instead of the channel.

#![no_std]
#![deny(unsafe_code)]

pub mod channels;
pub mod config;
pub mod init;
pub mod shared;
pub mod tasks;

pub use channels::{on_key_event, submit, KEY_EVENTS};
pub use config::{load_config, store_config, ConfigError, HoldkeyConfig};
pub use init::{init, init_display};
pub use shared::SharedTracker;
pub use tasks::{drain_pending, pressed_keys_task, process_next};

pub use holdkey_core::{KeyChange, KeyCode, KeyEvent, KeyStateTracker};
