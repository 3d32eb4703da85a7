//! # shard-input
//!
//! Input and cursor core of the Shard launcher's game bridge.
//!
//! This crate sits between the launcher UI and the native game runtime:
//! - [`input`] - Android → GLFW keycode translation and key dispatch
//! - [`cursor`] - Cursor shape ↔ bridge handle registry
//! - [`bridge`] - Game output log sink
//! - [`config`] - TOML configuration
//!
//! # Architecture
//!
//! ```text
//! shard-input
//!   ├─> KeycodeTable (106 curated mappings, built once)
//!   ├─> KeyDispatcher / CharacterSender (key records with modifiers)
//!   ├─> InputSink (render bridge, fire-and-forget)
//!   ├─> CursorRegistry (shape ↔ handle, thread-safe)
//!   └─> GameLog (file + listener fan-out)
//! ```
//!
//! # Data Flow
//!
//! **Key Path:** Host key event → KeyDispatcher → KeycodeTable → InputSink → Game
//!
//! **Cursor Path:** Game → CursorRegistry handle → UI pointer icon
//!
//! **Log Path:** Game stdout → GameLog → file + log viewer

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Configuration
pub mod config;

/// Keycode translation and input record delivery
///
/// The keycode table is read-only after a single initialization and can be
/// shared freely between threads. Modifier state is owned by each
/// [`input::KeyDispatcher`].
pub mod input;

/// Cursor shape handles
pub mod cursor;

/// Native bridge endpoints
pub mod bridge;

pub use cursor::CursorRegistry;
pub use input::{InputError, KeyDispatcher, KeycodeTable};
