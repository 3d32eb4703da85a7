//! Input Event Forwarding
//!
//! Translation of host (Android) key events into the key space of the game
//! window (GLFW), and delivery of the resulting records to the render
//! bridge.
//!
//! # Features
//!
//! - **Keycode Table**
//!   - 106 curated Android → GLFW mappings, built once per process
//!   - Hash lookup by source code, no ordering precondition
//!   - Reverse lookup by target code with an explicit miss
//!
//! - **Modifiers**
//!   - Android meta state decoded to Shift, Ctrl, Alt, Meta, Caps Lock, Num Lock
//!   - `GLFW_MOD_*` bitmask for every key record
//!
//! - **Dispatch**
//!   - `(key, char, 0, mods, down)` computed per event
//!   - Index fast path for on-screen buttons
//!   - GLFW and AWT character senders for soft-keyboard text
//!
//! # Architecture
//!
//! ```text
//! Host key events
//!       ↓
//! ┌─────────────────────────┐
//! │  KeyDispatcher          │   CharacterSender (GLFW | AWT)
//! │  - modifier state       │          │
//! └─────────────────────────┘          │
//!       ↓                              ↓
//! ┌──────────────┐          ┌─────────────────────┐
//! │ KeycodeTable │          │  InputSink          │
//! └──────────────┘          │  (render bridge)    │
//!                           └─────────────────────┘
//! ```
//!
//! # Usage Example
//!
//! ```rust
//! use shard_input::input::{
//!     keycodes::android, ChannelSink, KeyDispatcher, KeycodeTable, SourceKeyEvent,
//! };
//!
//! let (sink, rx) = ChannelSink::new();
//! let mut dispatcher = KeyDispatcher::new(sink);
//!
//! let event = SourceKeyEvent::down(android::KEYCODE_W, 'w' as u32)
//!     .with_meta_state(android::META_SHIFT_ON);
//! let press = dispatcher.handle_source_event(&event).unwrap().unwrap();
//!
//! assert_eq!(Some(press.key_code), KeycodeTable::global().translate(android::KEYCODE_W));
//! assert_eq!(rx.len(), 1);
//! ```

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod keycodes;
pub mod mapper;
pub mod sender;
pub mod sink;

pub use dispatcher::KeyDispatcher;
pub use error::{classify_error, ErrorType, InputError, Result};
pub use event::{InputEvent, KeyAction, KeyPress, RawInputEvent, SourceKeyEvent};
pub use keyboard::{GlfwModifier, KeyModifiers};
pub use mapper::{KeycodeEntry, KeycodeTable, KEYCODE_COUNT, KEYCODE_PAIRS};
pub use sender::{sender_for, AwtCharSender, CharacterSender, GlfwCharSender, SenderKind};
pub use sink::{ChannelSink, InputSink, LoggingSink};
