//! Native bridge endpoints
//!
//! Pieces the native game runtime calls back into. Only the game log lives
//! here; input records flow the other way through [`crate::input::InputSink`].

pub mod log;

pub use log::{format_title, GameLog, LogListener};
