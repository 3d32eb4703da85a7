//! Cursor shape handles
//!
//! The render bridge refers to cursors by small integer handles rather than
//! by GLFW shape enumerants. This module owns that mapping.
//!
//! # Handle Allocation
//!
//! | Handle | Meaning |
//! |--------|---------|
//! | 0-3 | Reserved for the native library's built-in cursors |
//! | 4 | Arrow, registered once when the registry is created |
//! | 5.. | Other shapes, in first-registration order |
//!
//! Handles are never reused or removed. Unknown handles resolve to the
//! arrow shape.
//!
//! # Architecture
//!
//! ```text
//! UI thread ──┐
//!             ├─> CursorRegistry::register_cursor(shape) ─> handle
//! Render ─────┘         │
//!                       └─> RwLock { shape → handle, handle → shape, next }
//! ```

mod registry;
pub mod shapes;

pub use registry::{
    get_default_cursor, get_shape, register_cursor, CursorRegistry, FIRST_CURSOR_HANDLE,
};
pub use shapes::{shape_from_name, shape_name, standard_shapes};
