//! Cursor Handle Registry
//!
//! Bidirectional mapping between GLFW cursor shapes and the small integer
//! handles passed to the render bridge. Handles start at
//! [`FIRST_CURSOR_HANDLE`]; the values below it are reserved by the native
//! window library for its built-in cursors.
//!
//! Both directions and the handle counter live behind one lock, so looking
//! up a shape and allocating its handle happen as a single step. Two threads
//! registering the same new shape always get the same handle.

use crate::cursor::shapes::{shape_name, GLFW_ARROW_CURSOR};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// First handle handed out
pub const FIRST_CURSOR_HANDLE: u64 = 4;

#[derive(Debug)]
struct CursorMaps {
    by_shape: HashMap<i32, u64>,
    by_handle: HashMap<u64, i32>,
    next_handle: u64,
}

impl CursorMaps {
    fn insert_new(&mut self, shape: i32) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.by_shape.insert(shape, handle);
        self.by_handle.insert(handle, shape);
        handle
    }
}

/// Cursor shape ↔ handle registry
#[derive(Debug)]
pub struct CursorRegistry {
    maps: RwLock<CursorMaps>,
    default_handle: u64,
}

impl CursorRegistry {
    /// Registry with the arrow cursor registered as the default
    pub fn new() -> Self {
        let mut maps = CursorMaps {
            by_shape: HashMap::new(),
            by_handle: HashMap::new(),
            next_handle: FIRST_CURSOR_HANDLE,
        };
        let default_handle = maps.insert_new(GLFW_ARROW_CURSOR);

        Self {
            maps: RwLock::new(maps),
            default_handle,
        }
    }

    /// Process-wide registry
    pub fn global() -> &'static CursorRegistry {
        static GLOBAL: OnceLock<CursorRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CursorRegistry::new)
    }

    /// Handle for `shape`, allocating one on first use
    pub fn register_cursor(&self, shape: i32) -> u64 {
        if let Some(&handle) = self.maps.read().by_shape.get(&shape) {
            return handle;
        }

        let mut maps = self.maps.write();
        // Another thread may have registered it between the two locks
        if let Some(&handle) = maps.by_shape.get(&shape) {
            return handle;
        }

        let handle = maps.insert_new(shape);
        debug!(
            "Registered cursor shape 0x{:X} ({}) as handle {}",
            shape,
            shape_name(shape).unwrap_or("custom"),
            handle
        );
        handle
    }

    /// Shape bound to `handle`
    ///
    /// Unknown handles resolve to the arrow shape.
    pub fn get_shape(&self, handle: u64) -> i32 {
        self.maps
            .read()
            .by_handle
            .get(&handle)
            .copied()
            .unwrap_or(GLFW_ARROW_CURSOR)
    }

    /// Handle of the arrow cursor registered at construction
    pub fn get_default_cursor(&self) -> u64 {
        self.default_handle
    }

    /// Handle for `shape` if it has been registered
    pub fn handle_of(&self, shape: i32) -> Option<u64> {
        self.maps.read().by_shape.get(&shape).copied()
    }

    /// Whether `handle` has been issued
    pub fn contains_handle(&self, handle: u64) -> bool {
        self.maps.read().by_handle.contains_key(&handle)
    }

    /// Registered shape count, the default included
    pub fn len(&self) -> usize {
        self.maps.read().by_shape.len()
    }

    /// Always false; the default cursor is registered at construction
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(handle, shape)` pairs in handle order
    pub fn entries(&self) -> Vec<(u64, i32)> {
        let maps = self.maps.read();
        let mut entries: Vec<(u64, i32)> = maps.by_handle.iter().map(|(&h, &s)| (h, s)).collect();
        entries.sort_unstable_by_key(|&(handle, _)| handle);
        entries
    }
}

impl Default for CursorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// [`CursorRegistry::register_cursor`] on the global registry
pub fn register_cursor(shape: i32) -> u64 {
    CursorRegistry::global().register_cursor(shape)
}

/// [`CursorRegistry::get_shape`] on the global registry
pub fn get_shape(handle: u64) -> i32 {
    CursorRegistry::global().get_shape(handle)
}

/// [`CursorRegistry::get_default_cursor`] on the global registry
pub fn get_default_cursor() -> u64 {
    CursorRegistry::global().get_default_cursor()
}
