//! Keycode Mapping Table
//!
//! Android key code to GLFW key code mapping for the 106 keys forwarded to
//! the game window, with lookups in both directions.
//!
//! The table is a declarative list of pairs. Lookup by source code goes
//! through a hash index, so the order of the list carries no meaning beyond
//! giving every entry a stable position.

use crate::input::error::{InputError, Result};
use crate::input::keycodes::android::*;
use crate::input::keycodes::glfw::*;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Number of mapped keys, and the capacity of any [`KeycodeTable`]
pub const KEYCODE_COUNT: usize = 106;

/// Curated `(android, glfw)` pairs. Index 0 is the unknown-key entry.
pub const KEYCODE_PAIRS: &[(i32, i16)] = &[
    (KEYCODE_UNKNOWN, GLFW_KEY_UNKNOWN),
    (KEYCODE_HOME, GLFW_KEY_HOME),
    (KEYCODE_BACK, GLFW_KEY_ESCAPE),
    (KEYCODE_0, GLFW_KEY_0),
    (KEYCODE_1, GLFW_KEY_1),
    (KEYCODE_2, GLFW_KEY_2),
    (KEYCODE_3, GLFW_KEY_3),
    (KEYCODE_4, GLFW_KEY_4),
    (KEYCODE_5, GLFW_KEY_5),
    (KEYCODE_6, GLFW_KEY_6),
    (KEYCODE_7, GLFW_KEY_7),
    (KEYCODE_8, GLFW_KEY_8),
    (KEYCODE_9, GLFW_KEY_9),
    (KEYCODE_POUND, GLFW_KEY_3),
    (KEYCODE_DPAD_UP, GLFW_KEY_UP),
    (KEYCODE_DPAD_DOWN, GLFW_KEY_DOWN),
    (KEYCODE_DPAD_LEFT, GLFW_KEY_LEFT),
    (KEYCODE_DPAD_RIGHT, GLFW_KEY_RIGHT),
    (KEYCODE_A, GLFW_KEY_A),
    (KEYCODE_B, GLFW_KEY_B),
    (KEYCODE_C, GLFW_KEY_C),
    (KEYCODE_D, GLFW_KEY_D),
    (KEYCODE_E, GLFW_KEY_E),
    (KEYCODE_F, GLFW_KEY_F),
    (KEYCODE_G, GLFW_KEY_G),
    (KEYCODE_H, GLFW_KEY_H),
    (KEYCODE_I, GLFW_KEY_I),
    (KEYCODE_J, GLFW_KEY_J),
    (KEYCODE_K, GLFW_KEY_K),
    (KEYCODE_L, GLFW_KEY_L),
    (KEYCODE_M, GLFW_KEY_M),
    (KEYCODE_N, GLFW_KEY_N),
    (KEYCODE_O, GLFW_KEY_O),
    (KEYCODE_P, GLFW_KEY_P),
    (KEYCODE_Q, GLFW_KEY_Q),
    (KEYCODE_R, GLFW_KEY_R),
    (KEYCODE_S, GLFW_KEY_S),
    (KEYCODE_T, GLFW_KEY_T),
    (KEYCODE_U, GLFW_KEY_U),
    (KEYCODE_V, GLFW_KEY_V),
    (KEYCODE_W, GLFW_KEY_W),
    (KEYCODE_X, GLFW_KEY_X),
    (KEYCODE_Y, GLFW_KEY_Y),
    (KEYCODE_Z, GLFW_KEY_Z),
    (KEYCODE_COMMA, GLFW_KEY_COMMA),
    (KEYCODE_PERIOD, GLFW_KEY_PERIOD),
    (KEYCODE_ALT_LEFT, GLFW_KEY_LEFT_ALT),
    (KEYCODE_ALT_RIGHT, GLFW_KEY_RIGHT_ALT),
    (KEYCODE_SHIFT_LEFT, GLFW_KEY_LEFT_SHIFT),
    (KEYCODE_SHIFT_RIGHT, GLFW_KEY_RIGHT_SHIFT),
    (KEYCODE_TAB, GLFW_KEY_TAB),
    (KEYCODE_SPACE, GLFW_KEY_SPACE),
    (KEYCODE_ENTER, GLFW_KEY_ENTER),
    (KEYCODE_DEL, GLFW_KEY_BACKSPACE),
    (KEYCODE_GRAVE, GLFW_KEY_GRAVE_ACCENT),
    (KEYCODE_MINUS, GLFW_KEY_MINUS),
    (KEYCODE_EQUALS, GLFW_KEY_EQUAL),
    (KEYCODE_LEFT_BRACKET, GLFW_KEY_LEFT_BRACKET),
    (KEYCODE_RIGHT_BRACKET, GLFW_KEY_RIGHT_BRACKET),
    (KEYCODE_BACKSLASH, GLFW_KEY_BACKSLASH),
    (KEYCODE_SEMICOLON, GLFW_KEY_SEMICOLON),
    (KEYCODE_APOSTROPHE, GLFW_KEY_APOSTROPHE),
    (KEYCODE_SLASH, GLFW_KEY_SLASH),
    (KEYCODE_AT, GLFW_KEY_2),
    (KEYCODE_PLUS, GLFW_KEY_KP_ADD),
    (KEYCODE_PAGE_UP, GLFW_KEY_PAGE_UP),
    (KEYCODE_PAGE_DOWN, GLFW_KEY_PAGE_DOWN),
    (KEYCODE_ESCAPE, GLFW_KEY_ESCAPE),
    (KEYCODE_CTRL_LEFT, GLFW_KEY_LEFT_CONTROL),
    (KEYCODE_CTRL_RIGHT, GLFW_KEY_RIGHT_CONTROL),
    (KEYCODE_CAPS_LOCK, GLFW_KEY_CAPS_LOCK),
    (KEYCODE_BREAK, GLFW_KEY_PAUSE),
    (KEYCODE_MOVE_HOME, GLFW_KEY_HOME),
    (KEYCODE_MOVE_END, GLFW_KEY_END),
    (KEYCODE_INSERT, GLFW_KEY_INSERT),
    (KEYCODE_F1, GLFW_KEY_F1),
    (KEYCODE_F2, GLFW_KEY_F2),
    (KEYCODE_F3, GLFW_KEY_F3),
    (KEYCODE_F4, GLFW_KEY_F4),
    (KEYCODE_F5, GLFW_KEY_F5),
    (KEYCODE_F6, GLFW_KEY_F6),
    (KEYCODE_F7, GLFW_KEY_F7),
    (KEYCODE_F8, GLFW_KEY_F8),
    (KEYCODE_F9, GLFW_KEY_F9),
    (KEYCODE_F10, GLFW_KEY_F10),
    (KEYCODE_F11, GLFW_KEY_F11),
    (KEYCODE_F12, GLFW_KEY_F12),
    (KEYCODE_NUM_LOCK, GLFW_KEY_NUM_LOCK),
    (KEYCODE_NUMPAD_0, GLFW_KEY_KP_0),
    (KEYCODE_NUMPAD_1, GLFW_KEY_KP_1),
    (KEYCODE_NUMPAD_2, GLFW_KEY_KP_2),
    (KEYCODE_NUMPAD_3, GLFW_KEY_KP_3),
    (KEYCODE_NUMPAD_4, GLFW_KEY_KP_4),
    (KEYCODE_NUMPAD_5, GLFW_KEY_KP_5),
    (KEYCODE_NUMPAD_6, GLFW_KEY_KP_6),
    (KEYCODE_NUMPAD_7, GLFW_KEY_KP_7),
    (KEYCODE_NUMPAD_8, GLFW_KEY_KP_8),
    (KEYCODE_NUMPAD_9, GLFW_KEY_KP_9),
    (KEYCODE_NUMPAD_DIVIDE, GLFW_KEY_KP_DIVIDE),
    (KEYCODE_NUMPAD_MULTIPLY, GLFW_KEY_KP_MULTIPLY),
    (KEYCODE_NUMPAD_SUBTRACT, GLFW_KEY_KP_SUBTRACT),
    (KEYCODE_NUMPAD_ADD, GLFW_KEY_KP_ADD),
    (KEYCODE_NUMPAD_DOT, GLFW_KEY_KP_DECIMAL),
    (KEYCODE_NUMPAD_COMMA, GLFW_KEY_COMMA),
    (KEYCODE_NUMPAD_ENTER, GLFW_KEY_KP_ENTER),
    (KEYCODE_NUMPAD_EQUALS, GLFW_KEY_EQUAL),
];

const _: () = assert!(KEYCODE_PAIRS.len() == KEYCODE_COUNT);

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeycodeEntry {
    /// Position in the table
    pub index: usize,
    /// Android key code
    pub source: i32,
    /// GLFW key code
    pub target: i16,
}

/// Bidirectional Android ↔ GLFW key code table
#[derive(Debug, Clone)]
pub struct KeycodeTable {
    /// Target codes by position (the dispatch fast path)
    targets: Vec<i16>,

    /// Source codes by position
    sources: Vec<i32>,

    /// Source code to position
    source_index: HashMap<i32, usize>,
}

impl KeycodeTable {
    /// Process-wide table built from [`KEYCODE_PAIRS`]
    ///
    /// Built on first use. A malformed curated list is a programming error
    /// and aborts initialization.
    pub fn global() -> &'static KeycodeTable {
        static TABLE: OnceLock<KeycodeTable> = OnceLock::new();
        TABLE.get_or_init(|| match Self::from_pairs(KEYCODE_PAIRS) {
            Ok(table) => {
                debug!("Keycode table initialized with {} entries", table.len());
                table
            }
            Err(e) => panic!("Curated keycode table is invalid: {}", e),
        })
    }

    /// Build a table from `(source, target)` pairs
    ///
    /// Fails on more than [`KEYCODE_COUNT`] pairs or on a repeated source
    /// code. Target codes may repeat.
    pub fn from_pairs(pairs: &[(i32, i16)]) -> Result<Self> {
        if pairs.len() > KEYCODE_COUNT {
            return Err(InputError::CapacityExceeded {
                count: pairs.len(),
                capacity: KEYCODE_COUNT,
            });
        }

        let mut table = Self {
            targets: Vec::with_capacity(pairs.len()),
            sources: Vec::with_capacity(pairs.len()),
            source_index: HashMap::with_capacity(pairs.len()),
        };

        for (index, &(source, target)) in pairs.iter().enumerate() {
            if table.source_index.insert(source, index).is_some() {
                return Err(InputError::DuplicateSourceKeycode {
                    code: source,
                    index,
                });
            }
            table.sources.push(source);
            table.targets.push(target);
        }

        Ok(table)
    }

    /// Position of `source`, if mapped
    pub fn index_of(&self, source: i32) -> Option<usize> {
        self.source_index.get(&source).copied()
    }

    /// Target code at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices come from
    /// [`index_of`](Self::index_of) or [`index_of_target_code`](Self::index_of_target_code);
    /// use [`get`](Self::get) for untrusted positions.
    pub fn target_code_at(&self, index: usize) -> i16 {
        self.targets[index]
    }

    /// Entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<KeycodeEntry> {
        Some(KeycodeEntry {
            index,
            source: *self.sources.get(index)?,
            target: *self.targets.get(index)?,
        })
    }

    /// First position whose target code is `target`
    pub fn index_of_target_code(&self, target: i16) -> Option<usize> {
        self.targets.iter().position(|&t| t == target)
    }

    /// Translate a source code to its target code
    pub fn translate(&self, source: i32) -> Option<i16> {
        self.index_of(source).map(|index| self.targets[index])
    }

    /// Translate a target code back to the first source code producing it
    pub fn reverse_translate(&self, target: i16) -> Option<i32> {
        self.index_of_target_code(target)
            .map(|index| self.sources[index])
    }

    /// Like [`translate`](Self::translate), as an error for callers using `?`
    pub fn try_translate(&self, source: i32) -> Result<i16> {
        self.translate(source)
            .ok_or(InputError::UnknownSourceKeycode(source))
    }

    /// Like [`reverse_translate`](Self::reverse_translate), as an error
    pub fn try_reverse_translate(&self, target: i16) -> Result<i32> {
        self.reverse_translate(target)
            .ok_or(InputError::UnknownTargetKeycode(target))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = KeycodeEntry> + '_ {
        self.sources
            .iter()
            .zip(self.targets.iter())
            .enumerate()
            .map(|(index, (&source, &target))| KeycodeEntry {
                index,
                source,
                target,
            })
    }
}
