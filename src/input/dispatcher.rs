//! Key Dispatch
//!
//! Turns host key events into GLFW key presses and delivers them to an
//! [`InputSink`]. The dispatcher keeps the modifier state of the last event
//! it handled, so index-only dispatches (on-screen buttons, macros) carry
//! the modifiers the user is currently holding.

use crate::input::error::{InputError, Result};
use crate::input::event::{KeyAction, KeyPress, SourceKeyEvent};
use crate::input::keyboard::KeyModifiers;
use crate::input::mapper::KeycodeTable;
use crate::input::sink::InputSink;
use tracing::{debug, trace};

/// Key event dispatcher
pub struct KeyDispatcher<'a, S: InputSink> {
    /// Delivery target
    sink: S,

    /// Translation table
    table: &'a KeycodeTable,

    /// Modifiers seen on the last dispatched event
    modifiers: KeyModifiers,

    /// Key records delivered so far
    events_dispatched: u64,
}

impl<S: InputSink> KeyDispatcher<'static, S> {
    /// Dispatcher over the process-wide table
    pub fn new(sink: S) -> Self {
        Self::with_table(sink, KeycodeTable::global())
    }
}

impl<'a, S: InputSink> KeyDispatcher<'a, S> {
    /// Dispatcher over a specific table
    pub fn with_table(sink: S, table: &'a KeycodeTable) -> Self {
        Self {
            sink,
            table,
            modifiers: KeyModifiers::default(),
            events_dispatched: 0,
        }
    }

    /// Dispatch `event` as the key at table position `index`
    ///
    /// Records the event's modifiers, delivers a key record and returns the
    /// computed press. Fails without side effects when `index` is not a
    /// table position.
    pub fn dispatch_press(&mut self, event: &SourceKeyEvent, index: usize) -> Result<KeyPress> {
        let entry = self.table.get(index).ok_or(InputError::IndexOutOfRange {
            index,
            len: self.table.len(),
        })?;

        self.modifiers = event.modifiers();

        let press = KeyPress {
            key_code: entry.target,
            key_char: event.translated_char(),
            scancode: 0,
            mods: self.modifiers.mask(),
            is_down: event.is_down(),
        };

        debug!(
            "Key {}: source={}, target={}, char={:?}, mods=0x{:02X}",
            if press.is_down { "down" } else { "up" },
            event.key_code,
            press.key_code,
            press.key_char,
            press.mods
        );

        self.deliver(&press);
        Ok(press)
    }

    /// Press and release the key at `index` with the current modifiers
    pub fn dispatch_index(&mut self, index: usize) -> Result<[KeyPress; 2]> {
        let key_code = self.table.get(index).map(|e| e.target).ok_or(
            InputError::IndexOutOfRange {
                index,
                len: self.table.len(),
            },
        )?;

        let mods = self.modifiers.mask();
        let down = KeyPress {
            key_code,
            key_char: '\0',
            scancode: 0,
            mods,
            is_down: true,
        };
        let up = KeyPress {
            is_down: false,
            ..down
        };

        self.deliver(&down);
        self.deliver(&up);
        Ok([down, up])
    }

    /// Look up and dispatch a host key event
    ///
    /// Unmapped keys and repeat (`Multiple`) events are skipped with
    /// `Ok(None)`.
    pub fn handle_source_event(&mut self, event: &SourceKeyEvent) -> Result<Option<KeyPress>> {
        if event.action == KeyAction::Multiple {
            trace!("Skipping multiple-action event for key {}", event.key_code);
            return Ok(None);
        }

        match self.table.index_of(event.key_code) {
            Some(index) => self.dispatch_press(event, index).map(Some),
            None => {
                trace!("Unmapped source keycode {}", event.key_code);
                Ok(None)
            }
        }
    }

    /// Current `GLFW_MOD_*` bitmask
    pub fn current_mods(&self) -> i32 {
        self.modifiers.mask()
    }

    /// Current modifiers
    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// Key records delivered so far
    pub fn events_dispatched(&self) -> u64 {
        self.events_dispatched
    }

    /// Underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forget modifier state
    pub fn reset(&mut self) {
        self.modifiers = KeyModifiers::default();
        debug!("Key dispatcher state reset");
    }

    fn deliver(&mut self, press: &KeyPress) {
        self.sink.deliver(press.to_event());
        self.events_dispatched += 1;
    }
}
