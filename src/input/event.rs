//! Input Event Records
//!
//! Source key events as delivered by the host input subsystem, the key press
//! tuple computed for the game window, and the five-integer records accepted
//! by the render bridge.

use crate::input::error::{InputError, Result};
use crate::input::keyboard::KeyModifiers;
use crate::input::keycodes::android::{ACTION_DOWN, ACTION_MULTIPLE, ACTION_UP};
use serde::{Deserialize, Serialize};

/// Bridge event type: character input
pub const EVENT_TYPE_CHAR: i32 = 1000;
/// Bridge event type: cursor position
pub const EVENT_TYPE_CURSOR_POS: i32 = 1003;
/// Bridge event type: key event
pub const EVENT_TYPE_KEY: i32 = 1005;
/// Bridge event type: mouse button event
pub const EVENT_TYPE_MOUSE_BUTTON: i32 = 1006;

/// Host key action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    /// Key went down
    Down,
    /// Key went up
    Up,
    /// Repeated or multi-character event
    Multiple,
}

impl TryFrom<i32> for KeyAction {
    type Error = InputError;

    fn try_from(action: i32) -> Result<Self> {
        match action {
            ACTION_DOWN => Ok(Self::Down),
            ACTION_UP => Ok(Self::Up),
            ACTION_MULTIPLE => Ok(Self::Multiple),
            other => Err(InputError::InvalidKeyAction(other)),
        }
    }
}

/// Key event from the host input subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceKeyEvent {
    /// Android key code
    pub key_code: i32,
    /// Unicode code point produced by the key, 0 if none
    pub unicode_char: u32,
    /// Key action
    pub action: KeyAction,
    /// Android meta-state flags
    pub meta_state: u32,
}

impl SourceKeyEvent {
    /// Key-down event without modifiers
    pub fn down(key_code: i32, unicode_char: u32) -> Self {
        Self {
            key_code,
            unicode_char,
            action: KeyAction::Down,
            meta_state: 0,
        }
    }

    /// Key-up event without modifiers
    pub fn up(key_code: i32, unicode_char: u32) -> Self {
        Self {
            key_code,
            unicode_char,
            action: KeyAction::Up,
            meta_state: 0,
        }
    }

    /// Decode the raw host fields
    pub fn from_raw(key_code: i32, unicode_char: u32, action: i32, meta_state: u32) -> Result<Self> {
        Ok(Self {
            key_code,
            unicode_char,
            action: KeyAction::try_from(action)?,
            meta_state,
        })
    }

    /// Replace the meta state
    pub fn with_meta_state(mut self, meta_state: u32) -> Self {
        self.meta_state = meta_state;
        self
    }

    /// Modifiers read from the meta state
    pub fn modifiers(&self) -> KeyModifiers {
        KeyModifiers::from_meta_state(self.meta_state)
    }

    /// Alt held
    pub fn is_alt_pressed(&self) -> bool {
        self.modifiers().alt
    }

    /// Ctrl held
    pub fn is_ctrl_pressed(&self) -> bool {
        self.modifiers().ctrl
    }

    /// Shift held
    pub fn is_shift_pressed(&self) -> bool {
        self.modifiers().shift
    }

    /// Meta held
    pub fn is_meta_pressed(&self) -> bool {
        self.modifiers().meta
    }

    /// Caps Lock on
    pub fn is_caps_lock_on(&self) -> bool {
        self.modifiers().caps_lock
    }

    /// Num Lock on
    pub fn is_num_lock_on(&self) -> bool {
        self.modifiers().num_lock
    }

    /// Whether this is a key-down event
    pub fn is_down(&self) -> bool {
        self.action == KeyAction::Down
    }

    /// Character produced by the key, `'\0'` when none or not a valid scalar
    pub fn translated_char(&self) -> char {
        if self.unicode_char == 0 {
            return '\0';
        }
        char::from_u32(self.unicode_char).unwrap_or('\0')
    }
}

/// Key press computed for the game window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyPress {
    /// GLFW key code
    pub key_code: i16,
    /// Translated character
    pub key_char: char,
    /// Scancode placeholder, always 0
    pub scancode: i32,
    /// `GLFW_MOD_*` bitmask
    pub mods: i32,
    /// Press (true) or release (false)
    pub is_down: bool,
}

impl KeyPress {
    /// Bridge record for this press
    pub fn to_event(&self) -> InputEvent {
        InputEvent::Key {
            key_code: i32::from(self.key_code),
            key_char: self.key_char as i32,
            is_down: self.is_down,
            mods: self.mods,
        }
    }
}

/// Event accepted by the render bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Character input
    Char {
        /// Unicode code point
        code_point: i32,
    },

    /// Cursor position
    CursorPos {
        /// X coordinate
        x: i32,
        /// Y coordinate
        y: i32,
    },

    /// GLFW key event
    Key {
        /// GLFW key code
        key_code: i32,
        /// Character code point
        key_char: i32,
        /// Press (true) or release (false)
        is_down: bool,
        /// `GLFW_MOD_*` bitmask
        mods: i32,
    },

    /// AWT key event; the character leads the record
    AwtKey {
        /// Character code point
        key_char: i32,
        /// AWT key code
        key_code: i32,
        /// 1 pressed, 0 released
        state: i32,
    },

    /// Mouse button event
    MouseButton {
        /// Button code or AWT button mask
        button: i32,
        /// Press (true) or release (false)
        is_down: bool,
    },
}

impl InputEvent {
    /// Bridge event type code
    pub fn event_type(&self) -> i32 {
        match self {
            Self::Char { .. } => EVENT_TYPE_CHAR,
            Self::CursorPos { .. } => EVENT_TYPE_CURSOR_POS,
            Self::Key { .. } | Self::AwtKey { .. } => EVENT_TYPE_KEY,
            Self::MouseButton { .. } => EVENT_TYPE_MOUSE_BUTTON,
        }
    }

    /// Encode as `(type, p1, p2, p3, p4)`
    pub fn to_raw(&self) -> RawInputEvent {
        let params = match *self {
            Self::Char { code_point } => [code_point, 0, 0, 0],
            Self::CursorPos { x, y } => [x, y, 0, 0],
            Self::Key {
                key_code,
                key_char,
                is_down,
                mods,
            } => [key_code, key_char, i32::from(is_down), mods],
            Self::AwtKey {
                key_char,
                key_code,
                state,
            } => [key_char, key_code, state, 0],
            Self::MouseButton { button, is_down } => [button, i32::from(is_down), 0, 0],
        };

        RawInputEvent {
            event_type: self.event_type(),
            params,
        }
    }

    /// Decode a raw record
    ///
    /// Key records decode to [`InputEvent::Key`]; the AWT layout shares the
    /// same type code and cannot be told apart on the wire.
    pub fn from_raw(raw: RawInputEvent) -> Result<Self> {
        let [p1, p2, p3, p4] = raw.params;
        match raw.event_type {
            EVENT_TYPE_CHAR => Ok(Self::Char { code_point: p1 }),
            EVENT_TYPE_CURSOR_POS => Ok(Self::CursorPos { x: p1, y: p2 }),
            EVENT_TYPE_KEY => Ok(Self::Key {
                key_code: p1,
                key_char: p2,
                is_down: p3 != 0,
                mods: p4,
            }),
            EVENT_TYPE_MOUSE_BUTTON => Ok(Self::MouseButton {
                button: p1,
                is_down: p2 != 0,
            }),
            other => Err(InputError::UnknownEventType(other)),
        }
    }
}

/// Wire form of an [`InputEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputEvent {
    /// Event type code
    pub event_type: i32,
    /// Event-specific parameters
    pub params: [i32; 4],
}

impl std::fmt::Display for RawInputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [p1, p2, p3, p4] = self.params;
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.event_type, p1, p2, p3, p4
        )
    }
}
