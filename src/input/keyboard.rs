//! Keyboard Modifier State
//!
//! Modifier tracking for key events forwarded to the game window. Android
//! reports modifiers as meta-state flags on every key event; GLFW expects a
//! `GLFW_MOD_*` bitmask alongside each key callback.

use crate::input::keycodes::android::{
    META_ALT_ON, META_CAPS_LOCK_ON, META_CTRL_ON, META_META_ON, META_NUM_LOCK_ON, META_SHIFT_ON,
};
use enumflags2::{bitflags, BitFlags};
use serde::{Deserialize, Serialize};

/// GLFW modifier bits
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlfwModifier {
    /// `GLFW_MOD_SHIFT`
    Shift = 0x01,
    /// `GLFW_MOD_CONTROL`
    Control = 0x02,
    /// `GLFW_MOD_ALT`
    Alt = 0x04,
    /// `GLFW_MOD_SUPER`
    Super = 0x08,
    /// `GLFW_MOD_CAPS_LOCK`
    CapsLock = 0x10,
    /// `GLFW_MOD_NUM_LOCK`
    NumLock = 0x20,
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModifiers {
    /// Left or right Shift pressed
    pub shift: bool,
    /// Left or right Ctrl pressed
    pub ctrl: bool,
    /// Left or right Alt pressed
    pub alt: bool,
    /// Left or right Meta/Super key pressed
    pub meta: bool,
    /// Caps Lock active
    pub caps_lock: bool,
    /// Num Lock active
    pub num_lock: bool,
}

impl KeyModifiers {
    /// Read modifiers from an Android meta-state value
    pub fn from_meta_state(meta_state: u32) -> Self {
        Self {
            shift: meta_state & META_SHIFT_ON != 0,
            ctrl: meta_state & META_CTRL_ON != 0,
            alt: meta_state & META_ALT_ON != 0,
            meta: meta_state & META_META_ON != 0,
            caps_lock: meta_state & META_CAPS_LOCK_ON != 0,
            num_lock: meta_state & META_NUM_LOCK_ON != 0,
        }
    }

    /// Modifiers as GLFW flags
    pub fn flags(&self) -> BitFlags<GlfwModifier> {
        let mut flags = BitFlags::empty();
        if self.shift {
            flags |= GlfwModifier::Shift;
        }
        if self.ctrl {
            flags |= GlfwModifier::Control;
        }
        if self.alt {
            flags |= GlfwModifier::Alt;
        }
        if self.meta {
            flags |= GlfwModifier::Super;
        }
        if self.caps_lock {
            flags |= GlfwModifier::CapsLock;
        }
        if self.num_lock {
            flags |= GlfwModifier::NumLock;
        }
        flags
    }

    /// Raw `GLFW_MOD_*` bitmask as sent across the bridge
    pub fn mask(&self) -> i32 {
        self.flags().bits() as i32
    }

    /// Rebuild modifiers from a raw bitmask; unknown bits are ignored
    pub fn from_mask(mask: i32) -> Self {
        let flags = BitFlags::<GlfwModifier>::from_bits_truncate(mask as u32);
        Self {
            shift: flags.contains(GlfwModifier::Shift),
            ctrl: flags.contains(GlfwModifier::Control),
            alt: flags.contains(GlfwModifier::Alt),
            meta: flags.contains(GlfwModifier::Super),
            caps_lock: flags.contains(GlfwModifier::CapsLock),
            num_lock: flags.contains(GlfwModifier::NumLock),
        }
    }

    /// Whether no modifier is held or locked
    pub fn is_empty(&self) -> bool {
        self.flags().is_empty()
    }
}
