//! Character Sender Strategies
//!
//! Soft-keyboard and on-screen control input for the two kinds of game
//! window the launcher can host: GLFW (LWJGL games) and AWT (installers and
//! other Swing/AWT tools). Both feed the same [`InputSink`] but lay key
//! records out differently.

use crate::input::event::{InputEvent, KeyAction, SourceKeyEvent};
use crate::input::keycodes::android::{
    KEYCODE_DEL, KEYCODE_DPAD_DOWN, KEYCODE_DPAD_LEFT, KEYCODE_DPAD_RIGHT, KEYCODE_DPAD_UP,
    KEYCODE_ENTER, KEYCODE_ESCAPE, KEYCODE_SPACE, KEYCODE_TAB,
};
use crate::input::keycodes::{awt, glfw::GLFW_KEY_UNKNOWN};
use crate::input::mapper::KeycodeTable;
use crate::input::sink::InputSink;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Sends text and editing keys to the game window
pub trait CharacterSender {
    /// Send one character
    fn send_char(&self, ch: char);

    /// Send a key identified by its Android key code
    fn send_key_press(&self, source_key: i32, key_char: char, mods: i32, is_pressed: bool);

    /// Forward a raw host key event
    fn send_other(&self, event: &SourceKeyEvent);

    /// Enter
    fn send_enter(&self) {
        self.send_char('\n');
    }

    /// Backspace (press and release)
    fn send_backspace(&self) {
        self.send_key_tap(KEYCODE_DEL, '\u{8}');
    }

    /// Tab
    fn send_tab(&self) {
        self.send_char('\t');
    }

    /// Arrow up (press and release)
    fn send_up(&self) {
        self.send_key_tap(KEYCODE_DPAD_UP, '\0');
    }

    /// Arrow down (press and release)
    fn send_down(&self) {
        self.send_key_tap(KEYCODE_DPAD_DOWN, '\0');
    }

    /// Arrow left (press and release)
    fn send_left(&self) {
        self.send_key_tap(KEYCODE_DPAD_LEFT, '\0');
    }

    /// Arrow right (press and release)
    fn send_right(&self) {
        self.send_key_tap(KEYCODE_DPAD_RIGHT, '\0');
    }

    /// Press then release a key without modifiers
    fn send_key_tap(&self, source_key: i32, key_char: char) {
        self.send_key_press(source_key, key_char, 0, true);
        self.send_key_press(source_key, key_char, 0, false);
    }
}

/// Which sender strategy a game window uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    /// GLFW key records (LWJGL games)
    #[default]
    Glfw,
    /// AWT key records
    Awt,
}

impl std::fmt::Display for SenderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glfw => write!(f, "glfw"),
            Self::Awt => write!(f, "awt"),
        }
    }
}

impl std::str::FromStr for SenderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "glfw" | "lwjgl" => Ok(Self::Glfw),
            "awt" => Ok(Self::Awt),
            _ => Err(format!("Unknown character sender: {}", s)),
        }
    }
}

/// Build the sender for `kind`
pub fn sender_for<'a, S: InputSink + 'a>(
    kind: SenderKind,
    sink: S,
    table: &'a KeycodeTable,
) -> Box<dyn CharacterSender + 'a> {
    match kind {
        SenderKind::Glfw => Box::new(GlfwCharSender::new(sink, table)),
        SenderKind::Awt => Box::new(AwtCharSender::new(sink)),
    }
}

/// Sender for GLFW game windows
pub struct GlfwCharSender<'a, S: InputSink> {
    sink: S,
    table: &'a KeycodeTable,
}

impl<'a, S: InputSink> GlfwCharSender<'a, S> {
    /// Create a sender over `table`
    pub fn new(sink: S, table: &'a KeycodeTable) -> Self {
        Self { sink, table }
    }
}

impl<S: InputSink> CharacterSender for GlfwCharSender<'_, S> {
    fn send_char(&self, ch: char) {
        self.sink.deliver(InputEvent::Char {
            code_point: ch as i32,
        });
    }

    fn send_key_press(&self, source_key: i32, key_char: char, mods: i32, is_pressed: bool) {
        let key_code = self.table.translate(source_key).unwrap_or(GLFW_KEY_UNKNOWN);
        self.sink.deliver(InputEvent::Key {
            key_code: i32::from(key_code),
            key_char: key_char as i32,
            is_down: is_pressed,
            mods,
        });
    }

    fn send_other(&self, event: &SourceKeyEvent) {
        let Some(key_code) = self.table.translate(event.key_code) else {
            trace!("Dropping unmapped key {}", event.key_code);
            return;
        };

        let is_down = match event.action {
            KeyAction::Down => true,
            KeyAction::Up => false,
            KeyAction::Multiple => return,
        };

        self.sink.deliver(InputEvent::Key {
            key_code: i32::from(key_code),
            key_char: event.translated_char() as i32,
            is_down,
            mods: 0,
        });
    }
}

/// AWT virtual key for an Android key code, `VK_UNDEFINED` when unknown
pub fn awt_key_code(source_key: i32) -> i32 {
    match source_key {
        KEYCODE_ENTER => awt::VK_ENTER,
        KEYCODE_DEL => awt::VK_BACK_SPACE,
        KEYCODE_TAB => awt::VK_TAB,
        KEYCODE_ESCAPE => awt::VK_ESCAPE,
        KEYCODE_SPACE => awt::VK_SPACE,
        KEYCODE_DPAD_UP => awt::VK_UP,
        KEYCODE_DPAD_DOWN => awt::VK_DOWN,
        KEYCODE_DPAD_LEFT => awt::VK_LEFT,
        KEYCODE_DPAD_RIGHT => awt::VK_RIGHT,
        _ => awt::VK_UNDEFINED,
    }
}

/// Sender for AWT windows
pub struct AwtCharSender<S: InputSink> {
    sink: S,
}

impl<S: InputSink> AwtCharSender<S> {
    /// Create a sender
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Press or release mouse buttons given as an AWT button mask
    pub fn send_mouse_press(&self, awt_buttons: i32, is_down: bool) {
        self.sink.deliver(InputEvent::MouseButton {
            button: awt_buttons,
            is_down,
        });
    }

    /// Click (press and release)
    pub fn send_mouse_click(&self, awt_buttons: i32) {
        self.send_mouse_press(awt_buttons, true);
        self.send_mouse_press(awt_buttons, false);
    }

    /// Move the pointer
    pub fn send_mouse_pos(&self, x: i32, y: i32) {
        self.sink.deliver(InputEvent::CursorPos { x, y });
    }
}

impl<S: InputSink> CharacterSender for AwtCharSender<S> {
    fn send_char(&self, ch: char) {
        self.sink.deliver(InputEvent::Char {
            code_point: ch as i32,
        });
    }

    fn send_key_press(&self, source_key: i32, key_char: char, _mods: i32, is_pressed: bool) {
        self.sink.deliver(InputEvent::AwtKey {
            key_char: key_char as i32,
            key_code: awt_key_code(source_key),
            state: i32::from(is_pressed),
        });
    }

    fn send_other(&self, event: &SourceKeyEvent) {
        let state = match event.action {
            KeyAction::Down => 1,
            KeyAction::Up => 0,
            KeyAction::Multiple => return,
        };
        self.sink.deliver(InputEvent::AwtKey {
            key_char: event.translated_char() as i32,
            key_code: awt_key_code(event.key_code),
            state,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keycodes::android::{KEYCODE_A, KEYCODE_STAR};
    use crate::input::keycodes::glfw::{GLFW_KEY_A, GLFW_KEY_BACKSPACE, GLFW_KEY_UP};
    use crate::input::sink::ChannelSink;

    #[test]
    fn test_glfw_backspace_is_tap() {
        let (sink, rx) = ChannelSink::new();
        let sender = GlfwCharSender::new(sink, KeycodeTable::global());
        sender.send_backspace();

        let events: Vec<InputEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Key {
                    key_code: i32::from(GLFW_KEY_BACKSPACE),
                    key_char: 8,
                    is_down: true,
                    mods: 0
                },
                InputEvent::Key {
                    key_code: i32::from(GLFW_KEY_BACKSPACE),
                    key_char: 8,
                    is_down: false,
                    mods: 0
                },
            ]
        );
    }

    #[test]
    fn test_glfw_unmapped_key_press_sends_unknown() {
        let (sink, rx) = ChannelSink::new();
        let sender = GlfwCharSender::new(sink, KeycodeTable::global());
        sender.send_key_press(KEYCODE_STAR, '*', 0, true);

        match rx.try_recv().unwrap() {
            InputEvent::Key { key_code, .. } => assert_eq!(key_code, i32::from(GLFW_KEY_UNKNOWN)),
            other => panic!("Expected key event, got {:?}", other),
        }
    }

    #[test]
    fn test_glfw_send_other() {
        let (sink, rx) = ChannelSink::new();
        let sender = GlfwCharSender::new(sink, KeycodeTable::global());

        sender.send_other(&SourceKeyEvent::down(KEYCODE_A, 'a' as u32));
        sender.send_other(&SourceKeyEvent::down(KEYCODE_STAR, '*' as u32));
        sender.send_other(&SourceKeyEvent::up(KEYCODE_A, 'a' as u32));

        let events: Vec<InputEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            InputEvent::Key {
                key_code: i32::from(GLFW_KEY_A),
                key_char: 'a' as i32,
                is_down: false,
                mods: 0
            }
        );
    }

    #[test]
    fn test_enter_and_tab_are_chars() {
        let (sink, rx) = ChannelSink::new();
        let sender = GlfwCharSender::new(sink, KeycodeTable::global());
        sender.send_enter();
        sender.send_tab();
        sender.send_up();

        let events: Vec<InputEvent> = rx.try_iter().collect();
        assert_eq!(events[0], InputEvent::Char { code_point: '\n' as i32 });
        assert_eq!(events[1], InputEvent::Char { code_point: '\t' as i32 });
        assert!(matches!(
            events[2],
            InputEvent::Key { key_code, is_down: true, .. } if key_code == i32::from(GLFW_KEY_UP)
        ));
    }

    #[test]
    fn test_awt_layout() {
        let (sink, rx) = ChannelSink::new();
        let sender = AwtCharSender::new(sink);
        sender.send_backspace();
        sender.send_mouse_click(awt::BUTTON1_MASK);
        sender.send_mouse_pos(12, 34);

        let raw: Vec<[i32; 4]> = rx.try_iter().map(|e| e.to_raw().params).collect();
        assert_eq!(
            raw,
            vec![
                [8, awt::VK_BACK_SPACE, 1, 0],
                [8, awt::VK_BACK_SPACE, 0, 0],
                [awt::BUTTON1_MASK, 1, 0, 0],
                [awt::BUTTON1_MASK, 0, 0, 0],
                [12, 34, 0, 0],
            ]
        );
    }

    #[test]
    fn test_sender_kind_parsing() {
        assert_eq!("glfw".parse::<SenderKind>(), Ok(SenderKind::Glfw));
        assert_eq!("LWJGL".parse::<SenderKind>(), Ok(SenderKind::Glfw));
        assert_eq!("awt".parse::<SenderKind>(), Ok(SenderKind::Awt));
        assert!("swing".parse::<SenderKind>().is_err());
        assert_eq!(SenderKind::Awt.to_string(), "awt");
    }

    #[test]
    fn test_sender_for_dispatches_by_kind() {
        let (sink, rx) = ChannelSink::new();
        let sender = sender_for(SenderKind::Awt, sink, KeycodeTable::global());
        sender.send_key_press(KEYCODE_ENTER, '\n', 0, true);

        assert_eq!(
            rx.try_recv().unwrap(),
            InputEvent::AwtKey {
                key_char: '\n' as i32,
                key_code: awt::VK_ENTER,
                state: 1
            }
        );
    }
}
