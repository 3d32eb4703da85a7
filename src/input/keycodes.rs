//! Key Code Constants
//!
//! Host platform (Android `KeyEvent`) key codes and windowing library (GLFW)
//! key codes used by the translation table.

#![allow(missing_docs)]

/// Android `KeyEvent` key codes, meta-state flags and actions
pub mod android {
    pub const KEYCODE_UNKNOWN: i32 = 0;
    pub const KEYCODE_HOME: i32 = 3;
    pub const KEYCODE_BACK: i32 = 4;
    pub const KEYCODE_0: i32 = 7;
    pub const KEYCODE_1: i32 = 8;
    pub const KEYCODE_2: i32 = 9;
    pub const KEYCODE_3: i32 = 10;
    pub const KEYCODE_4: i32 = 11;
    pub const KEYCODE_5: i32 = 12;
    pub const KEYCODE_6: i32 = 13;
    pub const KEYCODE_7: i32 = 14;
    pub const KEYCODE_8: i32 = 15;
    pub const KEYCODE_9: i32 = 16;
    pub const KEYCODE_STAR: i32 = 17;
    pub const KEYCODE_POUND: i32 = 18;
    pub const KEYCODE_DPAD_UP: i32 = 19;
    pub const KEYCODE_DPAD_DOWN: i32 = 20;
    pub const KEYCODE_DPAD_LEFT: i32 = 21;
    pub const KEYCODE_DPAD_RIGHT: i32 = 22;
    pub const KEYCODE_A: i32 = 29;
    pub const KEYCODE_B: i32 = 30;
    pub const KEYCODE_C: i32 = 31;
    pub const KEYCODE_D: i32 = 32;
    pub const KEYCODE_E: i32 = 33;
    pub const KEYCODE_F: i32 = 34;
    pub const KEYCODE_G: i32 = 35;
    pub const KEYCODE_H: i32 = 36;
    pub const KEYCODE_I: i32 = 37;
    pub const KEYCODE_J: i32 = 38;
    pub const KEYCODE_K: i32 = 39;
    pub const KEYCODE_L: i32 = 40;
    pub const KEYCODE_M: i32 = 41;
    pub const KEYCODE_N: i32 = 42;
    pub const KEYCODE_O: i32 = 43;
    pub const KEYCODE_P: i32 = 44;
    pub const KEYCODE_Q: i32 = 45;
    pub const KEYCODE_R: i32 = 46;
    pub const KEYCODE_S: i32 = 47;
    pub const KEYCODE_T: i32 = 48;
    pub const KEYCODE_U: i32 = 49;
    pub const KEYCODE_V: i32 = 50;
    pub const KEYCODE_W: i32 = 51;
    pub const KEYCODE_X: i32 = 52;
    pub const KEYCODE_Y: i32 = 53;
    pub const KEYCODE_Z: i32 = 54;
    pub const KEYCODE_COMMA: i32 = 55;
    pub const KEYCODE_PERIOD: i32 = 56;
    pub const KEYCODE_ALT_LEFT: i32 = 57;
    pub const KEYCODE_ALT_RIGHT: i32 = 58;
    pub const KEYCODE_SHIFT_LEFT: i32 = 59;
    pub const KEYCODE_SHIFT_RIGHT: i32 = 60;
    pub const KEYCODE_TAB: i32 = 61;
    pub const KEYCODE_SPACE: i32 = 62;
    pub const KEYCODE_ENTER: i32 = 66;
    pub const KEYCODE_DEL: i32 = 67;
    pub const KEYCODE_GRAVE: i32 = 68;
    pub const KEYCODE_MINUS: i32 = 69;
    pub const KEYCODE_EQUALS: i32 = 70;
    pub const KEYCODE_LEFT_BRACKET: i32 = 71;
    pub const KEYCODE_RIGHT_BRACKET: i32 = 72;
    pub const KEYCODE_BACKSLASH: i32 = 73;
    pub const KEYCODE_SEMICOLON: i32 = 74;
    pub const KEYCODE_APOSTROPHE: i32 = 75;
    pub const KEYCODE_SLASH: i32 = 76;
    pub const KEYCODE_AT: i32 = 77;
    pub const KEYCODE_PLUS: i32 = 81;
    pub const KEYCODE_PAGE_UP: i32 = 92;
    pub const KEYCODE_PAGE_DOWN: i32 = 93;
    pub const KEYCODE_ESCAPE: i32 = 111;
    pub const KEYCODE_FORWARD_DEL: i32 = 112;
    pub const KEYCODE_CTRL_LEFT: i32 = 113;
    pub const KEYCODE_CTRL_RIGHT: i32 = 114;
    pub const KEYCODE_CAPS_LOCK: i32 = 115;
    pub const KEYCODE_SCROLL_LOCK: i32 = 116;
    pub const KEYCODE_META_LEFT: i32 = 117;
    pub const KEYCODE_META_RIGHT: i32 = 118;
    pub const KEYCODE_BREAK: i32 = 121;
    pub const KEYCODE_MOVE_HOME: i32 = 122;
    pub const KEYCODE_MOVE_END: i32 = 123;
    pub const KEYCODE_INSERT: i32 = 124;
    pub const KEYCODE_F1: i32 = 131;
    pub const KEYCODE_F2: i32 = 132;
    pub const KEYCODE_F3: i32 = 133;
    pub const KEYCODE_F4: i32 = 134;
    pub const KEYCODE_F5: i32 = 135;
    pub const KEYCODE_F6: i32 = 136;
    pub const KEYCODE_F7: i32 = 137;
    pub const KEYCODE_F8: i32 = 138;
    pub const KEYCODE_F9: i32 = 139;
    pub const KEYCODE_F10: i32 = 140;
    pub const KEYCODE_F11: i32 = 141;
    pub const KEYCODE_F12: i32 = 142;
    pub const KEYCODE_NUM_LOCK: i32 = 143;
    pub const KEYCODE_NUMPAD_0: i32 = 144;
    pub const KEYCODE_NUMPAD_1: i32 = 145;
    pub const KEYCODE_NUMPAD_2: i32 = 146;
    pub const KEYCODE_NUMPAD_3: i32 = 147;
    pub const KEYCODE_NUMPAD_4: i32 = 148;
    pub const KEYCODE_NUMPAD_5: i32 = 149;
    pub const KEYCODE_NUMPAD_6: i32 = 150;
    pub const KEYCODE_NUMPAD_7: i32 = 151;
    pub const KEYCODE_NUMPAD_8: i32 = 152;
    pub const KEYCODE_NUMPAD_9: i32 = 153;
    pub const KEYCODE_NUMPAD_DIVIDE: i32 = 154;
    pub const KEYCODE_NUMPAD_MULTIPLY: i32 = 155;
    pub const KEYCODE_NUMPAD_SUBTRACT: i32 = 156;
    pub const KEYCODE_NUMPAD_ADD: i32 = 157;
    pub const KEYCODE_NUMPAD_DOT: i32 = 158;
    pub const KEYCODE_NUMPAD_COMMA: i32 = 159;
    pub const KEYCODE_NUMPAD_ENTER: i32 = 160;
    pub const KEYCODE_NUMPAD_EQUALS: i32 = 161;

    // Meta state flags (KeyEvent.getMetaState())
    pub const META_SHIFT_ON: u32 = 0x01;
    pub const META_ALT_ON: u32 = 0x02;
    pub const META_CTRL_ON: u32 = 0x1000;
    pub const META_META_ON: u32 = 0x10000;
    pub const META_CAPS_LOCK_ON: u32 = 0x100000;
    pub const META_NUM_LOCK_ON: u32 = 0x200000;

    // Actions
    pub const ACTION_DOWN: i32 = 0;
    pub const ACTION_UP: i32 = 1;
    pub const ACTION_MULTIPLE: i32 = 2;
}

/// GLFW key codes and modifier bits
pub mod glfw {
    pub const GLFW_KEY_UNKNOWN: i16 = -1;

    // Printable keys
    pub const GLFW_KEY_SPACE: i16 = 32;
    pub const GLFW_KEY_APOSTROPHE: i16 = 39;
    pub const GLFW_KEY_COMMA: i16 = 44;
    pub const GLFW_KEY_MINUS: i16 = 45;
    pub const GLFW_KEY_PERIOD: i16 = 46;
    pub const GLFW_KEY_SLASH: i16 = 47;
    pub const GLFW_KEY_0: i16 = 48;
    pub const GLFW_KEY_1: i16 = 49;
    pub const GLFW_KEY_2: i16 = 50;
    pub const GLFW_KEY_3: i16 = 51;
    pub const GLFW_KEY_4: i16 = 52;
    pub const GLFW_KEY_5: i16 = 53;
    pub const GLFW_KEY_6: i16 = 54;
    pub const GLFW_KEY_7: i16 = 55;
    pub const GLFW_KEY_8: i16 = 56;
    pub const GLFW_KEY_9: i16 = 57;
    pub const GLFW_KEY_SEMICOLON: i16 = 59;
    pub const GLFW_KEY_EQUAL: i16 = 61;
    pub const GLFW_KEY_A: i16 = 65;
    pub const GLFW_KEY_B: i16 = 66;
    pub const GLFW_KEY_C: i16 = 67;
    pub const GLFW_KEY_D: i16 = 68;
    pub const GLFW_KEY_E: i16 = 69;
    pub const GLFW_KEY_F: i16 = 70;
    pub const GLFW_KEY_G: i16 = 71;
    pub const GLFW_KEY_H: i16 = 72;
    pub const GLFW_KEY_I: i16 = 73;
    pub const GLFW_KEY_J: i16 = 74;
    pub const GLFW_KEY_K: i16 = 75;
    pub const GLFW_KEY_L: i16 = 76;
    pub const GLFW_KEY_M: i16 = 77;
    pub const GLFW_KEY_N: i16 = 78;
    pub const GLFW_KEY_O: i16 = 79;
    pub const GLFW_KEY_P: i16 = 80;
    pub const GLFW_KEY_Q: i16 = 81;
    pub const GLFW_KEY_R: i16 = 82;
    pub const GLFW_KEY_S: i16 = 83;
    pub const GLFW_KEY_T: i16 = 84;
    pub const GLFW_KEY_U: i16 = 85;
    pub const GLFW_KEY_V: i16 = 86;
    pub const GLFW_KEY_W: i16 = 87;
    pub const GLFW_KEY_X: i16 = 88;
    pub const GLFW_KEY_Y: i16 = 89;
    pub const GLFW_KEY_Z: i16 = 90;
    pub const GLFW_KEY_LEFT_BRACKET: i16 = 91;
    pub const GLFW_KEY_BACKSLASH: i16 = 92;
    pub const GLFW_KEY_RIGHT_BRACKET: i16 = 93;
    pub const GLFW_KEY_GRAVE_ACCENT: i16 = 96;

    // Function keys
    pub const GLFW_KEY_ESCAPE: i16 = 256;
    pub const GLFW_KEY_ENTER: i16 = 257;
    pub const GLFW_KEY_TAB: i16 = 258;
    pub const GLFW_KEY_BACKSPACE: i16 = 259;
    pub const GLFW_KEY_INSERT: i16 = 260;
    pub const GLFW_KEY_DELETE: i16 = 261;
    pub const GLFW_KEY_RIGHT: i16 = 262;
    pub const GLFW_KEY_LEFT: i16 = 263;
    pub const GLFW_KEY_DOWN: i16 = 264;
    pub const GLFW_KEY_UP: i16 = 265;
    pub const GLFW_KEY_PAGE_UP: i16 = 266;
    pub const GLFW_KEY_PAGE_DOWN: i16 = 267;
    pub const GLFW_KEY_HOME: i16 = 268;
    pub const GLFW_KEY_END: i16 = 269;
    pub const GLFW_KEY_CAPS_LOCK: i16 = 280;
    pub const GLFW_KEY_SCROLL_LOCK: i16 = 281;
    pub const GLFW_KEY_NUM_LOCK: i16 = 282;
    pub const GLFW_KEY_PRINT_SCREEN: i16 = 283;
    pub const GLFW_KEY_PAUSE: i16 = 284;
    pub const GLFW_KEY_F1: i16 = 290;
    pub const GLFW_KEY_F2: i16 = 291;
    pub const GLFW_KEY_F3: i16 = 292;
    pub const GLFW_KEY_F4: i16 = 293;
    pub const GLFW_KEY_F5: i16 = 294;
    pub const GLFW_KEY_F6: i16 = 295;
    pub const GLFW_KEY_F7: i16 = 296;
    pub const GLFW_KEY_F8: i16 = 297;
    pub const GLFW_KEY_F9: i16 = 298;
    pub const GLFW_KEY_F10: i16 = 299;
    pub const GLFW_KEY_F11: i16 = 300;
    pub const GLFW_KEY_F12: i16 = 301;

    // Keypad
    pub const GLFW_KEY_KP_0: i16 = 320;
    pub const GLFW_KEY_KP_1: i16 = 321;
    pub const GLFW_KEY_KP_2: i16 = 322;
    pub const GLFW_KEY_KP_3: i16 = 323;
    pub const GLFW_KEY_KP_4: i16 = 324;
    pub const GLFW_KEY_KP_5: i16 = 325;
    pub const GLFW_KEY_KP_6: i16 = 326;
    pub const GLFW_KEY_KP_7: i16 = 327;
    pub const GLFW_KEY_KP_8: i16 = 328;
    pub const GLFW_KEY_KP_9: i16 = 329;
    pub const GLFW_KEY_KP_DECIMAL: i16 = 330;
    pub const GLFW_KEY_KP_DIVIDE: i16 = 331;
    pub const GLFW_KEY_KP_MULTIPLY: i16 = 332;
    pub const GLFW_KEY_KP_SUBTRACT: i16 = 333;
    pub const GLFW_KEY_KP_ADD: i16 = 334;
    pub const GLFW_KEY_KP_ENTER: i16 = 335;
    pub const GLFW_KEY_KP_EQUAL: i16 = 336;

    // Modifier keys
    pub const GLFW_KEY_LEFT_SHIFT: i16 = 340;
    pub const GLFW_KEY_LEFT_CONTROL: i16 = 341;
    pub const GLFW_KEY_LEFT_ALT: i16 = 342;
    pub const GLFW_KEY_LEFT_SUPER: i16 = 343;
    pub const GLFW_KEY_RIGHT_SHIFT: i16 = 344;
    pub const GLFW_KEY_RIGHT_CONTROL: i16 = 345;
    pub const GLFW_KEY_RIGHT_ALT: i16 = 346;
    pub const GLFW_KEY_RIGHT_SUPER: i16 = 347;
    pub const GLFW_KEY_MENU: i16 = 348;

    // Modifier bits
    pub const GLFW_MOD_SHIFT: i32 = 0x0001;
    pub const GLFW_MOD_CONTROL: i32 = 0x0002;
    pub const GLFW_MOD_ALT: i32 = 0x0004;
    pub const GLFW_MOD_SUPER: i32 = 0x0008;
    pub const GLFW_MOD_CAPS_LOCK: i32 = 0x0010;
    pub const GLFW_MOD_NUM_LOCK: i32 = 0x0020;
}

/// AWT key codes and event masks (AWT-based games)
pub mod awt {
    pub const SHIFT_MASK: i32 = 1;
    pub const CTRL_MASK: i32 = 1 << 1;
    pub const META_MASK: i32 = 1 << 2;
    pub const ALT_MASK: i32 = 1 << 3;
    pub const BUTTON1_MASK: i32 = 1 << 4;
    pub const BUTTON2_MASK: i32 = ALT_MASK;
    pub const BUTTON3_MASK: i32 = META_MASK;

    pub const VK_UNDEFINED: i32 = 0;
    pub const VK_ENTER: i32 = '\n' as i32;
    pub const VK_BACK_SPACE: i32 = 0x08;
    pub const VK_TAB: i32 = '\t' as i32;
    pub const VK_ESCAPE: i32 = 0x1B;
    pub const VK_SPACE: i32 = 0x20;
    pub const VK_LEFT: i32 = 0x25;
    pub const VK_UP: i32 = 0x26;
    pub const VK_RIGHT: i32 = 0x27;
    pub const VK_DOWN: i32 = 0x28;
}
