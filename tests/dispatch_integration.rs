use shard_input::input::event::{EVENT_TYPE_CHAR, EVENT_TYPE_KEY};
use shard_input::input::keycodes::{android, glfw};
use shard_input::input::{
    sender_for, ChannelSink, InputEvent, InputSink, KeyDispatcher, KeycodeTable, RawInputEvent,
    SenderKind, SourceKeyEvent,
};
use std::sync::{Arc, Mutex};

/// Sink recording wire records, shared with the test body
#[derive(Default)]
struct RecordingSink {
    records: Mutex<Vec<RawInputEvent>>,
}

impl InputSink for RecordingSink {
    fn deliver(&self, event: InputEvent) {
        self.records.lock().unwrap().push(event.to_raw());
    }
}

#[test]
fn test_shifted_letter_reaches_bridge() {
    let sink = Arc::new(RecordingSink::default());
    let mut dispatcher = KeyDispatcher::new(Arc::clone(&sink));

    let down = SourceKeyEvent::down(android::KEYCODE_A, 'A' as u32)
        .with_meta_state(android::META_SHIFT_ON | android::META_CAPS_LOCK_ON);
    let up = SourceKeyEvent::up(android::KEYCODE_A, 'A' as u32)
        .with_meta_state(android::META_SHIFT_ON | android::META_CAPS_LOCK_ON);

    dispatcher.handle_source_event(&down).unwrap();
    dispatcher.handle_source_event(&up).unwrap();

    let mods = glfw::GLFW_MOD_SHIFT | glfw::GLFW_MOD_CAPS_LOCK;
    let key = i32::from(glfw::GLFW_KEY_A);
    assert_eq!(
        *sink.records.lock().unwrap(),
        vec![
            RawInputEvent {
                event_type: EVENT_TYPE_KEY,
                params: [key, 'A' as i32, 1, mods],
            },
            RawInputEvent {
                event_type: EVENT_TYPE_KEY,
                params: [key, 'A' as i32, 0, mods],
            },
        ]
    );
}

#[test]
fn test_raw_source_events_decode_and_dispatch() {
    let (sink, rx) = ChannelSink::new();
    let mut dispatcher = KeyDispatcher::new(sink);

    let event = SourceKeyEvent::from_raw(
        android::KEYCODE_ESCAPE,
        0,
        android::ACTION_DOWN,
        android::META_CTRL_ON,
    )
    .unwrap();
    let press = dispatcher.handle_source_event(&event).unwrap().unwrap();

    assert_eq!(press.key_code, glfw::GLFW_KEY_ESCAPE);
    assert_eq!(press.mods, glfw::GLFW_MOD_CONTROL);
    assert_eq!(InputEvent::from_raw(rx.recv().unwrap().to_raw()).unwrap(), press.to_event());
}

#[test]
fn test_bridge_consumer_thread() {
    let (sink, rx) = ChannelSink::new();
    let consumer = std::thread::spawn(move || rx.iter().map(|e| e.to_raw()).collect::<Vec<_>>());

    {
        let mut dispatcher = KeyDispatcher::new(sink.clone());
        for code in [android::KEYCODE_W, android::KEYCODE_SPACE, android::KEYCODE_STAR] {
            dispatcher
                .handle_source_event(&SourceKeyEvent::down(code, 0))
                .unwrap();
        }

        let sender = sender_for(SenderKind::Glfw, sink, KeycodeTable::global());
        sender.send_char('é');
    }

    let records = consumer.join().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].params[0], i32::from(glfw::GLFW_KEY_W));
    assert_eq!(records[1].params[0], i32::from(glfw::GLFW_KEY_SPACE));
    assert_eq!(records[2].event_type, EVENT_TYPE_CHAR);
    assert_eq!(records[2].params[0], 'é' as i32);
}

#[test]
fn test_index_dispatch_for_on_screen_buttons() {
    let (sink, rx) = ChannelSink::new();
    let mut dispatcher = KeyDispatcher::new(sink);
    let table = KeycodeTable::global();

    let f5 = table.index_of(android::KEYCODE_F5).unwrap();
    dispatcher.dispatch_index(f5).unwrap();
    assert!(dispatcher.dispatch_index(table.len()).is_err());

    let records: Vec<String> = rx.try_iter().map(|e| e.to_raw().to_string()).collect();
    let key = glfw::GLFW_KEY_F5;
    assert_eq!(
        records,
        vec![format!("1005, {key}, 0, 1, 0"), format!("1005, {key}, 0, 0, 0")]
    );
}

#[test]
fn test_awt_sender_through_shared_sink() {
    let sink = Arc::new(RecordingSink::default());
    let sender = sender_for(SenderKind::Awt, Arc::clone(&sink), KeycodeTable::global());

    sender.send_enter();
    sender.send_left();

    let records = sink.records.lock().unwrap();
    assert_eq!(records[0].event_type, EVENT_TYPE_CHAR);
    assert_eq!(records.len(), 3);
    assert!(records[1..].iter().all(|r| r.event_type == EVENT_TYPE_KEY));
}
