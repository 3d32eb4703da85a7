use proptest::prelude::*;
use shard_input::input::keycodes::{android, glfw};
use shard_input::input::{InputError, KeycodeTable, KEYCODE_COUNT, KEYCODE_PAIRS};
use std::collections::HashSet;

#[test]
fn test_every_source_resolves_to_its_own_index() {
    let table = KeycodeTable::global();
    assert_eq!(table.len(), KEYCODE_COUNT);

    for (index, &(source, target)) in KEYCODE_PAIRS.iter().enumerate() {
        assert_eq!(table.index_of(source), Some(index), "source {source}");
        assert_eq!(table.target_code_at(index), target);
    }
}

#[test]
fn test_reverse_lookup_returns_first_position() {
    let table = KeycodeTable::global();

    for entry in table.iter() {
        let found = table.index_of_target_code(entry.target).unwrap();
        assert!(found <= entry.index);
        assert_eq!(table.target_code_at(found), entry.target);
        assert!(KEYCODE_PAIRS[..found]
            .iter()
            .all(|&(_, target)| target != entry.target));
    }
}

#[test]
fn test_shared_targets_resolve_to_earliest_source() {
    let table = KeycodeTable::global();

    // HOME and MOVE_HOME both press GLFW Home; BACK and ESCAPE both press Escape
    assert_eq!(table.reverse_translate(glfw::GLFW_KEY_HOME), Some(android::KEYCODE_HOME));
    assert_eq!(table.reverse_translate(glfw::GLFW_KEY_ESCAPE), Some(android::KEYCODE_BACK));
    assert_eq!(table.translate(android::KEYCODE_MOVE_HOME), Some(glfw::GLFW_KEY_HOME));
}

#[test]
fn test_unknown_sentinel_is_first() {
    let table = KeycodeTable::global();
    assert_eq!(table.index_of(android::KEYCODE_UNKNOWN), Some(0));
    assert_eq!(table.target_code_at(0), glfw::GLFW_KEY_UNKNOWN);
    assert_eq!(table.index_of_target_code(glfw::GLFW_KEY_UNKNOWN), Some(0));
}

#[test]
fn test_well_known_keys() {
    let table = KeycodeTable::global();
    assert_eq!(table.translate(android::KEYCODE_W), Some(glfw::GLFW_KEY_W));
    assert_eq!(table.translate(android::KEYCODE_SPACE), Some(glfw::GLFW_KEY_SPACE));
    assert_eq!(table.translate(android::KEYCODE_DEL), Some(glfw::GLFW_KEY_BACKSPACE));
    assert_eq!(table.translate(android::KEYCODE_NUMPAD_ENTER), Some(glfw::GLFW_KEY_KP_ENTER));
    assert_eq!(table.translate(android::KEYCODE_STAR), None);
}

#[test]
fn test_from_pairs_rejects_over_capacity() {
    let pairs: Vec<(i32, i16)> = (0..=KEYCODE_COUNT as i32).map(|i| (i, 0)).collect();
    assert_eq!(
        KeycodeTable::from_pairs(&pairs).unwrap_err(),
        InputError::CapacityExceeded {
            count: KEYCODE_COUNT + 1,
            capacity: KEYCODE_COUNT,
        }
    );
}

#[test]
fn test_global_table_is_shared_across_threads() {
    let addresses: HashSet<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| std::ptr::from_ref(KeycodeTable::global()) as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(addresses.len(), 1);
}

fn mapped_sources() -> HashSet<i32> {
    KEYCODE_PAIRS.iter().map(|&(source, _)| source).collect()
}

fn mapped_targets() -> HashSet<i16> {
    KEYCODE_PAIRS.iter().map(|&(_, target)| target).collect()
}

proptest! {
    #[test]
    fn prop_absent_source_is_not_found(code in any::<i32>()) {
        prop_assume!(!mapped_sources().contains(&code));
        let table = KeycodeTable::global();
        prop_assert_eq!(table.index_of(code), None);
        prop_assert_eq!(table.translate(code), None);
        prop_assert_eq!(table.try_translate(code), Err(InputError::UnknownSourceKeycode(code)));
    }

    #[test]
    fn prop_absent_target_is_not_found(code in any::<i16>()) {
        prop_assume!(!mapped_targets().contains(&code));
        prop_assert_eq!(KeycodeTable::global().index_of_target_code(code), None);
    }

    #[test]
    fn prop_get_is_checked(index in 0usize..1024) {
        let table = KeycodeTable::global();
        match table.get(index) {
            Some(entry) => {
                prop_assert!(index < KEYCODE_COUNT);
                prop_assert_eq!(entry.target, table.target_code_at(index));
            }
            None => prop_assert!(index >= KEYCODE_COUNT),
        }
    }

    #[test]
    fn prop_custom_table_lookup(codes in proptest::collection::hash_set(any::<i32>(), 1..KEYCODE_COUNT)) {
        let pairs: Vec<(i32, i16)> = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| (code, i as i16))
            .collect();
        let table = KeycodeTable::from_pairs(&pairs).unwrap();

        for (index, &(source, target)) in pairs.iter().enumerate() {
            prop_assert_eq!(table.index_of(source), Some(index));
            prop_assert_eq!(table.index_of_target_code(target), Some(index));
        }
    }
}
