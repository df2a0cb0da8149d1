//! Paste tests
//!
//! Tests for spreading clipboard text across slots, truncation, and where
//! focus lands afterwards.

mod common;

use common::{change, model_with, paste, slots, test_model};

use otp_field::update::update;

#[test]
fn test_paste_fills_all_slots() {
    let mut model = test_model(4);

    let cmd = update(&mut model, paste("1234")).unwrap();

    assert_eq!(model.code(), "1234");
    assert_eq!(model.state.active_index(), 3);
    assert!(cmd.prevents_default());
}

#[test]
fn test_paste_shorter_than_slots() {
    let mut model = test_model(4);

    update(&mut model, paste("12"));

    assert_eq!(model.code(), "12");
    assert_eq!(slots(&model), vec!["1", "2", "", ""]);
    assert_eq!(model.state.active_index(), 2);
}

#[test]
fn test_paste_longer_than_slots_is_truncated() {
    let mut model = test_model(4);

    update(&mut model, paste("123456"));

    assert_eq!(model.code(), "1234");
    assert_eq!(model.state.active_index(), 3);
}

#[test]
fn test_paste_from_middle_slot() {
    let mut model = model_with(&["9", "", "", ""], 2);

    update(&mut model, paste("34"));

    assert_eq!(model.code(), "934");
    assert_eq!(slots(&model), vec!["9", "", "3", "4"]);
    assert_eq!(model.state.active_index(), 3);
}

#[test]
fn test_paste_from_middle_truncates_to_remaining() {
    let mut model = model_with(&["1", "2", "", ""], 2);

    update(&mut model, paste("789"));

    assert_eq!(slots(&model), vec!["1", "2", "7", "8"]);
    assert_eq!(model.state.active_index(), 3);
}

#[test]
fn test_paste_overwrites_filled_slots() {
    let mut model = model_with(&["1", "1", "1", "1"], 1);

    update(&mut model, paste("22"));

    assert_eq!(slots(&model), vec!["1", "2", "2", "1"]);
    assert_eq!(model.state.active_index(), 3);
}

#[test]
fn test_paste_at_last_slot_pins_focus() {
    let mut model = model_with(&["", "", "", ""], 3);

    update(&mut model, paste("56"));

    assert_eq!(slots(&model), vec!["", "", "", "5"]);
    assert_eq!(model.state.active_index(), 3);
}

#[test]
fn test_empty_paste_changes_nothing() {
    let mut model = model_with(&["1", "", ""], 1);
    let before = model.state.clone();

    let cmd = update(&mut model, paste("")).unwrap();

    assert_eq!(model.state, before);
    // Native insertion is still suppressed
    assert!(cmd.prevents_default());
    assert!(!cmd.needs_render());
}

#[test]
fn test_paste_into_zero_slots() {
    let mut model = test_model(0);

    update(&mut model, paste("1234"));

    assert_eq!(model.code(), "");
    assert_eq!(model.state.active_index(), 0);
}

#[test]
fn test_paste_notifies_once_with_final_code() {
    let mut model = test_model(4);

    let cmd = update(&mut model, paste("1234")).unwrap();

    let otp_field::Cmd::Batch(cmds) = cmd else {
        panic!("expected a batch");
    };
    let notifications: Vec<_> = cmds
        .iter()
        .filter_map(|c| match c {
            otp_field::Cmd::NotifyChange { code } => Some(code.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(notifications, vec!["1234"]);
}

#[test]
fn test_typing_matches_equivalent_paste() {
    for n in [1, 4, 6] {
        let code: String = "918273".chars().take(n).collect();

        let mut typed = test_model(n);
        for c in code.chars() {
            update(&mut typed, change(&c.to_string()));
        }

        let mut pasted = test_model(n);
        update(&mut pasted, paste(&code));

        assert_eq!(typed.code(), code);
        assert_eq!(typed.code(), pasted.code());
        assert_eq!(typed.state, pasted.state, "n = {}", n);
    }
}
