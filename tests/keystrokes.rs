//! Keystroke dispatch tests
//!
//! Tests for character entry (auto-advance), Backspace, Delete, Space, and
//! keys the field leaves alone.

mod common;

use common::{change, key, model_with, slots, test_model};

use otp_field::commands::Cmd;
use otp_field::update::update;

// ========================================================================
// Character Entry
// ========================================================================

#[test]
fn test_typing_fills_and_advances() {
    let mut model = test_model(4);

    update(&mut model, change("1"));

    assert_eq!(slots(&model), vec!["1", "", "", ""]);
    assert_eq!(model.state.active_index(), 1);
}

#[test]
fn test_typing_in_last_slot_keeps_focus() {
    let mut model = model_with(&["1", "2", "3", ""], 3);

    update(&mut model, change("4"));

    assert_eq!(model.code(), "1234");
    assert_eq!(model.state.active_index(), 3);
}

#[test]
fn test_typing_over_filled_slot_takes_new_character() {
    let mut model = model_with(&["1", "", "", ""], 0);

    update(&mut model, change("15"));

    assert_eq!(slots(&model), vec!["5", "", "", ""]);
    assert_eq!(model.state.active_index(), 1);
}

#[test]
fn test_typing_every_slot_in_order() {
    let mut model = test_model(6);

    for c in ["4", "8", "1", "5", "1", "6"] {
        update(&mut model, change(c));
    }

    assert_eq!(model.code(), "481516");
    assert_eq!(model.state.active_index(), 5);
    assert!(model.state.is_complete());
}

#[test]
fn test_change_effects_render_focus_notify() {
    let mut model = test_model(4);

    let cmd = update(&mut model, change("7")).unwrap();

    assert_eq!(
        cmd,
        Cmd::Batch(vec![
            Cmd::Render,
            Cmd::Focus(1),
            Cmd::NotifyChange {
                code: "7".to_string()
            },
        ])
    );
}

#[test]
fn test_change_does_not_prevent_default() {
    let mut model = test_model(4);

    let cmd = update(&mut model, change("7")).unwrap();

    assert!(!cmd.prevents_default());
}

// ========================================================================
// Backspace
// ========================================================================

#[test]
fn test_backspace_clears_and_retreats() {
    let mut model = model_with(&["1", "2", "3", ""], 2);

    let cmd = update(&mut model, key("Backspace")).unwrap();

    assert_eq!(slots(&model), vec!["1", "2", "", ""]);
    assert_eq!(model.state.active_index(), 1);
    assert!(cmd.prevents_default());
}

#[test]
fn test_backspace_on_first_slot_clears_without_moving() {
    let mut model = model_with(&["1", "2", "", ""], 0);

    update(&mut model, key("Backspace"));

    assert_eq!(slots(&model), vec!["", "2", "", ""]);
    assert_eq!(model.state.active_index(), 0);
}

#[test]
fn test_backspace_on_empty_slot_still_retreats() {
    let mut model = model_with(&["1", "2", "", ""], 2);

    let cmd = update(&mut model, key("Backspace")).unwrap();

    assert_eq!(slots(&model), vec!["1", "2", "", ""]);
    assert_eq!(model.state.active_index(), 1);
    assert_eq!(cmd.focus_target(), Some(1));
}

#[test]
fn test_repeated_backspace_erases_whole_code() {
    let mut model = model_with(&["1", "2", "3", "4"], 3);

    for _ in 0..4 {
        update(&mut model, key("Backspace"));
    }

    assert_eq!(model.code(), "");
    assert_eq!(model.state.active_index(), 0);
}

// ========================================================================
// Delete
// ========================================================================

#[test]
fn test_delete_clears_without_moving() {
    let mut model = model_with(&["1", "2", "3", "4"], 1);

    let cmd = update(&mut model, key("Delete")).unwrap();

    assert_eq!(slots(&model), vec!["1", "", "3", "4"]);
    assert_eq!(model.state.active_index(), 1);
    assert!(cmd.prevents_default());
    assert_eq!(cmd.focus_target(), None);
}

// ========================================================================
// Space And Unhandled Keys
// ========================================================================

#[test]
fn test_space_is_swallowed() {
    for name in [" ", "Spacebar", "space"] {
        let mut model = model_with(&["1", "", ""], 1);

        let cmd = update(&mut model, key(name));

        assert_eq!(cmd, Some(Cmd::PreventDefault), "key {:?}", name);
        assert_eq!(slots(&model), vec!["1", "", ""]);
        assert_eq!(model.state.active_index(), 1);
    }
}

#[test]
fn test_character_key_down_is_left_to_change_event() {
    let mut model = test_model(4);

    let cmd = update(&mut model, key("5"));

    assert!(cmd.is_none());
    assert_eq!(model.code(), "");
    assert_eq!(model.state.active_index(), 0);
}

#[test]
fn test_other_named_keys_are_ignored() {
    let mut model = model_with(&["1", "2", "", ""], 1);

    for name in ["Tab", "Enter", "ArrowUp", "Home"] {
        assert!(update(&mut model, key(name)).is_none(), "key {:?}", name);
    }

    assert_eq!(slots(&model), vec!["1", "2", "", ""]);
    assert_eq!(model.state.active_index(), 1);
}
