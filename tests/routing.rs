//! Tests for inbound-event classification and callback-payload parsing.

use std::str::FromStr;

use wordtrainer_bot::constants::{
    BTN_ADD_WORD, BTN_CANCEL, BTN_DELETE_WORD, BTN_LEARN, BTN_STATS,
};
use wordtrainer_bot::events::{
    classify_message, CallbackAction, Command, InboundMessage, MenuAction,
};

#[test]
fn start_command_is_recognized() {
    assert_eq!(
        classify_message("/start"),
        InboundMessage::Command(Command::Start)
    );
    assert_eq!(
        classify_message("/start@wordtrainer_bot"),
        InboundMessage::Command(Command::Start)
    );
}

#[test]
fn menu_labels_route_to_their_actions() {
    let cases = [
        (BTN_LEARN, MenuAction::Learn),
        (BTN_ADD_WORD, MenuAction::AddWord),
        (BTN_DELETE_WORD, MenuAction::DeleteWord),
        (BTN_STATS, MenuAction::Stats),
        (BTN_CANCEL, MenuAction::Cancel),
    ];
    for (label, action) in cases {
        assert_eq!(classify_message(label), InboundMessage::Menu(action));
    }
}

#[test]
fn anything_else_is_free_text() {
    assert_eq!(
        classify_message("hello"),
        InboundMessage::Text("hello".to_string())
    );
    // An unknown command is still just text for the wizard to consume.
    assert_eq!(
        classify_message("/stop"),
        InboundMessage::Text("/stop".to_string())
    );
}

#[test]
fn answer_payload_keeps_the_option_text() {
    assert_eq!(
        CallbackAction::from_str("answer_кот"),
        Ok(CallbackAction::Answer("кот".to_string()))
    );
    // Underscores inside the option survive.
    assert_eq!(
        CallbackAction::from_str("answer_a_b"),
        Ok(CallbackAction::Answer("a_b".to_string()))
    );
}

#[test]
fn delete_payload_parses_the_row_id() {
    assert_eq!(CallbackAction::from_str("delete_5"), Ok(CallbackAction::Delete(5)));
    assert_eq!(CallbackAction::from_str("delete_abc"), Err(()));
    assert_eq!(CallbackAction::from_str("delete_"), Err(()));
}

#[test]
fn next_word_and_garbage_payloads() {
    assert_eq!(
        CallbackAction::from_str("next_word"),
        Ok(CallbackAction::NextWord)
    );
    assert_eq!(CallbackAction::from_str(""), Err(()));
    assert_eq!(CallbackAction::from_str("unrelated"), Err(()));
}
