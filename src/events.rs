//! Tagged inbound-event types. Raw message text and callback payloads are
//! parsed into enums here so the handlers route on variants instead of
//! scattering string comparisons.

use std::str::FromStr;

use crate::constants;

/// Slash commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
}

/// Fixed reply-keyboard labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Learn,
    AddWord,
    DeleteWord,
    Stats,
    Cancel,
}

/// One inbound text message, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    Command(Command),
    Menu(MenuAction),
    /// Anything else; routed by the sender's current session.
    Text(String),
}

pub fn classify_message(text: &str) -> InboundMessage {
    if text == "/start" || text.starts_with("/start@") {
        return InboundMessage::Command(Command::Start);
    }
    match text {
        constants::BTN_LEARN => InboundMessage::Menu(MenuAction::Learn),
        constants::BTN_ADD_WORD => InboundMessage::Menu(MenuAction::AddWord),
        constants::BTN_DELETE_WORD => InboundMessage::Menu(MenuAction::DeleteWord),
        constants::BTN_STATS => InboundMessage::Menu(MenuAction::Stats),
        constants::BTN_CANCEL => InboundMessage::Menu(MenuAction::Cancel),
        other => InboundMessage::Text(other.to_string()),
    }
}

/// Parsed inline-button payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// `answer_<translation>` — a quiz option was pressed.
    Answer(String),
    /// `next_word` — ask another question.
    NextWord,
    /// `delete_<id>` — remove a personal word.
    Delete(i32),
}

impl FromStr for CallbackAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == constants::CB_NEXT_WORD {
            return Ok(CallbackAction::NextWord);
        }
        if let Some(answer) = s.strip_prefix(constants::CB_ANSWER_PREFIX) {
            return Ok(CallbackAction::Answer(answer.to_string()));
        }
        if let Some(raw_id) = s.strip_prefix(constants::CB_DELETE_PREFIX) {
            return raw_id.parse::<i32>().map(CallbackAction::Delete).map_err(|_| ());
        }
        Err(())
    }
}
