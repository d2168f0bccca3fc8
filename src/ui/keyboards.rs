//! Central keyboard construction so every handler presents the same
//! menus and button layout.

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

use crate::constants::{
    BTN_ADD_WORD, BTN_CANCEL, BTN_DELETE_WORD, BTN_LEARN, BTN_NEXT_WORD, BTN_SKIP, BTN_STATS,
    CB_ANSWER_PREFIX, CB_DELETE_PREFIX, CB_NEXT_WORD,
};
use crate::database::models::UserWord;

/// The persistent four-action main menu.
pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(BTN_LEARN), KeyboardButton::new(BTN_ADD_WORD)],
        vec![KeyboardButton::new(BTN_DELETE_WORD), KeyboardButton::new(BTN_STATS)],
    ])
    .resize_keyboard(true)
}

/// Shown while the wizard collects the english word and the translation.
pub fn cancel_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(BTN_CANCEL)]]).resize_keyboard(true)
}

/// Shown at the optional example step of the wizard.
pub fn skip_or_cancel_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(BTN_SKIP),
        KeyboardButton::new(BTN_CANCEL),
    ]])
    .resize_keyboard(true)
}

/// One button per answer option; the option text rides in the payload.
pub fn answer_keyboard(options: &[String]) -> InlineKeyboardMarkup {
    let rows = options
        .iter()
        .map(|option| {
            vec![InlineKeyboardButton::callback(
                option.clone(),
                format!("{CB_ANSWER_PREFIX}{option}"),
            )]
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

pub fn next_word_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        BTN_NEXT_WORD,
        CB_NEXT_WORD,
    )]])
}

/// One button per personal word, payload carrying the row id.
pub fn delete_keyboard(words: &[UserWord]) -> InlineKeyboardMarkup {
    let rows = words
        .iter()
        .map(|word| {
            vec![InlineKeyboardButton::callback(
                format!("🗑 {} - {}", word.english_text, word.translation),
                format!("{CB_DELETE_PREFIX}{}", word.id),
            )]
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}
