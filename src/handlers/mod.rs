//! Routing: one inbound update in, one handler out. Messages are classified
//! into commands / menu actions / free text, callback payloads into their
//! parsed actions; everything else is ignored.

use std::str::FromStr;
use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{Update, UpdateKind};
use tracing::warn;

pub mod add_word;
pub mod delete_word;
pub mod learn;
pub mod start;
pub mod stats;

use crate::events::{classify_message, CallbackAction, Command, InboundMessage, MenuAction};
use crate::model::AppState;
use crate::session::Session;
use crate::ui::keyboards;

pub async fn dispatch(bot: &Bot, state: &Arc<AppState>, update: Update) {
    let result = match update.kind {
        UpdateKind::Message(msg) => on_message(bot, state, &msg).await,
        UpdateKind::CallbackQuery(query) => on_callback(bot, state, &query).await,
        _ => Ok(()),
    };
    if let Err(err) = result {
        warn!(error = ?err, "failed to handle update");
    }
}

async fn on_message(bot: &Bot, state: &Arc<AppState>, msg: &Message) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    match classify_message(text) {
        InboundMessage::Command(Command::Start) => {
            start::handle(bot, state, msg.chat.id, user).await
        }
        InboundMessage::Menu(MenuAction::Learn) => {
            learn::begin(bot, state, msg.chat.id, user.id).await
        }
        InboundMessage::Menu(MenuAction::AddWord) => {
            add_word::begin(bot, state, msg.chat.id, user.id).await
        }
        InboundMessage::Menu(MenuAction::DeleteWord) => {
            delete_word::list(bot, state, msg.chat.id, user.id).await
        }
        InboundMessage::Menu(MenuAction::Stats) => {
            stats::show(bot, state, msg.chat.id, user.id).await
        }
        InboundMessage::Menu(MenuAction::Cancel) => {
            cancel(bot, state, msg.chat.id, user.id).await
        }
        InboundMessage::Text(text) => on_free_text(bot, state, msg.chat.id, user.id, &text).await,
    }
}

async fn on_callback(bot: &Bot, state: &Arc<AppState>, query: &CallbackQuery) -> ResponseResult<()> {
    let Some(action) = query.data.as_deref().and_then(|d| CallbackAction::from_str(d).ok())
    else {
        // Unknown or missing payload; acknowledge so the client stops spinning.
        bot.answer_callback_query(query.id.clone()).await?;
        return Ok(());
    };
    match action {
        CallbackAction::Answer(answer) => learn::handle_answer(bot, state, query, &answer).await,
        CallbackAction::NextWord => learn::next_word(bot, state, query).await,
        CallbackAction::Delete(word_id) => {
            delete_word::handle_delete(bot, state, query, word_id).await
        }
    }
}

/// Drops whatever the user was doing and re-shows the main menu.
async fn cancel(bot: &Bot, state: &Arc<AppState>, chat: ChatId, user: UserId) -> ResponseResult<()> {
    state.sessions.remove(user).await;
    bot.send_message(chat, "Действие отменено. Выберите новое действие:")
        .reply_markup(keyboards::main_menu())
        .await?;
    Ok(())
}

/// Catch-all text, routed by the sender's current session: wizard input when
/// the wizard is active, ignored during a quiz (answers arrive as callbacks),
/// otherwise a nudge back to the menu.
async fn on_free_text(
    bot: &Bot,
    state: &Arc<AppState>,
    chat: ChatId,
    user: UserId,
    text: &str,
) -> ResponseResult<()> {
    match state.sessions.get(user).await {
        Some(Session::AddWord(wizard)) => {
            add_word::advance(bot, state, chat, user, wizard, text).await
        }
        Some(Session::Quiz(_)) => Ok(()),
        None => {
            bot.send_message(chat, "Выберите действие из меню:")
                .reply_markup(keyboards::main_menu())
                .await?;
            Ok(())
        }
    }
}
