//! The add-word wizard: english -> translation -> optional example.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, warn};

use crate::database::words;
use crate::model::AppState;
use crate::session::{AddWordSession, Session, WizardOutcome};
use crate::ui::keyboards;

/// Entry from the "add word" menu button: opens a fresh wizard, replacing
/// whatever session the user had.
pub async fn begin(bot: &Bot, state: &Arc<AppState>, chat: ChatId, user: UserId) -> ResponseResult<()> {
    state
        .sessions
        .put(user, Session::AddWord(AddWordSession::new()))
        .await;
    bot.send_message(chat, "Введите слово на английском языке:")
        .reply_markup(keyboards::cancel_menu())
        .await?;
    Ok(())
}

/// Feeds one text input into the wizard. The session is dropped
/// unconditionally once the commit is attempted, success or not.
pub async fn advance(
    bot: &Bot,
    state: &Arc<AppState>,
    chat: ChatId,
    user: UserId,
    mut wizard: AddWordSession,
    input: &str,
) -> ResponseResult<()> {
    match wizard.advance(input) {
        WizardOutcome::AskTranslation => {
            state.sessions.put(user, Session::AddWord(wizard)).await;
            bot.send_message(chat, "Теперь введите перевод на русском:")
                .await?;
        }
        WizardOutcome::AskExample => {
            state.sessions.put(user, Session::AddWord(wizard)).await;
            bot.send_message(chat, "Введите пример использования (необязательно):")
                .reply_markup(keyboards::skip_or_cancel_menu())
                .await?;
        }
        WizardOutcome::Commit {
            english,
            translation,
            example,
        } => {
            state.sessions.remove(user).await;
            let added = match words::add_user_word(
                &state.db,
                user.0 as i64,
                &english,
                &translation,
                example.as_deref(),
            )
            .await
            {
                Ok(added) => added,
                Err(err) => {
                    error!(error = ?err, "failed to add word");
                    false
                }
            };
            if added {
                let total = words::get_user_words_count(&state.db, user.0 as i64)
                    .await
                    .unwrap_or_else(|err| {
                        warn!(error = ?err, "failed to count words");
                        0
                    });
                bot.send_message(
                    chat,
                    format!("✅ Слово успешно добавлено!\nТеперь вы изучаете {total} слов."),
                )
                .reply_markup(keyboards::main_menu())
                .await?;
            } else {
                bot.send_message(
                    chat,
                    "❌ Не удалось добавить слово. Возможно, оно уже существует.",
                )
                .reply_markup(keyboards::main_menu())
                .await?;
            }
        }
    }
    Ok(())
}
