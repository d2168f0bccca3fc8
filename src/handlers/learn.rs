//! The quiz: asking questions, grading answers, moving to the next word.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, error};

use crate::database::models::QuizWord;
use crate::database::{progress, words};
use crate::model::AppState;
use crate::quiz;
use crate::session::{AnswerVerdict, QuizSession, Session};
use crate::ui::keyboards;

const MSG_NO_WORDS: &str = "В базе пока нет слов для изучения.";
const MSG_DB_ERROR: &str = "⚠️ Что-то пошло не так, попробуйте позже.";

/// Entry from the "learn" menu button.
pub async fn begin(bot: &Bot, state: &Arc<AppState>, chat: ChatId, user: UserId) -> ResponseResult<()> {
    send_question(bot, state, chat, user).await
}

/// Picks a random word, stores the quiz session, and sends the question
/// with its shuffled answer options. An empty pool is informational, not
/// an error, and leaves no session behind.
async fn send_question(
    bot: &Bot,
    state: &Arc<AppState>,
    chat: ChatId,
    user: UserId,
) -> ResponseResult<()> {
    let word = match words::get_random_word(&state.db, user.0 as i64).await {
        Ok(word) => word,
        Err(err) => {
            error!(error = ?err, "failed to pick a quiz word");
            bot.send_message(chat, MSG_DB_ERROR).await?;
            return Ok(());
        }
    };
    let Some(word) = word else {
        bot.send_message(chat, MSG_NO_WORDS).await?;
        return Ok(());
    };

    let wrongs = match words::get_wrong_answers(&state.db, &word.translation).await {
        Ok(wrongs) => wrongs,
        Err(err) => {
            // A question with only the correct option still works.
            error!(error = ?err, "failed to load wrong options");
            Vec::new()
        }
    };
    let options = quiz::build_options(&word.translation, wrongs, &mut rand::thread_rng());
    debug!(word = %word.english_text, options = options.len(), "asking question");

    state
        .sessions
        .put(user, Session::Quiz(QuizSession::new(word.clone())))
        .await;
    bot.send_message(chat, format!("Как переводится слово:\n\n🔤 *{}*", word.english_text))
        .parse_mode(ParseMode::Markdown)
        .reply_markup(keyboards::answer_keyboard(&options))
        .await?;
    Ok(())
}

/// An `answer_<text>` button press. Without an active quiz session the
/// press is rejected with no side effects.
pub async fn handle_answer(
    bot: &Bot,
    state: &Arc<AppState>,
    query: &CallbackQuery,
    answer: &str,
) -> ResponseResult<()> {
    let user = query.from.id;
    let Some(Session::Quiz(mut quiz)) = state.sessions.get(user).await else {
        bot.answer_callback_query(query.id.clone())
            .text("Начните новую игру!")
            .await?;
        return Ok(());
    };

    match quiz.submit(answer) {
        AnswerVerdict::Correct => {
            bot.answer_callback_query(query.id.clone()).await?;
            if let Some(msg) = query.message.as_ref() {
                bot.edit_message_text(
                    msg.chat.id,
                    msg.id,
                    format!(
                        "✅ Правильно! *{}* - это *{}*",
                        quiz.word.english_text, quiz.word.translation
                    ),
                )
                .parse_mode(ParseMode::Markdown)
                .await?;
            }
            resolve(bot, state, query, &quiz.word, true).await?;
        }
        AnswerVerdict::TryAgain => {
            // Session stays alive with the bumped attempt counter.
            state.sessions.put(user, Session::Quiz(quiz)).await;
            bot.answer_callback_query(query.id.clone())
                .text("❌ Неправильно, попробуй еще раз!")
                .show_alert(true)
                .await?;
        }
        AnswerVerdict::Reveal => {
            bot.answer_callback_query(query.id.clone()).await?;
            if let Some(msg) = query.message.as_ref() {
                bot.edit_message_text(
                    msg.chat.id,
                    msg.id,
                    format!(
                        "❌ Неправильно!\n\nПравильный ответ: *{}* - *{}*",
                        quiz.word.english_text, quiz.word.translation
                    ),
                )
                .parse_mode(ParseMode::Markdown)
                .await?;
            }
            resolve(bot, state, query, &quiz.word, false).await?;
        }
    }
    Ok(())
}

/// Ends the session, appends exactly one progress row, and offers the
/// next word.
async fn resolve(
    bot: &Bot,
    state: &Arc<AppState>,
    query: &CallbackQuery,
    word: &QuizWord,
    is_correct: bool,
) -> ResponseResult<()> {
    let user = query.from.id;
    state.sessions.remove(user).await;
    if let Err(err) = progress::save_user_progress(&state.db, user.0 as i64, word, is_correct).await
    {
        error!(error = ?err, "failed to save progress");
    }
    let chat = query
        .message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or(ChatId(user.0 as i64));
    bot.send_message(chat, "Продолжим?")
        .reply_markup(keyboards::next_word_keyboard())
        .await?;
    Ok(())
}

/// The `next_word` button: discard the prompt message and ask again.
pub async fn next_word(bot: &Bot, state: &Arc<AppState>, query: &CallbackQuery) -> ResponseResult<()> {
    bot.answer_callback_query(query.id.clone()).await?;
    let chat = query
        .message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or(ChatId(query.from.id.0 as i64));
    if let Some(msg) = query.message.as_ref() {
        bot.delete_message(msg.chat.id, msg.id).await.ok();
    }
    send_question(bot, state, chat, query.from.id).await
}
