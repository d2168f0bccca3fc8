//! The /start command: register the user and show the main menu.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ParseMode, User};
use tracing::error;

use crate::database;
use crate::model::AppState;
use crate::ui::keyboards;

pub async fn handle(
    bot: &Bot,
    state: &Arc<AppState>,
    chat: ChatId,
    user: &User,
) -> ResponseResult<()> {
    let name = if user.first_name.is_empty() {
        "друг"
    } else {
        user.first_name.as_str()
    };
    if let Err(err) = database::users::add_user(&state.db, user.id.0 as i64, name).await {
        error!(error = ?err, "failed to register user");
    }

    let welcome = format!(
        "👋 Привет, {name}!\n\n\
         Я бот для изучения английского языка. \
         Я помогу тебе выучить новые слова и запомнить их перевод.\n\n\
         Вот что я умею:\n\
         📚 *Учить слова* - я буду показывать слова, а ты выбирать правильный перевод\n\
         ➕ *Добавить слово* - ты можешь добавить свои слова для изучения\n\
         🗑 *Удалить слово* - удалить слова, которые ты добавил\n\
         📊 *Статистика* - посмотреть свой прогресс\n\n\
         Выбери действие из меню ниже 👇"
    );
    bot.send_message(chat, welcome)
        .parse_mode(ParseMode::Markdown)
        .reply_markup(keyboards::main_menu())
        .await?;
    Ok(())
}
