// Central constants: menu labels, callback prefixes, and quiz limits.
// The reply-keyboard labels double as routing keys, so they live here
// rather than inline in the handlers.

pub const BTN_LEARN: &str = "📚 Учить слова";
pub const BTN_ADD_WORD: &str = "➕ Добавить слово";
pub const BTN_DELETE_WORD: &str = "🗑 Удалить слово";
pub const BTN_STATS: &str = "📊 Статистика";
pub const BTN_CANCEL: &str = "❌ Отмена";
pub const BTN_SKIP: &str = "⏭ Пропустить";
pub const BTN_NEXT_WORD: &str = "Следующее слово ➡️";

pub const CB_ANSWER_PREFIX: &str = "answer_";
pub const CB_DELETE_PREFIX: &str = "delete_";
pub const CB_NEXT_WORD: &str = "next_word";

/// Attempts a user gets before the correct translation is revealed.
pub const MAX_ATTEMPTS: u8 = 3;
/// Wrong options shown alongside the correct one.
pub const WRONG_OPTIONS_LIMIT: usize = 3;

/// Long-poll timeout passed to getUpdates, in seconds.
pub const POLL_TIMEOUT_SECS: u32 = 60;
