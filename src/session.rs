//! Per-user transient session state: an in-flight quiz question or the
//! add-word wizard. Nothing here is persisted; a restart drops every
//! session, which is acceptable for this bot.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::UserId;
use tokio::sync::RwLock;

use crate::constants::{BTN_SKIP, MAX_ATTEMPTS};
use crate::database::models::QuizWord;

/// Result of submitting one quiz answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    /// Matched the stored translation; record a correct attempt.
    Correct,
    /// Wrong, attempts remain; the session stays alive.
    TryAgain,
    /// Wrong on the final attempt; reveal and record an incorrect attempt.
    Reveal,
}

/// A question asked and not yet resolved.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub word: QuizWord,
    pub attempts: u8,
}

impl QuizSession {
    pub fn new(word: QuizWord) -> Self {
        Self { word, attempts: 0 }
    }

    /// Registers one submitted answer. Correctness is a verbatim match
    /// against the stored translation, accepted at any attempt.
    pub fn submit(&mut self, answer: &str) -> AnswerVerdict {
        self.attempts += 1;
        if answer == self.word.translation {
            AnswerVerdict::Correct
        } else if self.attempts < MAX_ATTEMPTS {
            AnswerVerdict::TryAgain
        } else {
            AnswerVerdict::Reveal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    English,
    Translation,
    Example,
}

/// What the wizard wants after consuming one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    AskTranslation,
    AskExample,
    Commit {
        english: String,
        translation: String,
        example: Option<String>,
    },
}

/// Three-step add-word wizard: english -> translation -> optional example.
#[derive(Debug, Clone)]
pub struct AddWordSession {
    step: WizardStep,
    english: Option<String>,
    translation: Option<String>,
}

impl AddWordSession {
    pub fn new() -> Self {
        Self {
            step: WizardStep::English,
            english: None,
            translation: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Consumes one text input and advances the wizard. Inputs are stored
    /// trimmed; the skip label at the example step maps to no example.
    pub fn advance(&mut self, input: &str) -> WizardOutcome {
        match self.step {
            WizardStep::English => {
                self.english = Some(input.trim().to_string());
                self.step = WizardStep::Translation;
                WizardOutcome::AskTranslation
            }
            WizardStep::Translation => {
                self.translation = Some(input.trim().to_string());
                self.step = WizardStep::Example;
                WizardOutcome::AskExample
            }
            WizardStep::Example => {
                let example = if input == BTN_SKIP {
                    None
                } else {
                    Some(input.trim().to_string())
                };
                WizardOutcome::Commit {
                    english: self.english.take().unwrap_or_default(),
                    translation: self.translation.take().unwrap_or_default(),
                    example,
                }
            }
        }
    }
}

/// A user's current multi-turn activity.
#[derive(Debug, Clone)]
pub enum Session {
    Quiz(QuizSession),
    AddWord(AddWordSession),
}

/// Shared in-memory session map, keyed by Telegram user id. The handlers
/// only ever go through get/put/remove, so a persistent backend could be
/// swapped in behind the same surface.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<UserId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user: UserId) -> Option<Session> {
        self.inner.read().await.get(&user).cloned()
    }

    pub async fn put(&self, user: UserId, session: Session) {
        self.inner.write().await.insert(user, session);
    }

    pub async fn remove(&self, user: UserId) -> Option<Session> {
        self.inner.write().await.remove(&user)
    }
}
