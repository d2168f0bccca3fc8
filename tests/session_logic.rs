//! Tests for the quiz attempt state machine, the add-word wizard, and the
//! session store.

use teloxide::types::UserId;

use wordtrainer_bot::constants::BTN_SKIP;
use wordtrainer_bot::database::models::QuizWord;
use wordtrainer_bot::session::{
    AddWordSession, AnswerVerdict, QuizSession, Session, SessionStore, WizardOutcome, WizardStep,
};

fn cat() -> QuizWord {
    QuizWord {
        english_text: "cat".to_string(),
        translation: "кот".to_string(),
    }
}

#[test]
fn correct_answer_wins_on_any_attempt() {
    let mut quiz = QuizSession::new(cat());
    assert_eq!(quiz.submit("собака"), AnswerVerdict::TryAgain);
    assert_eq!(quiz.submit("кот"), AnswerVerdict::Correct);
}

#[test]
fn third_wrong_attempt_forces_a_reveal() {
    let mut quiz = QuizSession::new(cat());
    assert_eq!(quiz.submit("собака"), AnswerVerdict::TryAgain);
    assert_eq!(quiz.submit("птица"), AnswerVerdict::TryAgain);
    assert_eq!(quiz.submit("рыба"), AnswerVerdict::Reveal);
}

#[test]
fn answer_match_is_verbatim() {
    let mut quiz = QuizSession::new(cat());
    assert_eq!(quiz.submit("Кот"), AnswerVerdict::TryAgain);
    assert_eq!(quiz.submit("кот "), AnswerVerdict::TryAgain);
    assert_eq!(quiz.submit("кот"), AnswerVerdict::Correct);
}

#[test]
fn wizard_walks_all_three_steps() {
    let mut wizard = AddWordSession::new();
    assert_eq!(wizard.step(), WizardStep::English);
    assert_eq!(wizard.advance("  dog "), WizardOutcome::AskTranslation);
    assert_eq!(wizard.step(), WizardStep::Translation);
    assert_eq!(wizard.advance("собака"), WizardOutcome::AskExample);
    assert_eq!(wizard.step(), WizardStep::Example);
    assert_eq!(
        wizard.advance("A dog barks."),
        WizardOutcome::Commit {
            english: "dog".to_string(),
            translation: "собака".to_string(),
            example: Some("A dog barks.".to_string()),
        }
    );
}

#[test]
fn skip_label_commits_without_example() {
    let mut wizard = AddWordSession::new();
    wizard.advance("dog");
    wizard.advance("собака");
    assert_eq!(
        wizard.advance(BTN_SKIP),
        WizardOutcome::Commit {
            english: "dog".to_string(),
            translation: "собака".to_string(),
            example: None,
        }
    );
}

#[tokio::test]
async fn store_get_put_remove_roundtrip() {
    let store = SessionStore::new();
    let user = UserId(42);
    assert!(store.get(user).await.is_none());

    store.put(user, Session::Quiz(QuizSession::new(cat()))).await;
    match store.get(user).await {
        Some(Session::Quiz(quiz)) => assert_eq!(quiz.word, cat()),
        other => panic!("expected a quiz session, got {other:?}"),
    }

    assert!(store.remove(user).await.is_some());
    assert!(store.get(user).await.is_none());
    assert!(store.remove(user).await.is_none());
}

#[tokio::test]
async fn put_replaces_the_existing_session() {
    let store = SessionStore::new();
    let user = UserId(42);
    store.put(user, Session::Quiz(QuizSession::new(cat()))).await;
    store.put(user, Session::AddWord(AddWordSession::new())).await;
    match store.get(user).await {
        Some(Session::AddWord(wizard)) => assert_eq!(wizard.step(), WizardStep::English),
        other => panic!("expected the wizard session, got {other:?}"),
    }
}

#[tokio::test]
async fn sessions_are_disjoint_per_user() {
    let store = SessionStore::new();
    store.put(UserId(1), Session::Quiz(QuizSession::new(cat()))).await;
    store.put(UserId(2), Session::AddWord(AddWordSession::new())).await;
    store.remove(UserId(1)).await;
    assert!(store.get(UserId(2)).await.is_some());
}
