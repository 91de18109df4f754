use crate::session::QuizSession;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "q")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correct")]
    pub correct_index: usize,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], correct_index: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Ordered, non-empty list of questions. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSet {
    questions: Vec<Question>,
}

impl QuizSet {
    /// Returns `None` for an empty list.
    pub fn new(questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            None
        } else {
            Some(Self { questions })
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    // Always false.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Reorders the questions. Only meant for use before a session starts.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.questions.shuffle(rng);
        self
    }
}

impl Index<usize> for QuizSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

/// Final outcome of a finished session.
///
/// `percentage` rounds half away from zero: 1 of 8 is 12.5% and reports 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((200 * score + total) / (2 * total)) as u32
        };
        Self {
            score,
            total,
            percentage,
        }
    }
}

/// Consistent read of the controller's query surface, taken in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub selected_option: Option<usize>,
    pub revealed: bool,
    pub score: usize,
    pub finished: bool,
}

/// Shared handle for callers that dispatch events from more than one task.
/// Each transition holds the write lock until it has been fully applied.
#[derive(Debug, Clone)]
pub struct AsyncQuizSession {
    inner: Arc<RwLock<QuizSession>>,
}

impl AsyncQuizSession {
    pub fn new(session: QuizSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, QuizSession> {
        self.inner.read().await
    }

    pub async fn select_option(&self, index: usize) {
        self.inner.write().await.select_option(index);
    }

    pub async fn check_answer(&self) {
        self.inner.write().await.check_answer();
    }

    pub async fn next_question(&self) {
        self.inner.write().await.next_question();
    }

    pub async fn retry(&self) {
        self.inner.write().await.retry();
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().await.snapshot()
    }

    pub async fn result(&self) -> Option<QuizResult> {
        self.inner.read().await.result()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Results,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_set() -> QuizSet {
        QuizSet::new(vec![
            Question::new("First", &["A", "B"], 0),
            Question::new("Second", &["X", "Y"], 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_quiz_set_rejects_empty() {
        assert!(QuizSet::new(Vec::new()).is_none());
    }

    #[test]
    fn test_quiz_set_accessors() {
        let set = two_question_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.last_index(), 1);
        assert!(!set.is_empty());
        assert_eq!(set.get(1).unwrap().prompt, "Second");
        assert!(set.get(2).is_none());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_shuffled_keeps_questions() {
        let set = QuizSet::new(
            (0..20)
                .map(|i| Question::new(&format!("Q{}", i), &["a", "b"], 0))
                .collect(),
        )
        .unwrap();
        let shuffled = set.clone().shuffled(&mut rand::thread_rng());

        assert_eq!(shuffled.len(), set.len());
        for question in set.iter() {
            assert!(shuffled.iter().any(|q| q == question));
        }
    }

    #[test]
    fn test_question_deserializes_short_field_names() {
        let json = r#"{"q": "Capital of France?", "options": ["Paris", "Rome"], "correct": 0}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.prompt, "Capital of France?");
        assert_eq!(question.options, vec!["Paris", "Rome"]);
        assert_eq!(question.correct_index, 0);
        assert!(question.is_correct(0));
        assert!(!question.is_correct(1));
    }

    #[test]
    fn test_question_deserializes_long_field_names() {
        let json = r#"{"prompt": "2+2?", "options": ["3", "4"], "correct_index": 1}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question, Question::new("2+2?", &["3", "4"], 1));
    }

    #[test]
    fn test_percentage_one_of_three() {
        let result = QuizResult::new(1, 3);
        assert_eq!(result.percentage, 33);
    }

    #[test]
    fn test_percentage_two_of_three() {
        assert_eq!(QuizResult::new(2, 3).percentage, 67);
    }

    #[test]
    fn test_percentage_rounds_half_away_from_zero() {
        // 12.5 and 62.5: banker's rounding would give 12 and 62
        assert_eq!(QuizResult::new(1, 8).percentage, 13);
        assert_eq!(QuizResult::new(5, 8).percentage, 63);
        assert_eq!(QuizResult::new(1, 2).percentage, 50);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(QuizResult::new(0, 5).percentage, 0);
        assert_eq!(QuizResult::new(5, 5).percentage, 100);
        assert_eq!(QuizResult::new(0, 0).percentage, 0);
    }

    #[tokio::test]
    async fn test_async_session_full_run() {
        let shared = AsyncQuizSession::new(QuizSession::new(two_question_set()));

        shared.select_option(0).await;
        shared.check_answer().await;
        shared.next_question().await;
        shared.select_option(1).await;
        shared.check_answer().await;
        shared.next_question().await;

        let snapshot = shared.snapshot().await;
        assert!(snapshot.finished);
        assert_eq!(snapshot.score, 2);
        assert_eq!(
            shared.result().await,
            Some(QuizResult {
                score: 2,
                total: 2,
                percentage: 100
            })
        );

        shared.retry().await;
        let snapshot = shared.snapshot().await;
        assert_eq!(snapshot.current_index, 0);
        assert!(!snapshot.finished);
        assert_eq!(shared.read().await.score(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_async_session_concurrent_checks_count_once() {
        let shared = AsyncQuizSession::new(QuizSession::new(two_question_set()));
        shared.select_option(0).await;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let session = shared.clone();
            handles.push(tokio::spawn(async move {
                session.check_answer().await;
                session.snapshot().await
            }));
        }

        for handle in handles {
            let snapshot = handle.await.unwrap();
            // every observed state is a fully applied check
            assert!(snapshot.revealed);
            assert_eq!(snapshot.score, 1);
        }
    }

    #[test]
    fn test_app_state_transitions() {
        let mut state = AppState::Menu;
        assert_eq!(state, AppState::Menu);

        state = AppState::Quiz;
        assert_eq!(state, AppState::Quiz);

        state = AppState::Results;
        assert_eq!(state, AppState::Results);
    }
}
