//! Quiz session controller.
//!
//! A deterministic state machine over a fixed [`QuizSet`]. Every operation is
//! total: calling one outside its precondition leaves the session untouched.

use crate::logger;
use crate::models::{Question, QuizResult, QuizSet, SessionSnapshot};
use std::fmt;

type CompletionCallback = Box<dyn FnMut(usize) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to pick and check an option.
    Answering { selected: Option<usize> },
    /// The current question was checked; the selection is locked.
    Revealed { selected: usize, correct: bool },
    /// The last question was checked and advanced past.
    Finished { selected: usize },
}

pub struct QuizSession {
    questions: QuizSet,
    current_index: usize,
    phase: Phase,
    score: usize,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.questions.len())
            .field("current_index", &self.current_index)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl QuizSession {
    pub fn new(questions: QuizSet) -> Self {
        Self {
            questions,
            current_index: 0,
            phase: Phase::Answering { selected: None },
            score: 0,
            on_complete: None,
        }
    }

    /// Registers the terminal notification. It receives the final score once
    /// per session and is kept across [`retry`](Self::retry).
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + Send + Sync + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn select_option(&mut self, index: usize) {
        if index >= self.current_question().options.len() {
            return;
        }
        if let Phase::Answering { selected } = &mut self.phase {
            *selected = Some(index);
        }
    }

    /// Scores the current selection. Only the first check of a question counts.
    pub fn check_answer(&mut self) {
        let Phase::Answering {
            selected: Some(selected),
        } = self.phase
        else {
            return;
        };

        let correct = self.current_question().is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.phase = Phase::Revealed { selected, correct };
    }

    pub fn next_question(&mut self) {
        let Phase::Revealed { selected, .. } = self.phase else {
            return;
        };

        if self.current_index < self.questions.last_index() {
            self.current_index += 1;
            self.phase = Phase::Answering { selected: None };
            return;
        }

        self.phase = Phase::Finished { selected };
        logger::log(&format!(
            "Quiz finished with score {}/{}",
            self.score,
            self.questions.len()
        ));
        if let Some(callback) = self.on_complete.as_mut() {
            callback(self.score);
        }
    }

    /// Starts a new attempt over the same questions.
    pub fn retry(&mut self) {
        self.current_index = 0;
        self.phase = Phase::Answering { selected: None };
        self.score = 0;
    }

    /// The question at `current_index`. Once finished this is the last question.
    pub fn current_question(&self) -> &Question {
        // current_index is always < questions.len() and QuizSet is never empty
        &self.questions[self.current_index]
    }

    pub fn result(&self) -> Option<QuizResult> {
        match self.phase {
            Phase::Finished { .. } => Some(QuizResult::new(self.score, self.questions.len())),
            _ => None,
        }
    }

    pub fn questions(&self) -> &QuizSet {
        &self.questions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.phase {
            Phase::Answering { selected } => selected,
            Phase::Revealed { selected, .. } | Phase::Finished { selected } => Some(selected),
        }
    }

    pub fn revealed(&self) -> bool {
        !matches!(self.phase, Phase::Answering { .. })
    }

    /// Correctness of the checked answer, once revealed.
    pub fn was_correct(&self) -> Option<bool> {
        match self.phase {
            Phase::Revealed { correct, .. } => Some(correct),
            Phase::Finished { selected } => Some(self.current_question().is_correct(selected)),
            Phase::Answering { .. } => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index == self.questions.last_index()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current_index,
            selected_option: self.selected_option(),
            revealed: self.revealed(),
            score: self.score,
            finished: self.finished(),
        }
    }
}
