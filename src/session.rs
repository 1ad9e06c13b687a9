//! Quiz session state
//!
//! A [`QuizSession`] owns the generated questions and the answers collected
//! so far. [`QuizSession::setup_questions`] is the only path that creates or
//! destroys question/answer data; a new call discards the previous round
//! entirely, so no history is retained across rounds.

use serde::{Deserialize, Serialize};

use crate::color::{random_rgb, Rgb};
use crate::config::QuizConfig;
use crate::constants::quiz::HEX_DIGITS;
use crate::score::{score_answers, ScoreReport};
use crate::{debug, info};
use crate::{QuizError, Result};

/// Ground-truth color for one quiz item.
///
/// Created once during setup and never mutated; `hex` is always the
/// canonical uppercase form of `rgb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Canonical `#RRGGBB` representation
    pub hex: String,
    /// Channel values the hex was formatted from
    pub rgb: Rgb,
}

impl Question {
    /// Build a question from known channel values
    pub fn from_rgb(rgb: Rgb) -> Self {
        Question {
            hex: rgb.to_hex(),
            rgb,
        }
    }

    /// Generate a fresh question with a uniformly random color
    pub fn generate() -> Self {
        Self::from_rgb(random_rgb())
    }
}

/// Lifecycle of a session; the cycle repeats indefinitely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No questions generated yet
    Idle,
    /// Questions generated, answers being collected
    InProgress,
    /// A score has been computed for the current questions
    Scored,
}

/// One round of the color quiz: questions, collected answers, lifecycle state
#[derive(Debug)]
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<Question>,
    answers: Vec<String>,
    state: SessionState,
}

impl QuizSession {
    /// Create an idle session; call [`setup_questions`](Self::setup_questions)
    /// to start a round.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            questions: Vec::new(),
            answers: Vec::new(),
            state: SessionState::Idle,
        }
    }

    /// Full state reset: discards any previous questions, answers and scored
    /// state, generates `num_questions` fresh colors and blanks every answer.
    pub fn setup_questions(&mut self) {
        self.questions.clear();
        self.answers.clear();

        self.questions
            .extend((0..self.config.num_questions).map(|_| Question::generate()));
        self.answers
            .resize(self.config.num_questions, String::new());

        self.state = SessionState::InProgress;
        info!("new round: {} colors generated", self.questions.len());
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Store a raw answer string for one question.
    ///
    /// Content is not validated here; the front end constrains input and the
    /// scorer rejects malformed hex. Blank stays blank and scores as black.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::QuestionIndex`] when `index` is outside the
    /// current round.
    pub fn set_answer(&mut self, index: usize, answer: impl Into<String>) -> Result<()> {
        if index >= self.answers.len() {
            return Err(QuizError::QuestionIndex {
                index,
                count: self.answers.len(),
            });
        }
        self.answers[index] = answer.into();
        Ok(())
    }

    /// True once every answer has the full six digits; front ends use this
    /// to gate their submit action.
    pub fn answers_complete(&self) -> bool {
        !self.answers.is_empty() && self.answers.iter().all(|a| a.len() == HEX_DIGITS)
    }

    /// Score the collected answers against the questions.
    ///
    /// The report is recomputed on every call and never stored in the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::SessionNotStarted`] before the first
    /// [`setup_questions`](Self::setup_questions); propagates scoring errors
    /// from malformed answers.
    pub fn score(&mut self) -> Result<ScoreReport> {
        if self.questions.is_empty() {
            return Err(QuizError::SessionNotStarted);
        }

        let report = score_answers(&self.questions, &self.answers)?;
        self.state = SessionState::Scored;
        debug!("round scored: rmse {:.4}", report.rmse);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb;

    fn session() -> QuizSession {
        QuizSession::new(QuizConfig::default())
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.questions().is_empty());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_setup_generates_configured_count() {
        let mut session = QuizSession::new(QuizConfig { num_questions: 7 });
        session.setup_questions();

        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.questions().len(), 7);
        assert_eq!(session.answers().len(), 7);
        assert!(session.answers().iter().all(String::is_empty));
    }

    #[test]
    fn test_question_hex_matches_rgb() {
        let mut session = session();
        session.setup_questions();

        for question in session.questions() {
            assert_eq!(question.hex.len(), 7);
            assert_eq!(hex_to_rgb(&question.hex).unwrap(), question.rgb);
        }
    }

    #[test]
    fn test_setup_discards_previous_round() {
        let mut session = session();
        session.setup_questions();
        session.set_answer(0, "AABBCC").unwrap();
        session.score().unwrap();

        session.setup_questions();
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.questions().len(), 10);
        assert!(session.answers().iter().all(String::is_empty));
    }

    #[test]
    fn test_set_answer_out_of_range() {
        let mut session = session();
        session.setup_questions();

        match session.set_answer(10, "FFFFFF") {
            Err(QuizError::QuestionIndex { index, count }) => {
                assert_eq!(index, 10);
                assert_eq!(count, 10);
            }
            other => panic!("expected QuestionIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_answers_complete_gate() {
        let mut session = QuizSession::new(QuizConfig { num_questions: 2 });
        assert!(!session.answers_complete());

        session.setup_questions();
        assert!(!session.answers_complete());

        session.set_answer(0, "FF0000").unwrap();
        assert!(!session.answers_complete());

        session.set_answer(1, "00FF00").unwrap();
        assert!(session.answers_complete());
    }

    #[test]
    fn test_score_before_setup_fails() {
        let mut session = session();
        assert!(matches!(
            session.score(),
            Err(QuizError::SessionNotStarted)
        ));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_score_transitions_state() {
        let mut session = session();
        session.setup_questions();

        // Blank answers all score as black; the call itself succeeds
        session.score().unwrap();
        assert_eq!(session.state(), SessionState::Scored);
    }

    #[test]
    fn test_score_is_recomputed_each_call() {
        let mut session = QuizSession::new(QuizConfig { num_questions: 1 });
        session.setup_questions();

        let first = session.score().unwrap();

        let digits = session.questions()[0].hex[1..].to_string();
        session.set_answer(0, digits).unwrap();
        let second = session.score().unwrap();

        assert_eq!(second.rmse, 0.0);
        // The earlier report reflected the blank (black) guess
        assert!(first.rmse >= 0.0);
    }
}
