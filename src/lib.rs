//! # color-recall
//!
//! Scoring core for a color-perception guessing quiz.
//!
//! The engine generates random colors, collects hexadecimal guesses and
//! measures how close they landed:
//! - hex/RGB/HSL conversions with the exact formulas the scores depend on
//! - a session holding the generated questions and collected answers
//! - per-channel average errors in RGB and HSL space plus an aggregate RMSE
//!
//! Rendering, input capture and everything else a front end does stays
//! outside this crate; the session API is the whole boundary.
//!
//! ## Example
//!
//! ```rust
//! use color_recall::{QuizConfig, QuizSession};
//!
//! let mut session = QuizSession::new(QuizConfig::default());
//! session.setup_questions();
//!
//! // Echo the first color back as its own guess; the rest stay blank
//! // and score as pure black.
//! let digits = session.questions()[0].hex[1..].to_string();
//! session.set_answer(0, digits)?;
//!
//! let report = session.score()?;
//! println!("RMSE: {:.4}", report.rmse);
//! # Ok::<(), color_recall::QuizError>(())
//! ```

pub(crate) use log::{debug, info};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod score;
pub mod session;

pub use color::{hex_to_rgb, rgb_to_hsl, Hsl, Rgb};
pub use config::QuizConfig;
pub use error::{QuizError, Result};
pub use score::{hue_distance, score_answers, ScoreReport};
pub use session::{Question, QuizSession, SessionState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_report_serialization() {
        let report = ScoreReport {
            avg_rgb_error: [-1.5, 2.25, 0.0],
            avg_hsl_error: [12.5, -3.0, 0.5],
            rmse: 81.6497,
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ScoreReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report, deserialized);
    }

    #[test]
    fn test_question_serialization() {
        let question = Question::from_rgb(Rgb::new(0x33, 0x66, 0xCC));

        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("#3366CC"));

        let deserialized: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(question, deserialized);
    }
}
