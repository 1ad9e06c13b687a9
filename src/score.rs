//! Answer scoring
//!
//! Compares user guesses against the ground-truth colors of a session,
//! producing per-channel average signed errors in both RGB and HSL space
//! plus an aggregate root-mean-square error pooled over every RGB channel.

use serde::{Deserialize, Serialize};

use crate::color::conversion::{hex_to_rgb, Rgb};
use crate::constants::channel::{HUE_CIRCLE_DEGREES, HUE_MAX_DISTANCE, PERCENT_MAX, RGB_MAX};
use crate::constants::report::{AVG_DECIMALS, PERCENT_SCALE, RMSE_DECIMALS};
use crate::session::Question;
use crate::{QuizError, Result};

/// Digits substituted for a blank answer: a blank guess scores as pure black
const EMPTY_ANSWER_DIGITS: &str = "000000";

/// Per-channel averages and aggregate deviation for one scoring pass.
///
/// Values are percentages. RGB and saturation/lightness averages are signed
/// (negative means the guesses ran low); the hue average is a non-negative
/// circular-distance magnitude. Derived on every scoring call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Average signed error per RGB channel
    pub avg_rgb_error: [f64; 3],
    /// Average error per HSL channel (hue unsigned, s/l signed)
    pub avg_hsl_error: [f64; 3],
    /// Root-mean-square of all normalized RGB channel errors
    pub rmse: f64,
}

impl ScoreReport {
    /// Apply the output contract: channel averages at two decimal places,
    /// RMSE at four.
    pub fn rounded(&self) -> ScoreReport {
        ScoreReport {
            avg_rgb_error: self.avg_rgb_error.map(|v| round_to(v, AVG_DECIMALS)),
            avg_hsl_error: self.avg_hsl_error.map(|v| round_to(v, AVG_DECIMALS)),
            rmse: round_to(self.rmse, RMSE_DECIMALS),
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Shorter of the two arc lengths between two hues on the 360-degree circle
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(HUE_CIRCLE_DEGREES - diff)
}

/// Score a full set of answers against their questions.
///
/// A blank answer is scored as pure black, not skipped. Each RGB channel
/// error is normalized by 255 and accumulated both per channel and, squared,
/// into one pool across all `3 * N` channels for the RMSE. Hue error is the
/// circular distance normalized by 180; saturation and lightness errors are
/// signed differences normalized by 100. Averages are scaled to percent.
///
/// # Errors
///
/// Returns [`QuizError::AnswerCount`] when the two slices differ in length,
/// [`QuizError::SessionNotStarted`] when there are no questions, and
/// propagates [`QuizError::InvalidHex`] from a malformed non-blank answer.
pub fn score_answers(questions: &[Question], answers: &[String]) -> Result<ScoreReport> {
    if answers.len() != questions.len() {
        return Err(QuizError::AnswerCount {
            expected: questions.len(),
            got: answers.len(),
        });
    }
    if questions.is_empty() {
        return Err(QuizError::SessionNotStarted);
    }

    let count = questions.len() as f64;
    let mut rgb_sums = [0.0f64; 3];
    let mut hsl_sums = [0.0f64; 3];
    let mut squared_errors = Vec::with_capacity(questions.len() * 3);

    for (question, answer) in questions.iter().zip(answers) {
        let guess = parse_answer(answer)?;
        let truth = question.rgb;

        let channels = [
            (guess.r, truth.r),
            (guess.g, truth.g),
            (guess.b, truth.b),
        ];
        for (i, (user, correct)) in channels.into_iter().enumerate() {
            let error = (f64::from(user) - f64::from(correct)) / RGB_MAX;
            rgb_sums[i] += error;
            squared_errors.push(error * error);
        }

        let truth_hsl = truth.to_hsl();
        let guess_hsl = guess.to_hsl();
        hsl_sums[0] += hue_distance(guess_hsl.h, truth_hsl.h) / HUE_MAX_DISTANCE;
        hsl_sums[1] += (guess_hsl.s - truth_hsl.s) / PERCENT_MAX;
        hsl_sums[2] += (guess_hsl.l - truth_hsl.l) / PERCENT_MAX;
    }

    let mean_square = squared_errors.iter().sum::<f64>() / squared_errors.len() as f64;

    Ok(ScoreReport {
        avg_rgb_error: rgb_sums.map(|sum| sum / count * PERCENT_SCALE),
        avg_hsl_error: hsl_sums.map(|sum| sum / count * PERCENT_SCALE),
        rmse: mean_square.sqrt() * PERCENT_SCALE,
    })
}

/// Resolve one raw answer string to its RGB value
fn parse_answer(answer: &str) -> Result<Rgb> {
    let digits = if answer.is_empty() {
        EMPTY_ANSWER_DIGITS
    } else {
        answer
    };
    hex_to_rgb(&format!("#{}", digits))
}
