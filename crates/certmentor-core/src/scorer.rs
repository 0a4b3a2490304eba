//! Quiz scoring.
//!
//! Pure function of the parsed items and the submitted answers; no side
//! effects, idempotent.

use crate::model::{AnswerSheet, QuizItem, ScoreResult};

/// Score a submitted quiz.
///
/// Items with no parsed answer are marked "answer not provided" and are
/// excluded from both the numerator and the denominator, so parser gaps do
/// not drag the percentage down. An unanswered scoreable item counts as
/// incorrect. With zero scoreable items the percentage is 0.0; callers are
/// expected to short-circuit before that, but the function never divides
/// by zero.
pub fn score(items: &[QuizItem], answers: &AnswerSheet) -> ScoreResult {
    let mut correct = 0usize;
    let mut total = 0usize;
    let mut unscored = 0usize;
    let mut feedback = Vec::with_capacity(items.len());

    for item in items {
        let ordinal = item.index + 1;
        let Some(answer) = &item.answer else {
            unscored += 1;
            feedback.push(format!("Q{ordinal}: answer not provided"));
            continue;
        };

        total += 1;
        match answers.selected(item.index) {
            Some(letter) if letter == answer.letter => {
                correct += 1;
                feedback.push(format!(
                    "Q{ordinal}: correct - {} - {}",
                    answer.letter, answer.explanation
                ));
            }
            Some(letter) => {
                feedback.push(format!(
                    "Q{ordinal}: incorrect - your answer: {letter} | correct: {} - {}",
                    answer.letter, answer.explanation
                ));
            }
            None => {
                feedback.push(format!(
                    "Q{ordinal}: incorrect - no answer | correct: {} - {}",
                    answer.letter, answer.explanation
                ));
            }
        }
    }

    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 * 100.0 / total as f64
    };

    ScoreResult {
        correct,
        total,
        percentage,
        feedback,
        unscored,
    }
}
