use super::super::bands::classify;
use super::super::domain::{Question, ScoreResult};
use super::super::error::ScoringError;
use super::{answer_not_found, scalar_score};

/// Scores a question that accepts exactly one answer.
///
/// A `null` score is reported as-is but classified as `0`; a value outside every band yields
/// `band: None` rather than an error.
pub fn single_score(question: &Question, user_answers: &[String]) -> Result<ScoreResult, ScoringError> {
    if user_answers.len() > 1 {
        return Err(ScoringError::MultipleAnswers {
            question_id: question.id.clone(),
        });
    }

    let answer = user_answers.first().map(String::as_str).unwrap_or_default();
    let matched = question
        .find_answer(answer)
        .ok_or_else(|| answer_not_found(question, answer))?;

    let value = scalar_score(question, matched)?;
    let band = classify(&question.score_bands, value.unwrap_or(0.0)).map(|band| band.name);

    Ok(ScoreResult { value, band })
}
