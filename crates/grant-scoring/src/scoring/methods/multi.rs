use super::super::bands::classify;
use super::super::domain::{Question, ScoreResult};
use super::super::error::ScoringError;
use super::{answer_not_found, scalar_score};

/// Sums the scores of every selected answer. Opt-out (`null`) answers count as `0`.
pub fn multi_score(question: &Question, user_answers: &[String]) -> Result<ScoreResult, ScoringError> {
    let mut value = 0.0;
    for answer in user_answers {
        let matched = question
            .find_answer(answer)
            .ok_or_else(|| answer_not_found(question, answer))?;
        value += scalar_score(question, matched)?.unwrap_or(0.0);
    }

    let band = classify(&question.score_bands, value).map(|band| band.name);

    Ok(ScoreResult {
        value: Some(value),
        band,
    })
}
