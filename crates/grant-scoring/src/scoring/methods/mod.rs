mod matrix;
mod multi;
mod single;

pub use matrix::matrix_score;
pub use multi::multi_score;
pub use single::single_score;

use super::domain::{Answer, AnswerScore, AnswerValue, Question, ScoreMethod, ScoreResult};
use super::error::ScoringError;
use super::routing::DependencyContext;

/// Runs the strategy configured on `question`.
pub fn dispatch(
    question: &Question,
    user_answers: &[String],
    context: &DependencyContext,
) -> Result<ScoreResult, ScoringError> {
    let method = question.score_method.ok_or_else(|| ScoringError::Config {
        question_id: question.id.clone(),
        reason: "question has no scoring method".to_string(),
    })?;

    match method {
        ScoreMethod::Single => single_score(question, user_answers),
        ScoreMethod::Multi => multi_score(question, user_answers),
        ScoreMethod::Matrix => matrix_score(question, user_answers, context),
    }
}

/// Flattens a caller answer into the list a strategy consumes.
///
/// Multi-answer clients sometimes send one comma-joined string; that form is split and
/// de-duplicated. Other methods keep answers verbatim since answer texts may contain commas.
pub fn normalize_answers(method: Option<ScoreMethod>, value: &AnswerValue) -> Vec<String> {
    let answers = value.to_vec();
    match (method, answers.as_slice()) {
        (Some(ScoreMethod::Multi), [joined]) if joined.contains(',') => {
            let mut split: Vec<String> = Vec::new();
            for part in joined.split(',') {
                if !split.iter().any(|seen| seen == part) {
                    split.push(part.to_string());
                }
            }
            split
        }
        _ => answers,
    }
}

pub(super) fn scalar_score(question: &Question, answer: &Answer) -> Result<Option<f64>, ScoringError> {
    match &answer.score {
        AnswerScore::Points(points) => Ok(*points),
        AnswerScore::Matrix(_) => Err(ScoringError::Config {
            question_id: question.id.clone(),
            reason: format!(
                "answer \"{}\" has matrix scores but the question is not matrix scored",
                answer.answer
            ),
        }),
    }
}

pub(super) fn answer_not_found(question: &Question, answer: &str) -> ScoringError {
    ScoringError::AnswerNotFound {
        question_id: question.id.clone(),
        answer: answer.to_string(),
    }
}
