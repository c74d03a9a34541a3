use super::super::bands::classify;
use super::super::diagnostics;
use super::super::domain::{AnswerScore, AnswerValue, Question, ScoreResult};
use super::super::error::ScoringError;
use super::super::routing::DependencyContext;
use super::answer_not_found;

/// Scores a question whose points depend on another question's answer.
///
/// The caller's single answer selects a row; the dependency's answer selects the column.
/// Every failure is reported to the diagnostics sink before it is returned.
pub fn matrix_score(
    question: &Question,
    user_answers: &[String],
    context: &DependencyContext,
) -> Result<ScoreResult, ScoringError> {
    let result = configured_dependency(question)
        .and_then(|dependency_id| score_cell(question, dependency_id, user_answers, context));

    if let Err(err) = &result {
        diagnostics::report(err);
    }
    result
}

fn configured_dependency(question: &Question) -> Result<&str, ScoringError> {
    if question.id.trim().is_empty() {
        return Err(ScoringError::Config {
            question_id: question.id.clone(),
            reason: "matrix question is missing its id".to_string(),
        });
    }

    question
        .score_dependency
        .as_deref()
        .filter(|dependency_id| !dependency_id.trim().is_empty())
        .ok_or_else(|| ScoringError::Config {
            question_id: question.id.clone(),
            reason: "matrix question is missing scoreDependency".to_string(),
        })
}

fn score_cell(
    question: &Question,
    dependency_id: &str,
    user_answers: &[String],
    context: &DependencyContext,
) -> Result<ScoreResult, ScoringError> {
    let answer = match user_answers {
        [] => {
            return Err(ScoringError::InvalidUserAnswers {
                question_id: question.id.clone(),
            })
        }
        [answer] => answer,
        _ => {
            return Err(ScoringError::MultipleAnswers {
                question_id: question.id.clone(),
            })
        }
    };

    let dependency_answer = resolve_dependency(&question.id, dependency_id, context)?;

    let row = question
        .find_answer(answer)
        .ok_or_else(|| answer_not_found(question, answer))?;

    let cells = match &row.score {
        AnswerScore::Matrix(cells) => cells,
        AnswerScore::Points(_) => {
            return Err(ScoringError::Config {
                question_id: question.id.clone(),
                reason: format!("answer \"{}\" has no matrix scores", row.answer),
            })
        }
    };

    let value = *cells
        .get(dependency_answer)
        .ok_or_else(|| ScoringError::NoScoreForDependency {
            question_id: question.id.clone(),
            answer: answer.clone(),
            dependency_answer: dependency_answer.to_string(),
        })?;

    let measure = value.unwrap_or(0.0);
    let band = classify(&question.score_bands, measure).ok_or_else(|| {
        ScoringError::GeneralScoring {
            question_id: question.id.clone(),
            value: measure,
        }
    })?;

    Ok(ScoreResult {
        value,
        band: Some(band.name),
    })
}

/// Reads the one answer a dependency question supplies.
fn resolve_dependency<'a>(
    question_id: &str,
    dependency_id: &str,
    context: &'a DependencyContext,
) -> Result<&'a str, ScoringError> {
    let empty = || ScoringError::EmptyDependency {
        question_id: question_id.to_string(),
        dependency_id: dependency_id.to_string(),
    };

    match context.get(dependency_id) {
        None => Err(ScoringError::MissingDependency {
            question_id: question_id.to_string(),
            dependency_id: dependency_id.to_string(),
        }),
        Some(AnswerValue::Missing) => Err(empty()),
        Some(AnswerValue::Text(text)) if text.trim().is_empty() => Err(empty()),
        Some(AnswerValue::Text(text)) => Ok(text.as_str()),
        Some(AnswerValue::List(items)) => match items.as_slice() {
            [] => Err(empty()),
            [single] if single.trim().is_empty() => Err(empty()),
            [single] => Ok(single.as_str()),
            _ => Err(ScoringError::MultipleDependencyAnswers {
                question_id: question_id.to_string(),
                dependency_id: dependency_id.to_string(),
            }),
        },
    }
}
