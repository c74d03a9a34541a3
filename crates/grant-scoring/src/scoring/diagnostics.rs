//! Structured diagnostics emitted by the engine.
//!
//! Every record carries an `event` code plus context fields; nothing is pre-formatted.

use tracing::{error, info};

use super::domain::FinalResult;
use super::error::{ErrorClass, ScoringError};

macro_rules! emit {
    ($class:expr, $($fields:tt)+) => {
        match $class {
            ErrorClass::Configuration => ::tracing::error!($($fields)+),
            ErrorClass::UserInput => ::tracing::warn!($($fields)+),
        }
    };
}

/// Records a scoring failure at a level matching its class.
pub(crate) fn report(err: &ScoringError) {
    let class = err.class();
    let event = err.code();
    match err {
        ScoringError::MultipleAnswers { question_id }
        | ScoringError::InvalidUserAnswers { question_id } => {
            emit!(class, event = event, question_id = %question_id)
        }
        ScoringError::AnswerNotFound {
            question_id,
            answer,
        } => emit!(class, event = event, question_id = %question_id, answer = %answer),
        ScoringError::MissingAnswers { missing } => {
            emit!(class, event = event, missing = ?missing)
        }
        ScoringError::MissingDependency {
            question_id,
            dependency_id,
        }
        | ScoringError::EmptyDependency {
            question_id,
            dependency_id,
        }
        | ScoringError::MultipleDependencyAnswers {
            question_id,
            dependency_id,
        } => emit!(
            class,
            event = event,
            question_id = %question_id,
            dependency_id = %dependency_id
        ),
        ScoringError::NoScoreForDependency {
            question_id,
            answer,
            dependency_answer,
        } => emit!(
            class,
            event = event,
            question_id = %question_id,
            answer = %answer,
            dependency_answer = %dependency_answer
        ),
        ScoringError::GeneralScoring { question_id, value } => {
            emit!(class, event = event, question_id = %question_id, value = *value)
        }
        ScoringError::BandGap { total, percentage } => emit!(
            class,
            event = event,
            question_id = "final-scoring",
            total = *total,
            percentage = *percentage
        ),
        ScoringError::Config {
            question_id,
            reason,
        } => emit!(class, event = event, question_id = %question_id, reason = %reason),
    }
}

pub(crate) fn request_received(grant_type: &str, allow_partial_scoring: bool) {
    info!(
        event = "scoring.request_received",
        grant_type = %grant_type,
        allow_partial_scoring = allow_partial_scoring
    );
}

pub(crate) fn config_found(grant_type: &str) {
    info!(event = "scoring.config_found", grant_type = %grant_type);
}

pub(crate) fn config_missing(grant_type: &str) {
    error!(event = "scoring.config_missing", grant_type = %grant_type);
}

pub(crate) fn final_result(grant_type: &str, result: &FinalResult) {
    info!(
        event = "scoring.final_result",
        grant_type = %grant_type,
        score = result.score,
        band = %result.score_band,
        status = ?result.status
    );
}
