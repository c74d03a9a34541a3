//! Scoring engine: per-question strategies, answer routing, orchestration and aggregation.
//!
//! Everything here is pure over an immutable [`ScoringConfig`]; the only side effect is
//! structured diagnostics emitted through `tracing`.

pub mod aggregate;
pub mod bands;
pub(crate) mod diagnostics;
pub mod domain;
pub mod engine;
pub mod error;
pub mod methods;
pub mod routing;

#[cfg(test)]
mod tests;

pub use aggregate::map_to_final_result;
pub use bands::{BandBasis, BandEnd, BandRange, ScoreBand, TotalBands};
pub use domain::{
    Answer, AnswerScore, AnswerValue, Answers, BandName, EligibilityStatus, FinalResult, Question,
    RawScore, ScoreMethod, ScoreResult, ScoringConfig,
};
pub use engine::{score, Scorer};
pub use error::{ErrorClass, ScoringError};
pub use routing::{route, DependencyContext, RoutedAnswers, ScorableAnswer};
