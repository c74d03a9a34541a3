use std::collections::{HashMap, HashSet};

use super::diagnostics;
use super::domain::{Answers, Question, RawScore, ScoreMethod, ScoreResult, ScoringConfig};
use super::error::ScoringError;
use super::methods::dispatch;
use super::routing::route;

/// Scoring function bound to one grant configuration.
///
/// The question index is built once and reused for every request scored against the same
/// configuration.
#[derive(Debug, Clone)]
pub struct Scorer<'c> {
    config: &'c ScoringConfig,
    allow_partial_scoring: bool,
    index: HashMap<&'c str, &'c Question>,
}

/// Builds a [`Scorer`] for `config`.
pub fn score(config: &ScoringConfig, allow_partial_scoring: bool) -> Scorer<'_> {
    let index = config
        .questions
        .iter()
        .map(|question| (question.id.as_str(), question))
        .collect();

    Scorer {
        config,
        allow_partial_scoring,
        index,
    }
}

impl<'c> Scorer<'c> {
    /// Scores every answered, non-dependency question in configuration order.
    ///
    /// A dependency question is echoed once, directly after the first question that consumes
    /// it, with a zero value and the consumer's band.
    pub fn score(&self, answers: &Answers) -> Result<Vec<RawScore>, ScoringError> {
        let routed = route(self.config, answers, self.allow_partial_scoring).map_err(|err| {
            diagnostics::report(&err);
            err
        })?;

        let mut raw_scores = Vec::with_capacity(routed.scorable.len() + routed.context.len());
        let mut echoed: HashSet<&str> = HashSet::new();

        for entry in &routed.scorable {
            let question = entry.question;
            let result = dispatch(question, &entry.answers, &routed.context).map_err(|err| {
                // matrix scoring reports its own failures
                if question.score_method != Some(ScoreMethod::Matrix) {
                    diagnostics::report(&err);
                }
                err
            })?;
            let band = result.band;
            raw_scores.push(RawScore::for_question(question, result));

            let Some(dependency_id) = question.score_dependency.as_deref() else {
                continue;
            };
            if !echoed.insert(dependency_id) {
                continue;
            }
            if let Some(dependency) = self.index.get(dependency_id) {
                raw_scores.push(RawScore::for_question(
                    dependency,
                    ScoreResult {
                        value: Some(0.0),
                        band,
                    },
                ));
            }
        }

        Ok(raw_scores)
    }
}
