use std::sync::Arc;

use crate::grants::GrantRegistry;
use crate::scoring::{self, diagnostics, Answers, ErrorClass, FinalResult, ScoringError};

#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("Invalid grant type: {grant_type}")]
    UnknownGrantType { grant_type: String },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl ScoringServiceError {
    /// An unknown grant type is the caller's mistake, like any other bad request.
    pub fn class(&self) -> ErrorClass {
        match self {
            ScoringServiceError::UnknownGrantType { .. } => ErrorClass::UserInput,
            ScoringServiceError::Scoring(err) => err.class(),
        }
    }
}

/// Facade resolving a grant's configuration and running the full scoring pass.
#[derive(Debug, Clone)]
pub struct ScoringService {
    registry: Arc<GrantRegistry>,
}

impl ScoringService {
    pub fn new(registry: Arc<GrantRegistry>) -> Self {
        Self { registry }
    }

    pub fn score(
        &self,
        grant_type: &str,
        answers: &Answers,
        allow_partial_scoring: bool,
    ) -> Result<FinalResult, ScoringServiceError> {
        diagnostics::request_received(grant_type, allow_partial_scoring);

        let Some(config) = self.registry.get(grant_type) else {
            diagnostics::config_missing(grant_type);
            return Err(ScoringServiceError::UnknownGrantType {
                grant_type: grant_type.to_string(),
            });
        };
        diagnostics::config_found(grant_type);

        let raw_scores = scoring::score(&config, allow_partial_scoring).score(answers)?;
        let result = scoring::map_to_final_result(&config, &raw_scores)?;

        diagnostics::final_result(grant_type, &result);
        Ok(result)
    }
}
