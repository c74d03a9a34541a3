//! Wire shape of a grant scoring configuration file.
//!
//! These types mirror the JSON exactly; [`super::validation::build_config`] turns them into a
//! [`crate::scoring::ScoringConfig`].

use serde::Deserialize;

use crate::scoring::domain::{Answer, ScoreMethod};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawScoringConfig {
    pub questions: Vec<RawQuestion>,
    #[serde(default)]
    pub score_band: Vec<RawBand>,
    pub max_score: f64,
    #[serde(default)]
    pub eligibility_percentage_threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawQuestion {
    pub id: String,
    #[serde(default)]
    pub change_link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub funding_priorities: Option<Vec<String>>,
    #[serde(default)]
    pub is_dependency: bool,
    #[serde(default)]
    pub score_dependency: Option<String>,
    #[serde(default)]
    pub score_method: Option<ScoreMethod>,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
    #[serde(default)]
    pub score_band: Vec<RawBand>,
    #[serde(default)]
    pub is_score_only: bool,
    #[serde(default)]
    pub max_score: Option<f64>,
}

/// Either historical band shape. Names stay strings so every bad name can be reported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawBand {
    Absolute(AbsoluteBand),
    Percentage(PercentageBand),
}

impl RawBand {
    pub fn name(&self) -> &str {
        match self {
            RawBand::Absolute(band) => &band.name,
            RawBand::Percentage(band) => &band.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbsoluteBand {
    pub name: String,
    #[serde(rename = "minValue")]
    pub min_value: f64,
    #[serde(rename = "maxValue")]
    pub max_value: f64,
}

/// `lessThanPercentage` may be `null` or omitted on the last band to leave it unbounded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PercentageBand {
    pub name: String,
    #[serde(rename = "startPercentage")]
    pub start_percentage: f64,
    #[serde(rename = "lessThanPercentage", default)]
    pub less_than_percentage: Option<f64>,
}
