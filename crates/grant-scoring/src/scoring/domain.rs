use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::bands::{ScoreBand, TotalBands};

/// Closed set of strategies a question can be scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMethod {
    Single,
    Multi,
    Matrix,
}

/// Named classification of a score. Both historical naming revisions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandName {
    Weak,
    Medium,
    Average,
    Strong,
}

impl BandName {
    pub fn label(&self) -> &'static str {
        match self {
            BandName::Weak => "Weak",
            BandName::Medium => "Medium",
            BandName::Average => "Average",
            BandName::Strong => "Strong",
        }
    }
}

impl fmt::Display for BandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BandName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Weak" => Ok(BandName::Weak),
            "Medium" => Ok(BandName::Medium),
            "Average" => Ok(BandName::Average),
            "Strong" => Ok(BandName::Strong),
            other => Err(format!(
                "unknown band name '{other}' (expected Weak, Medium, Average or Strong)"
            )),
        }
    }
}

/// Points awarded for an answer: a flat value, or a column per dependency answer for matrix
/// questions. `None` marks an opt-out answer such as "None of the above".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerScore {
    Points(Option<f64>),
    Matrix(BTreeMap<String, Option<f64>>),
}

impl Default for AnswerScore {
    fn default() -> Self {
        AnswerScore::Points(None)
    }
}

/// A selectable answer and the score it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub score: AnswerScore,
}

/// A single question of a grant's scoring configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub category: Option<String>,
    pub funding_priorities: Option<Vec<String>>,
    pub change_link: Option<String>,
    /// Absent only on dependency questions, which are never scored directly.
    pub score_method: Option<ScoreMethod>,
    pub answers: Vec<Answer>,
    pub score_bands: Vec<ScoreBand>,
    pub max_score: Option<f64>,
    pub is_dependency: bool,
    pub score_dependency: Option<String>,
    pub is_score_only: bool,
}

impl Question {
    pub fn find_answer(&self, value: &str) -> Option<&Answer> {
        self.answers.iter().find(|candidate| candidate.answer == value)
    }
}

/// Validated, immutable scoring rules for one grant type.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub questions: Vec<Question>,
    pub score_bands: TotalBands,
    pub max_score: f64,
    pub eligibility_percentage_threshold: Option<f64>,
}

impl ScoringConfig {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// Caller-supplied answer for one question, before normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
    Missing,
}

impl AnswerValue {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            AnswerValue::Text(text) => vec![text.clone()],
            AnswerValue::List(items) => items.clone(),
            AnswerValue::Missing => Vec::new(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl<const N: usize> From<[&str; N]> for AnswerValue {
    fn from(values: [&str; N]) -> Self {
        AnswerValue::List(values.iter().map(|value| value.to_string()).collect())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::List(values)
    }
}

/// Answers for a request keyed by question id.
pub type Answers = BTreeMap<String, AnswerValue>;

/// Outcome of scoring one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(serialize_with = "serialize_optional_points")]
    pub value: Option<f64>,
    pub band: Option<BandName>,
}

/// Per-question entry of a scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScore {
    pub question_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_priorities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_link: Option<String>,
    pub score: ScoreResult,
}

impl RawScore {
    pub(crate) fn for_question(question: &Question, score: ScoreResult) -> Self {
        Self {
            question_id: question.id.clone(),
            category: question.category.clone(),
            funding_priorities: question.funding_priorities.clone(),
            change_link: question.change_link.clone(),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    Ineligible,
}

/// Aggregated response for a whole application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub answers: Vec<RawScore>,
    #[serde(serialize_with = "serialize_points")]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EligibilityStatus>,
    pub score_band: BandName,
}

// Whole numbers are written as JSON integers so `8` never becomes `8.0`.
fn serialize_points<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_optional_points<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(points) => serialize_points(points, serializer),
        None => serializer.serialize_none(),
    }
}
