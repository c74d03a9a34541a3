use std::collections::HashSet;

use super::schema::{RawBand, RawQuestion, RawScoringConfig};
use crate::scoring::bands::{BandBasis, BandRange, ScoreBand, TotalBands};
use crate::scoring::domain::{AnswerScore, BandName, Question, ScoreMethod, ScoringConfig};

/// Validates a raw configuration and converts it into its canonical form.
/// Returns every problem found, not just the first.
pub fn build_config(raw: RawScoringConfig) -> Result<ScoringConfig, Vec<String>> {
    let mut problems = Vec::new();

    if !raw.max_score.is_finite() || raw.max_score < 0.0 {
        problems.push(format!("maxScore: must be a non-negative number, got {}", raw.max_score));
    }

    if let Some(threshold) = raw.eligibility_percentage_threshold {
        if !(0.0..=100.0).contains(&threshold) {
            problems.push(format!(
                "eligibilityPercentageThreshold: must be between 0 and 100, got {threshold}"
            ));
        }
    }

    let dependency_ids: HashSet<&str> = raw
        .questions
        .iter()
        .filter(|question| question.is_dependency)
        .map(|question| question.id.as_str())
        .collect();

    let mut seen = HashSet::new();
    let mut questions = Vec::with_capacity(raw.questions.len());
    for (index, question) in raw.questions.iter().enumerate() {
        let path = format!("questions[{index}]");
        if question.id.trim().is_empty() {
            problems.push(format!("{path}.id: must not be empty"));
        } else if !seen.insert(question.id.as_str()) {
            problems.push(format!("{path}.id: duplicate question id '{}'", question.id));
        }
        questions.push(build_question(&path, question, &dependency_ids, &mut problems));
    }

    let score_bands = build_total_bands(&raw.score_band, &mut problems);

    if problems.is_empty() {
        Ok(ScoringConfig {
            questions,
            score_bands,
            max_score: raw.max_score,
            eligibility_percentage_threshold: raw.eligibility_percentage_threshold,
        })
    } else {
        Err(problems)
    }
}

fn build_question(
    path: &str,
    raw: &RawQuestion,
    dependency_ids: &HashSet<&str>,
    problems: &mut Vec<String>,
) -> Question {
    if !raw.is_dependency {
        if raw.score_method.is_none() {
            problems.push(format!("{path}.scoreMethod: required unless isDependency is set"));
        }
        if raw.answers.is_none() {
            problems.push(format!("{path}.answers: required unless isDependency is set"));
        }
    }

    let answers = raw.answers.clone().unwrap_or_default();
    let is_matrix = raw.score_method == Some(ScoreMethod::Matrix);
    for (index, answer) in answers.iter().enumerate() {
        match (&answer.score, is_matrix) {
            (AnswerScore::Matrix(_), false) => problems.push(format!(
                "{path}.answers[{index}].score: per-dependency scores are only valid for matrix questions"
            )),
            (AnswerScore::Points(_), true) => problems.push(format!(
                "{path}.answers[{index}].score: matrix questions need a score per dependency answer"
            )),
            _ => {}
        }
    }

    match raw.score_dependency.as_deref() {
        Some(dependency_id) if !dependency_ids.contains(dependency_id) => problems.push(format!(
            "{path}.scoreDependency: '{dependency_id}' is not a question marked isDependency"
        )),
        None if is_matrix => problems.push(format!(
            "{path}.scoreDependency: required for matrix questions"
        )),
        _ => {}
    }

    if is_matrix && raw.score_band.is_empty() {
        problems.push(format!("{path}.scoreBand: required for matrix questions"));
    }

    if let Some(max_score) = raw.max_score {
        if !max_score.is_finite() || max_score < 0.0 {
            problems.push(format!("{path}.maxScore: must be a non-negative number"));
        }
    }

    let mut score_bands = Vec::with_capacity(raw.score_band.len());
    for (index, band) in raw.score_band.iter().enumerate() {
        let band_path = format!("{path}.scoreBand[{index}]");
        match band {
            RawBand::Absolute(absolute) => {
                let range = BandRange::absolute(absolute.min_value, absolute.max_value);
                if let Some(band) = build_band(&band_path, band.name(), range, problems) {
                    score_bands.push(band);
                }
            }
            RawBand::Percentage(_) => problems.push(format!(
                "{band_path}: question bands must use minValue/maxValue"
            )),
        }
    }

    Question {
        id: raw.id.clone(),
        category: raw.category.clone(),
        funding_priorities: raw.funding_priorities.clone(),
        change_link: raw.change_link.clone(),
        score_method: raw.score_method,
        answers,
        score_bands,
        max_score: raw.max_score,
        is_dependency: raw.is_dependency,
        score_dependency: raw.score_dependency.clone(),
        is_score_only: raw.is_score_only,
    }
}

fn build_total_bands(raw: &[RawBand], problems: &mut Vec<String>) -> TotalBands {
    if raw.is_empty() {
        problems.push("scoreBand: at least one total band is required".to_string());
    }

    let basis = match raw.first() {
        Some(RawBand::Percentage(_)) => BandBasis::Percentage,
        _ => BandBasis::Points,
    };

    let mut bands = Vec::with_capacity(raw.len());
    for (index, band) in raw.iter().enumerate() {
        let path = format!("scoreBand[{index}]");
        let range = match (band, basis) {
            (RawBand::Absolute(absolute), BandBasis::Points) => {
                BandRange::absolute(absolute.min_value, absolute.max_value)
            }
            (RawBand::Percentage(percentage), BandBasis::Percentage) => BandRange::percentage(
                percentage.start_percentage,
                percentage.less_than_percentage,
            ),
            _ => {
                problems.push(format!(
                    "{path}: absolute and percentage bands cannot be mixed"
                ));
                continue;
            }
        };
        if let Some(band) = build_band(&path, band.name(), range, problems) {
            bands.push(band);
        }
    }

    TotalBands { basis, bands }
}

fn build_band(
    path: &str,
    name: &str,
    range: BandRange,
    problems: &mut Vec<String>,
) -> Option<ScoreBand> {
    let name = match name.parse::<BandName>() {
        Ok(name) => name,
        Err(err) => {
            problems.push(format!("{path}.name: {err}"));
            return None;
        }
    };

    if !range.is_ordered() {
        problems.push(format!("{path}: lower bound must not exceed upper bound"));
        return None;
    }

    Some(ScoreBand { name, range })
}
