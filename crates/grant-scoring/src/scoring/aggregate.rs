use super::diagnostics;
use super::domain::{EligibilityStatus, FinalResult, RawScore, ScoringConfig};
use super::error::ScoringError;

/// Totals per-question scores and classifies the application as a whole.
///
/// Opt-out (`null`) values count as `0`. Score-only questions add to the total but are
/// dropped from the visible answers.
pub fn map_to_final_result(
    config: &ScoringConfig,
    raw_scores: &[RawScore],
) -> Result<FinalResult, ScoringError> {
    let total: f64 = raw_scores
        .iter()
        .map(|raw| raw.score.value.unwrap_or(0.0))
        .sum();

    let percentage = if config.max_score > 0.0 {
        total / config.max_score * 100.0
    } else {
        0.0
    };

    let score_band = match config.score_bands.classify(total, percentage) {
        Some(band) => band.name,
        None => {
            let err = ScoringError::BandGap { total, percentage };
            diagnostics::report(&err);
            return Err(err);
        }
    };

    let status = config
        .eligibility_percentage_threshold
        .map(|threshold| {
            if percentage >= threshold {
                EligibilityStatus::Eligible
            } else {
                EligibilityStatus::Ineligible
            }
        });

    let answers = raw_scores
        .iter()
        .filter(|raw| {
            !config
                .question(&raw.question_id)
                .is_some_and(|question| question.is_score_only)
        })
        .cloned()
        .collect();

    Ok(FinalResult {
        answers,
        score: total,
        status,
        score_band,
    })
}
