use super::common::*;
use crate::scoring::domain::{AnswerValue, BandName, ScoreMethod, ScoreResult};
use crate::scoring::error::{ErrorClass, ScoringError};
use crate::scoring::methods::{dispatch, matrix_score, multi_score, normalize_answers, single_score};
use crate::scoring::routing::DependencyContext;

fn context(value: AnswerValue) -> DependencyContext {
    DependencyContext::from([("businessType".to_string(), value)])
}

#[test]
fn single_score_matches_answer_and_band() {
    let result = single_score(&single_question(), &strings(&["B"])).expect("scores");

    assert_eq!(
        result,
        ScoreResult {
            value: Some(8.0),
            band: Some(BandName::Strong)
        }
    );
}

#[test]
fn single_score_rejects_multiple_answers() {
    let err = single_score(&single_question(), &strings(&["A", "B"])).expect_err("two answers");

    assert_eq!(
        err.to_string(),
        "Multiple answers provided for single-answer question: singleAnswer"
    );
    assert_eq!(err.class(), ErrorClass::UserInput);
}

#[test]
fn single_score_rejects_unknown_answer() {
    let err = single_score(&single_question(), &strings(&["Z"])).expect_err("unknown answer");

    assert_eq!(err.to_string(), "Answer \"Z\" not found in question: singleAnswer.");
}

#[test]
fn single_score_keeps_null_value_but_classifies_it_as_zero() {
    let result =
        single_score(&single_question(), &strings(&["None of the above"])).expect("scores");

    assert_eq!(result.value, None);
    assert_eq!(result.band, Some(BandName::Weak));
}

#[test]
fn single_score_without_matching_band_has_no_band() {
    let mut question = single_question();
    question.score_bands.retain(|band| band.name != BandName::Strong);

    let result = single_score(&question, &strings(&["B"])).expect("scores");

    assert_eq!(result.value, Some(8.0));
    assert_eq!(result.band, None);
}

#[test]
fn multi_score_sums_selected_answers() {
    let result = multi_score(&multi_question(), &strings(&["A", "C"])).expect("scores");

    assert_eq!(
        result,
        ScoreResult {
            value: Some(6.0),
            band: Some(BandName::Medium)
        }
    );
}

#[test]
fn multi_score_of_no_answers_is_zero() {
    let result = multi_score(&multi_question(), &[]).expect("scores");

    assert_eq!(result.value, Some(0.0));
    assert_eq!(result.band, Some(BandName::Weak));
}

#[test]
fn multi_score_rejects_unknown_answer() {
    match multi_score(&multi_question(), &strings(&["A", "Q"])) {
        Err(ScoringError::AnswerNotFound {
            question_id,
            answer,
        }) => {
            assert_eq!(question_id, "multiAnswer");
            assert_eq!(answer, "Q");
        }
        other => panic!("expected answer not found, got {other:?}"),
    }
}

#[test]
fn normalize_splits_comma_joined_multi_answers_once() {
    let joined = AnswerValue::from("A,C,A");

    assert_eq!(
        normalize_answers(Some(ScoreMethod::Multi), &joined),
        strings(&["A", "C"])
    );
    assert_eq!(
        normalize_answers(Some(ScoreMethod::Single), &joined),
        strings(&["A,C,A"])
    );
    assert!(normalize_answers(Some(ScoreMethod::Multi), &AnswerValue::Missing).is_empty());
}

#[test]
fn matrix_score_reads_cell_for_dependency_answer() {
    let result = matrix_score(
        &matrix_question(),
        &strings(&["Expand"]),
        &context(AnswerValue::from("Farm")),
    )
    .expect("scores");

    assert_eq!(
        result,
        ScoreResult {
            value: Some(4.0),
            band: Some(BandName::Medium)
        }
    );
}

#[test]
fn matrix_score_accepts_single_item_dependency_list() {
    let result = matrix_score(
        &matrix_question(),
        &strings(&["Expand"]),
        &context(AnswerValue::from(["Processor"])),
    )
    .expect("scores");

    assert_eq!(result.value, Some(8.0));
    assert_eq!(result.band, Some(BandName::Strong));
}

#[test]
fn matrix_score_classifies_null_cell_as_zero() {
    let result = matrix_score(
        &matrix_question(),
        &strings(&["Maintain"]),
        &context(AnswerValue::from("Processor")),
    )
    .expect("scores");

    assert_eq!(result.value, None);
    assert_eq!(result.band, Some(BandName::Weak));
}

#[test]
fn matrix_score_dependency_failures_are_distinct() {
    let question = matrix_question();
    let row = strings(&["Expand"]);

    match matrix_score(&question, &row, &DependencyContext::new()) {
        Err(ScoringError::MissingDependency { dependency_id, .. }) => {
            assert_eq!(dependency_id, "businessType")
        }
        other => panic!("expected missing dependency, got {other:?}"),
    }

    for blank in [AnswerValue::Missing, AnswerValue::from(""), AnswerValue::List(Vec::new())] {
        match matrix_score(&question, &row, &context(blank)) {
            Err(ScoringError::EmptyDependency { .. }) => {}
            other => panic!("expected empty dependency, got {other:?}"),
        }
    }

    match matrix_score(&question, &row, &context(AnswerValue::from(["Farm", "Processor"]))) {
        Err(ScoringError::MultipleDependencyAnswers { question_id, .. }) => {
            assert_eq!(question_id, "projectImpact")
        }
        other => panic!("expected multiple dependency answers, got {other:?}"),
    }
}

#[test]
fn matrix_score_rejects_row_and_column_mismatches() {
    let question = matrix_question();
    let farm = context(AnswerValue::from("Farm"));

    match matrix_score(&question, &strings(&["Shrink"]), &farm) {
        Err(ScoringError::AnswerNotFound { answer, .. }) => assert_eq!(answer, "Shrink"),
        other => panic!("expected answer not found, got {other:?}"),
    }

    match matrix_score(&question, &strings(&["Expand"]), &context(AnswerValue::from("Retail"))) {
        Err(ScoringError::NoScoreForDependency {
            dependency_answer, ..
        }) => assert_eq!(dependency_answer, "Retail"),
        other => panic!("expected no score for dependency, got {other:?}"),
    }

    match matrix_score(&question, &[], &farm) {
        Err(ScoringError::InvalidUserAnswers { .. }) => {}
        other => panic!("expected invalid user answers, got {other:?}"),
    }

    match matrix_score(&question, &strings(&["Expand", "Maintain"]), &farm) {
        Err(ScoringError::MultipleAnswers { .. }) => {}
        other => panic!("expected multiple answers, got {other:?}"),
    }
}

#[test]
fn matrix_score_flags_configuration_defects() {
    let farm = context(AnswerValue::from("Farm"));

    let mut unbanded = matrix_question();
    unbanded.score_bands.clear();
    let err = matrix_score(&unbanded, &strings(&["Expand"]), &farm).expect_err("no bands");
    assert!(matches!(err, ScoringError::GeneralScoring { value, .. } if value == 4.0));
    assert_eq!(err.class(), ErrorClass::Configuration);

    let mut anonymous = matrix_question();
    anonymous.id = String::new();
    let err = matrix_score(&anonymous, &strings(&["Expand"]), &farm).expect_err("no id");
    assert!(matches!(err, ScoringError::Config { .. }));
    assert_eq!(err.class(), ErrorClass::Configuration);
}

#[test]
fn dispatch_requires_a_scoring_method() {
    let err = dispatch(&dependency_question(), &strings(&["Farm"]), &DependencyContext::new())
        .expect_err("dependency questions are not scored");

    assert_eq!(err.class(), ErrorClass::Configuration);
}
