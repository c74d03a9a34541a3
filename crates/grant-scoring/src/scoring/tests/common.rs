use std::collections::BTreeMap;

use crate::scoring::bands::{BandBasis, BandRange, ScoreBand, TotalBands};
use crate::scoring::domain::{
    Answer, AnswerScore, AnswerValue, Answers, BandName, Question, ScoreMethod, ScoringConfig,
};

pub(super) fn band(name: BandName, min_value: f64, max_value: f64) -> ScoreBand {
    ScoreBand {
        name,
        range: BandRange::absolute(min_value, max_value),
    }
}

pub(super) fn percentage_band(name: BandName, start: f64, less_than: Option<f64>) -> ScoreBand {
    ScoreBand {
        name,
        range: BandRange::percentage(start, less_than),
    }
}

pub(super) fn answer(text: &str, score: Option<f64>) -> Answer {
    Answer {
        answer: text.to_string(),
        score: AnswerScore::Points(score),
    }
}

pub(super) fn matrix_answer(text: &str, cells: &[(&str, Option<f64>)]) -> Answer {
    Answer {
        answer: text.to_string(),
        score: AnswerScore::Matrix(
            cells
                .iter()
                .map(|(column, score)| (column.to_string(), *score))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

pub(super) fn question(id: &str, method: ScoreMethod, answers: Vec<Answer>) -> Question {
    Question {
        id: id.to_string(),
        category: None,
        funding_priorities: None,
        change_link: Some(format!("/{id}")),
        score_method: Some(method),
        answers,
        score_bands: vec![
            band(BandName::Weak, 0.0, 3.0),
            band(BandName::Medium, 4.0, 7.0),
            band(BandName::Strong, 8.0, 100.0),
        ],
        max_score: None,
        is_dependency: false,
        score_dependency: None,
        is_score_only: false,
    }
}

pub(super) fn single_question() -> Question {
    let mut question = question(
        "singleAnswer",
        ScoreMethod::Single,
        vec![
            answer("A", Some(4.0)),
            answer("B", Some(8.0)),
            answer("None of the above", None),
        ],
    );
    question.category = Some("Eligibility".to_string());
    question.max_score = Some(8.0);
    question
}

pub(super) fn multi_question() -> Question {
    let mut question = question(
        "multiAnswer",
        ScoreMethod::Multi,
        vec![
            answer("A", Some(4.0)),
            answer("B", Some(4.0)),
            answer("C", Some(2.0)),
            answer("D", Some(2.0)),
            answer("E", Some(0.0)),
        ],
    );
    question.funding_priorities = Some(vec!["Improve productivity".to_string()]);
    question.max_score = Some(12.0);
    question
}

pub(super) fn dependency_question() -> Question {
    Question {
        id: "businessType".to_string(),
        category: None,
        funding_priorities: None,
        change_link: Some("/business-type".to_string()),
        score_method: None,
        answers: vec![answer("Farm", None), answer("Processor", None)],
        score_bands: Vec::new(),
        max_score: None,
        is_dependency: true,
        score_dependency: None,
        is_score_only: false,
    }
}

pub(super) fn matrix_question() -> Question {
    let mut question = question(
        "projectImpact",
        ScoreMethod::Matrix,
        vec![
            matrix_answer("Expand", &[("Farm", Some(4.0)), ("Processor", Some(8.0))]),
            matrix_answer("Maintain", &[("Farm", Some(2.0)), ("Processor", None)]),
        ],
    );
    question.score_dependency = Some("businessType".to_string());
    question.max_score = Some(8.0);
    question
}

/// Single + multi questions, max score 20, eligible from 60%.
pub(super) fn example_config() -> ScoringConfig {
    ScoringConfig {
        questions: vec![single_question(), multi_question()],
        score_bands: TotalBands {
            basis: BandBasis::Percentage,
            bands: vec![
                percentage_band(BandName::Weak, 0.0, Some(20.0)),
                percentage_band(BandName::Average, 20.0, Some(50.0)),
                percentage_band(BandName::Strong, 50.0, None),
            ],
        },
        max_score: 20.0,
        eligibility_percentage_threshold: Some(60.0),
    }
}

/// Dependency + matrix + single questions with absolute total bands and no threshold.
pub(super) fn matrix_config() -> ScoringConfig {
    ScoringConfig {
        questions: vec![dependency_question(), matrix_question(), single_question()],
        score_bands: TotalBands {
            basis: BandBasis::Points,
            bands: vec![
                band(BandName::Weak, 0.0, 5.0),
                band(BandName::Medium, 6.0, 10.0),
                band(BandName::Strong, 11.0, 16.0),
            ],
        },
        max_score: 16.0,
        eligibility_percentage_threshold: None,
    }
}

pub(super) fn answers<const N: usize>(entries: [(&str, AnswerValue); N]) -> Answers {
    entries
        .into_iter()
        .map(|(id, value)| (id.to_string(), value))
        .collect()
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
