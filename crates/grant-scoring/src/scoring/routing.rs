use std::collections::BTreeMap;

use super::domain::{AnswerValue, Answers, Question, ScoringConfig};
use super::error::ScoringError;
use super::methods::normalize_answers;

/// Raw answers of dependency questions keyed by question id.
pub type DependencyContext = BTreeMap<String, AnswerValue>;

/// A question that will be scored, with its normalised answers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorableAnswer<'c> {
    pub question: &'c Question,
    pub answers: Vec<String>,
}

/// A request's answers split into scored questions and context-only questions.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedAnswers<'c> {
    /// In configuration order.
    pub scorable: Vec<ScorableAnswer<'c>>,
    pub context: DependencyContext,
}

/// Filters, checks and partitions a request's answers against `config`.
///
/// Keys that are not configured questions are ignored. Unless partial scoring is allowed,
/// every configured question must be answered; the error lists all missing ids in
/// configuration order.
pub fn route<'c>(
    config: &'c ScoringConfig,
    answers: &Answers,
    allow_partial_scoring: bool,
) -> Result<RoutedAnswers<'c>, ScoringError> {
    if !allow_partial_scoring {
        let missing: Vec<String> = config
            .questions
            .iter()
            .filter(|question| !answers.contains_key(&question.id))
            .map(|question| question.id.clone())
            .collect();

        if !missing.is_empty() {
            return Err(ScoringError::MissingAnswers { missing });
        }
    }

    let mut scorable = Vec::new();
    let mut context = DependencyContext::new();

    for question in &config.questions {
        let Some(value) = answers.get(&question.id) else {
            continue;
        };

        if question.is_dependency {
            context.insert(question.id.clone(), value.clone());
        } else {
            scorable.push(ScorableAnswer {
                question,
                answers: normalize_answers(question.score_method, value),
            });
        }
    }

    for entry in &scorable {
        if let Some(dependency_id) = entry.question.score_dependency.as_deref() {
            if !context.contains_key(dependency_id) {
                return Err(ScoringError::MissingDependency {
                    question_id: entry.question.id.clone(),
                    dependency_id: dependency_id.to_string(),
                });
            }
        }
    }

    Ok(RoutedAnswers { scorable, context })
}
