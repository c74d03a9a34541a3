/// Who is responsible for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Defect in a grant's scoring data; never caused by ordinary input.
    Configuration,
    /// Recoverable problem with the caller's answers.
    UserInput,
}

/// Failure raised while scoring a request. Every failure aborts the whole pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Multiple answers provided for single-answer question: {question_id}")]
    MultipleAnswers { question_id: String },
    #[error("Answer \"{answer}\" not found in question: {question_id}.")]
    AnswerNotFound { question_id: String, answer: String },
    #[error("Questions with id(s): {} not found in user's answers.", .missing.join(", "))]
    MissingAnswers { missing: Vec<String> },
    #[error("Invalid user answers provided for question: {question_id}")]
    InvalidUserAnswers { question_id: String },
    #[error("Dependency question {dependency_id} required by question {question_id} was not answered")]
    MissingDependency {
        question_id: String,
        dependency_id: String,
    },
    #[error("Dependency question {dependency_id} required by question {question_id} has an empty answer")]
    EmptyDependency {
        question_id: String,
        dependency_id: String,
    },
    #[error("Dependency question {dependency_id} required by question {question_id} must have exactly one answer")]
    MultipleDependencyAnswers {
        question_id: String,
        dependency_id: String,
    },
    #[error("No score for answer \"{answer}\" with dependency answer \"{dependency_answer}\" in question: {question_id}")]
    NoScoreForDependency {
        question_id: String,
        answer: String,
        dependency_answer: String,
    },
    #[error("No matching score band found for score {value} in question: {question_id}")]
    GeneralScoring { question_id: String, value: f64 },
    #[error("No matching score band found for total score {total}. Check configuration for scoreBand gaps.")]
    BandGap { total: f64, percentage: f64 },
    #[error("Invalid scoring configuration for question {question_id}: {reason}")]
    Config { question_id: String, reason: String },
}

impl ScoringError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ScoringError::GeneralScoring { .. }
            | ScoringError::BandGap { .. }
            | ScoringError::Config { .. } => ErrorClass::Configuration,
            ScoringError::MultipleAnswers { .. }
            | ScoringError::AnswerNotFound { .. }
            | ScoringError::MissingAnswers { .. }
            | ScoringError::InvalidUserAnswers { .. }
            | ScoringError::MissingDependency { .. }
            | ScoringError::EmptyDependency { .. }
            | ScoringError::MultipleDependencyAnswers { .. }
            | ScoringError::NoScoreForDependency { .. } => ErrorClass::UserInput,
        }
    }

    /// Stable event code used by the diagnostics sink.
    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::MultipleAnswers { .. } => "scoring.single_score.multiple_answers",
            ScoringError::AnswerNotFound { .. } => "scoring.answer_not_found",
            ScoringError::MissingAnswers { .. } => "scoring.missing_answers",
            ScoringError::InvalidUserAnswers { .. } => "scoring.matrix_score.invalid_user_answers",
            ScoringError::MissingDependency { .. } => "scoring.matrix_score.missing_dependency",
            ScoringError::EmptyDependency { .. } => "scoring.matrix_score.empty_dependency",
            ScoringError::MultipleDependencyAnswers { .. } => {
                "scoring.matrix_score.multiple_dependency_answers"
            }
            ScoringError::NoScoreForDependency { .. } => {
                "scoring.matrix_score.no_score_for_dependency"
            }
            ScoringError::GeneralScoring { .. } => "scoring.matrix_score.general_error",
            ScoringError::BandGap { .. } => "scoring.final_result.band_gap",
            ScoringError::Config { .. } => "scoring.config_error",
        }
    }
}
