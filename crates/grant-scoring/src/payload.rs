//! Converts request payloads into the answer map the engine consumes.
//!
//! Two shapes are accepted: `{"data": {"main": {id: value}}}` and
//! `{"answers": [{"questionId": id, "answers": [...]}]}`.

use serde_json::{Map, Value};

use crate::scoring::{AnswerValue, Answers};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected an object with \"data\", but received something else")]
    UnrecognisedShape,
    #[error("\"data\" must be an object when using this format")]
    DataNotObject,
    #[error("\"main\" field is missing inside \"data\"")]
    MissingMain,
    #[error("\"main\" must be an object")]
    MainNotObject,
    #[error("\"answers\" item {index} must be an object with a string \"questionId\"")]
    InvalidAnswerItem { index: usize },
    #[error("\"{question_id}\" must be a string, number, or array of strings and numbers")]
    InvalidValue { question_id: String },
    #[error("\"{question_id}\" contains a duplicate value")]
    DuplicateValue { question_id: String },
    #[error("\"{question_id}\" is answered more than once")]
    DuplicateQuestion { question_id: String },
}

pub fn parse_payload(body: &str) -> Result<Answers, PayloadError> {
    let value: Value = serde_json::from_str(body)?;
    normalize_payload(&value)
}

/// Flattens either payload shape. Extra keys such as `meta` or `data.files` are ignored.
pub fn normalize_payload(payload: &Value) -> Result<Answers, PayloadError> {
    let root = payload.as_object().ok_or(PayloadError::UnrecognisedShape)?;

    if let Some(data) = root.get("data") {
        let data = data.as_object().ok_or(PayloadError::DataNotObject)?;
        let main = data.get("main").ok_or(PayloadError::MissingMain)?;
        let main = main.as_object().ok_or(PayloadError::MainNotObject)?;
        return from_main(main);
    }

    match root.get("answers") {
        Some(Value::Array(items)) => from_answer_items(items),
        _ => Err(PayloadError::UnrecognisedShape),
    }
}

fn from_main(main: &Map<String, Value>) -> Result<Answers, PayloadError> {
    main.iter()
        .map(|(question_id, value)| Ok((question_id.clone(), answer_value(question_id, value)?)))
        .collect()
}

fn from_answer_items(items: &[Value]) -> Result<Answers, PayloadError> {
    let mut answers = Answers::new();
    for (index, item) in items.iter().enumerate() {
        let question_id = item
            .get("questionId")
            .and_then(Value::as_str)
            .ok_or(PayloadError::InvalidAnswerItem { index })?;
        let value = answer_value(question_id, item.get("answers").unwrap_or(&Value::Null))?;
        if answers.insert(question_id.to_string(), value).is_some() {
            return Err(PayloadError::DuplicateQuestion {
                question_id: question_id.to_string(),
            });
        }
    }
    Ok(answers)
}

fn answer_value(question_id: &str, value: &Value) -> Result<AnswerValue, PayloadError> {
    let invalid = || PayloadError::InvalidValue {
        question_id: question_id.to_string(),
    };

    match value {
        Value::Null => Ok(AnswerValue::Missing),
        Value::Array(items) => {
            let mut list: Vec<String> = Vec::with_capacity(items.len());
            for item in items {
                let text = scalar_text(item).ok_or_else(invalid)?;
                if list.contains(&text) {
                    return Err(PayloadError::DuplicateValue {
                        question_id: question_id.to_string(),
                    });
                }
                list.push(text);
            }
            Ok(AnswerValue::List(list))
        }
        other => scalar_text(other).map(AnswerValue::Text).ok_or_else(invalid),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
