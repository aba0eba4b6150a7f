use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    services::quiz_service::{DEFAULT_MCQ_QUESTIONS, DEFAULT_WRITTEN_QUESTIONS},
};

pub const DEFAULT_NOTES_LEVEL: &str = "intermediate";
pub const DEFAULT_NOTES_FORMAT: &str = "structured";

/// `numQuestions` arrives as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuestionCount {
    Number(f64),
    Text(String),
}

impl QuestionCount {
    /// The requested count, or `default` when it is not a positive number.
    ///
    /// `None` when the value counts as absent: a zero or an empty string.
    pub fn resolve(&self, default: u32) -> Option<u32> {
        match self {
            QuestionCount::Number(n) if *n == 0.0 => None,
            QuestionCount::Text(s) if s.trim().is_empty() => None,
            QuestionCount::Number(n) => Some(positive_count(*n).unwrap_or(default)),
            QuestionCount::Text(s) => Some(
                s.trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(positive_count)
                    .unwrap_or(default),
            ),
        }
    }
}

fn positive_count(n: f64) -> Option<u32> {
    (n.is_finite() && n >= 1.0).then(|| n.trunc().min(u32::MAX as f64) as u32)
}

fn resolve_count(count: &Option<QuestionCount>, default: u32) -> AppResult<u32> {
    count
        .as_ref()
        .and_then(|n| n.resolve(default))
        .ok_or_else(|| AppError::invalid_input("Missing topic or numQuestions"))
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMcqRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "topic is required"))]
    pub topic: String,

    #[validate(required(message = "numQuestions is required"))]
    pub num_questions: Option<QuestionCount>,
}

impl GenerateMcqRequest {
    pub fn question_count(&self) -> AppResult<u32> {
        resolve_count(&self.num_questions, DEFAULT_MCQ_QUESTIONS)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWrittenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "topic is required"))]
    pub topic: String,

    #[validate(required(message = "numQuestions is required"))]
    pub num_questions: Option<QuestionCount>,

    pub difficulty: Option<String>,

    /// Comma separated list, assigned to questions round-robin.
    pub categories: Option<String>,
}

impl GenerateWrittenRequest {
    pub fn question_count(&self) -> AppResult<u32> {
        resolve_count(&self.num_questions, DEFAULT_WRITTEN_QUESTIONS)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswersRequest {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNotesRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,

    pub level: Option<String>,
    pub format: Option<String>,
}

impl GenerateNotesRequest {
    pub fn level(&self) -> &str {
        trimmed(&self.level).unwrap_or(DEFAULT_NOTES_LEVEL)
    }

    pub fn format(&self) -> &str {
        trimmed(&self.format).unwrap_or(DEFAULT_NOTES_FORMAT)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "topic is required"))]
    pub topic: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "timeframe is required"))]
    pub timeframe: String,

    pub level: Option<String>,
}

impl GenerateRoadmapRequest {
    pub fn level(&self) -> Option<&str> {
        trimmed(&self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StudentResponse {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateSuggestionsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "responses must not be empty"))]
    pub responses: Vec<StudentResponse>,
}
