use std::sync::Arc;

use crate::{
    constants::{
        prompts::{mcq_prompt, written_prompt},
        response_format::DEFAULT_DIFFICULTY,
    },
    errors::{AppError, AppResult},
    models::domain::{
        completion::{MCQ_OPTIONS, WRITTEN_OPTIONS},
        CompletionRequest, McqItem, WrittenQuestionItem,
    },
    services::{
        completion_client::CompletionClient,
        parsers::{parse_mcq, parse_written},
    },
};

pub const MAX_MCQ_QUESTIONS: u32 = 10;
pub const DEFAULT_MCQ_QUESTIONS: u32 = 5;
pub const MAX_WRITTEN_QUESTIONS: u32 = 5;
pub const DEFAULT_WRITTEN_QUESTIONS: u32 = 3;

pub struct QuizService {
    client: Arc<dyn CompletionClient>,
}

impl QuizService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generates multiple-choice questions. Malformed blocks are dropped, so
    /// fewer than `question_count` items is a normal outcome.
    pub async fn generate_mcq(&self, topic: &str, question_count: u32) -> AppResult<Vec<McqItem>> {
        let question_count = question_count.clamp(1, MAX_MCQ_QUESTIONS);
        let request = CompletionRequest::new(mcq_prompt(topic, question_count), MCQ_OPTIONS);

        log::info!("Generating {} MCQs on '{}'", question_count, topic);
        let text = self
            .client
            .complete(request)
            .await
            .map_err(|e| AppError::completion("Failed to generate MCQs", e))?;

        let questions = parse_mcq(&text);
        if questions.len() < question_count as usize {
            log::warn!(
                "Requested {} MCQs on '{}' but parsed {}",
                question_count,
                topic,
                questions.len()
            );
        }

        Ok(questions)
    }

    pub async fn generate_written(
        &self,
        topic: &str,
        question_count: u32,
        difficulty: Option<&str>,
        categories: Option<&str>,
    ) -> AppResult<Vec<WrittenQuestionItem>> {
        let question_count = question_count.clamp(1, MAX_WRITTEN_QUESTIONS);
        let difficulty = difficulty
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DIFFICULTY);
        let categories = categories.map(str::trim).filter(|c| !c.is_empty());

        let request = CompletionRequest::new(
            written_prompt(topic, question_count, difficulty, categories),
            WRITTEN_OPTIONS,
        );

        log::info!("Generating {} written questions on '{}'", question_count, topic);
        let text = self
            .client
            .complete(request)
            .await
            .map_err(|e| AppError::completion("Failed to generate questions", e))?;

        Ok(parse_written(&text, categories, difficulty))
    }
}
