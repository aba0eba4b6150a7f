use std::sync::Arc;

use crate::{
    constants::prompts::{notes_prompt, roadmap_prompt, suggestions_prompt, CONNECTION_TEST_PROMPT},
    errors::{AppError, AppResult},
    models::{
        domain::{
            completion::{CONNECTION_TEST_OPTIONS, NOTES_OPTIONS, ROADMAP_OPTIONS, SUGGESTIONS_OPTIONS},
            CompletionRequest, LearningRoadmap, NotesDocument,
        },
        dto::request::StudentResponse,
    },
    services::{
        completion_client::{CompletionClient, CompletionError},
        parsers::{parse_notes, sectionize},
    },
};

pub const DEFAULT_ROADMAP_LEVEL: &str = "general";
pub const MAX_SUGGESTION_RESPONSES: usize = 20;

/// Notes, roadmaps and career suggestions: free-form generation with light structuring.
pub struct StudyService {
    client: Arc<dyn CompletionClient>,
}

impl StudyService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate_notes(&self, subject: &str, level: &str, format: &str) -> AppResult<NotesDocument> {
        let request = CompletionRequest::new(notes_prompt(subject, level, format), NOTES_OPTIONS);

        log::info!("Generating {} notes on '{}'", level, subject);
        let text = self
            .complete(request, "Failed to generate notes")
            .await?;

        Ok(parse_notes(&text, subject, level))
    }

    pub async fn generate_roadmap(
        &self,
        topic: &str,
        timeframe: &str,
        level: Option<&str>,
    ) -> AppResult<LearningRoadmap> {
        let request = CompletionRequest::new(roadmap_prompt(topic, timeframe, level), ROADMAP_OPTIONS);

        log::info!("Generating a {} roadmap on '{}'", timeframe, topic);
        let roadmap = self
            .complete(request, "Error occurred while generating the roadmap")
            .await?;

        Ok(LearningRoadmap {
            topic: topic.to_string(),
            timeframe: timeframe.to_string(),
            level: level.unwrap_or(DEFAULT_ROADMAP_LEVEL).to_string(),
            sections: sectionize(&roadmap, topic),
            roadmap,
        })
    }

    /// Suggests educational paths from the first [`MAX_SUGGESTION_RESPONSES`] answers.
    pub async fn suggest_paths(&self, responses: &[StudentResponse]) -> AppResult<String> {
        if responses.len() > MAX_SUGGESTION_RESPONSES {
            log::debug!(
                "Using the first {} of {} student responses",
                MAX_SUGGESTION_RESPONSES,
                responses.len()
            );
        }

        let prompt = suggestions_prompt(
            responses
                .iter()
                .take(MAX_SUGGESTION_RESPONSES)
                .map(|r| (r.question.as_str(), r.answer.as_str())),
        );

        self.complete(
            CompletionRequest::new(prompt, SUGGESTIONS_OPTIONS),
            "Failed to process suggestions",
        )
        .await
    }

    pub async fn test_connection(&self) -> AppResult<String> {
        let request = CompletionRequest::new(CONNECTION_TEST_PROMPT, CONNECTION_TEST_OPTIONS);

        self.complete(request, "Failed to connect to the completion service")
            .await
    }

    async fn complete(&self, request: CompletionRequest, context: &str) -> AppResult<String> {
        log::debug!("Completion prompt: {}...", request.preview());
        self.client
            .complete(request)
            .await
            .map_err(|e: CompletionError| AppError::completion(context, e))
    }
}
