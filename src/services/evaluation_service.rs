use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use serde_json::Value;

use crate::{
    constants::{prompts::evaluation_prompt, response_format::DEFAULT_DIFFICULTY},
    errors::{AppError, AppResult},
    models::domain::{
        completion::EVALUATION_OPTIONS,
        evaluation::{DEFAULT_COMMENTS, DEFAULT_SUGGESTIONS, MAX_SUGGESTIONS, NEUTRAL_SCORE},
        CompletionRequest, EvaluationBatchResult, EvaluationItem,
    },
    services::{
        completion_client::{CompletionClient, CompletionError},
        parsers::extract_first_json_object,
    },
};

const DEFAULT_TOPIC: &str = "subject";

/// Grades written answers by asking the completion service for a JSON verdict per answer.
pub struct EvaluationService {
    client: Arc<dyn CompletionClient>,
    item_timeout: Duration,
    max_evaluations: usize,
}

impl EvaluationService {
    pub fn new(client: Arc<dyn CompletionClient>, item_timeout: Duration, max_evaluations: usize) -> Self {
        Self {
            client,
            item_timeout,
            max_evaluations,
        }
    }

    /// Evaluates up to `max_evaluations` question/answer pairs concurrently.
    ///
    /// Each pair either yields a parsed verdict or a canned fallback, so the
    /// feedback always has `min(len, max_evaluations)` entries in input order.
    pub async fn evaluate_batch(
        &self,
        questions: &[String],
        answers: &[String],
        topic: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<EvaluationBatchResult> {
        if questions.len() != answers.len() {
            return Err(AppError::InvalidInput {
                message: "Invalid request data".to_string(),
                details: Some(format!(
                    "received {} questions but {} answers",
                    questions.len(),
                    answers.len()
                )),
            });
        }

        let topic = non_blank(topic).unwrap_or(DEFAULT_TOPIC);
        let difficulty = non_blank(difficulty).unwrap_or(DEFAULT_DIFFICULTY);

        if questions.len() > self.max_evaluations {
            log::info!(
                "Evaluating the first {} of {} answers",
                self.max_evaluations,
                questions.len()
            );
        }

        let evaluations = questions
            .iter()
            .zip(answers)
            .take(self.max_evaluations)
            .enumerate()
            .map(|(index, (question, answer))| {
                self.evaluate_item(index, question, answer, topic, difficulty)
            });

        let feedback = join_all(evaluations).await;

        Ok(EvaluationBatchResult::from_feedback(feedback))
    }

    async fn evaluate_item(
        &self,
        index: usize,
        question: &str,
        answer: &str,
        topic: &str,
        difficulty: &str,
    ) -> EvaluationItem {
        let answer = answer.trim();
        if answer.is_empty() {
            return EvaluationItem::no_answer();
        }

        let request = CompletionRequest::new(
            evaluation_prompt(topic, difficulty, question, answer),
            EVALUATION_OPTIONS,
        );

        // Dropping the timed-out future aborts its in-flight HTTP request.
        match tokio::time::timeout(self.item_timeout, self.client.complete(request)).await {
            Err(_) | Ok(Err(CompletionError::UpstreamTimeout { .. })) => {
                log::warn!("Evaluation {} timed out", index + 1);
                EvaluationItem::timed_out()
            }
            Ok(Err(e)) => {
                log::warn!("Evaluation {} failed: {}", index + 1, e);
                EvaluationItem::upstream_failed()
            }
            Ok(Ok(text)) => parse_evaluation(&text).unwrap_or_else(|| {
                log::warn!("Evaluation {} returned no usable JSON", index + 1);
                EvaluationItem::unparseable()
            }),
        }
    }
}

/// Reads a model verdict, normalizing every field to the contract of [`EvaluationItem`].
pub fn parse_evaluation(text: &str) -> Option<EvaluationItem> {
    let verdict = extract_first_json_object(text)?;

    let score = verdict
        .get("score")
        .and_then(score_value)
        .unwrap_or(NEUTRAL_SCORE as f64)
        .round()
        .clamp(0.0, 100.0) as i64;

    let comments = verdict
        .get("comments")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COMMENTS)
        .to_string();

    let suggestions = match verdict.get("suggestions") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .take(MAX_SUGGESTIONS)
            .map(str::to_string)
            .collect(),
        _ => DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    };

    Some(EvaluationItem {
        score,
        comments,
        suggestions,
    })
}

fn score_value(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    };
    score.filter(|s: &f64| s.is_finite())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::completion_client::MockCompletionClient;
    use async_trait::async_trait;
    use std::time::Instant;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn service(client: impl CompletionClient + 'static) -> EvaluationService {
        EvaluationService::new(Arc::new(client), Duration::from_secs(15), 5)
    }

    /// Answers every prompt after a fixed delay.
    struct SlowClient {
        delay: Duration,
        reply: &'static str,
    }

    #[async_trait]
    impl CompletionClient for SlowClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            tokio::time::sleep(self.delay).await;
            Ok(self.reply.to_string())
        }
    }

    #[test]
    fn parse_evaluation_clamps_and_rounds_score() {
        assert_eq!(parse_evaluation(r#"{"score": 150}"#).unwrap().score, 100);
        assert_eq!(parse_evaluation(r#"{"score": -20}"#).unwrap().score, 0);
        assert_eq!(parse_evaluation(r#"{"score": 72.6}"#).unwrap().score, 73);
        assert_eq!(parse_evaluation(r#"{"score": "85"}"#).unwrap().score, 85);
    }

    #[test]
    fn parse_evaluation_defaults_missing_fields() {
        let item = parse_evaluation("Verdict: {}").unwrap();

        assert_eq!(item.score, 50);
        assert_eq!(item.comments, DEFAULT_COMMENTS);
        assert_eq!(item.suggestions, strings(&DEFAULT_SUGGESTIONS));
    }

    #[test]
    fn parse_evaluation_handles_non_numeric_score_and_non_list_suggestions() {
        let item =
            parse_evaluation(r#"{"score": "excellent", "comments": "", "suggestions": "be clearer"}"#)
                .unwrap();

        assert_eq!(item.score, 50);
        assert_eq!(item.comments, DEFAULT_COMMENTS);
        assert_eq!(item.suggestions.len(), 2);
    }

    #[test]
    fn parse_evaluation_truncates_suggestions() {
        let item = parse_evaluation(
            r#"{"score": 64, "comments": "Decent", "suggestions": ["a", "b", "c", "d", "e"]}"#,
        )
        .unwrap();

        assert_eq!(item.comments, "Decent");
        assert_eq!(item.suggestions, strings(&["a", "b", "c"]));
    }

    #[test]
    fn parse_evaluation_rejects_text_without_json() {
        assert_eq!(parse_evaluation("I think this answer is quite good."), None);
    }

    #[tokio::test]
    async fn mismatched_lengths_are_invalid_input() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);

        let result = service(client)
            .evaluate_batch(&strings(&["q1", "q2", "q3"]), &strings(&["a1", "a2"]), None, None)
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn blank_answers_skip_the_completion_service() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);

        let result = service(client)
            .evaluate_batch(&strings(&["q1", "q2"]), &strings(&["", "   "]), None, None)
            .await
            .unwrap();

        assert_eq!(result.feedback, vec![EvaluationItem::no_answer(); 2]);
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.metrics.questions_evaluated, 2);
    }

    #[tokio::test]
    async fn evaluates_only_the_first_five_pairs() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(5)
            .returning(|_| Ok(r#"{"score": 90, "comments": "Great", "suggestions": []}"#.to_string()));

        let questions: Vec<String> = (1..=7).map(|i| format!("q{}", i)).collect();
        let answers: Vec<String> = (1..=7).map(|i| format!("a{}", i)).collect();

        let result = service(client)
            .evaluate_batch(&questions, &answers, Some("history"), Some("easy"))
            .await
            .unwrap();

        assert_eq!(result.feedback.len(), 5);
        assert_eq!(result.overall_score, 90);
        assert_eq!(result.metrics.highest_score, 90);
        assert_eq!(result.metrics.lowest_score, 90);
    }

    #[tokio::test]
    async fn failures_become_fallbacks_in_input_order() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(3).returning(|request| {
            if request.prompt_text.contains("first") {
                Ok("Sure! {\"score\": 80, \"comments\": \"Solid\"}".to_string())
            } else if request.prompt_text.contains("second") {
                Err(CompletionError::UpstreamError {
                    status: Some(500),
                    message: "boom".into(),
                })
            } else {
                Ok("no json at all".to_string())
            }
        });

        let result = service(client)
            .evaluate_batch(
                &strings(&["Q1", "Q2", "Q3", "Q4"]),
                &strings(&["first answer", "second answer", "third answer", ""]),
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.feedback.len(), 4);
        assert_eq!(result.feedback[0].score, 80);
        assert_eq!(result.feedback[0].comments, "Solid");
        assert_eq!(result.feedback[1], EvaluationItem::upstream_failed());
        assert_eq!(result.feedback[2], EvaluationItem::unparseable());
        assert_eq!(result.feedback[3], EvaluationItem::no_answer());
        assert_eq!(result.overall_score, 45);
        assert_eq!(result.metrics.highest_score, 80);
        assert_eq!(result.metrics.lowest_score, 0);
    }

    #[tokio::test]
    async fn transport_timeout_maps_to_timeout_fallback() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Err(CompletionError::UpstreamTimeout { after_secs: 30 }));

        let result = service(client)
            .evaluate_batch(&strings(&["q"]), &strings(&["a"]), None, None)
            .await
            .unwrap();

        assert_eq!(result.feedback, vec![EvaluationItem::timed_out()]);
    }

    #[tokio::test]
    async fn slow_items_time_out_individually() {
        let client = SlowClient {
            delay: Duration::from_secs(5),
            reply: r#"{"score": 100}"#,
        };
        let service = EvaluationService::new(Arc::new(client), Duration::from_millis(50), 5);

        let result = service
            .evaluate_batch(&strings(&["q1", "q2"]), &strings(&["a1", ""]), None, None)
            .await
            .unwrap();

        assert_eq!(result.feedback[0], EvaluationItem::timed_out());
        assert_eq!(result.feedback[1], EvaluationItem::no_answer());
    }

    #[tokio::test]
    async fn pairs_are_evaluated_concurrently() {
        let client = SlowClient {
            delay: Duration::from_millis(300),
            reply: r#"{"score": 70}"#,
        };
        let service = EvaluationService::new(Arc::new(client), Duration::from_secs(5), 5);

        let started = Instant::now();
        let result = service
            .evaluate_batch(
                &strings(&["q1", "q2", "q3", "q4", "q5"]),
                &strings(&["a1", "a2", "a3", "a4", "a5"]),
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.feedback.len(), 5);
        assert!(result.feedback.iter().all(|item| item.score == 70));
        assert!(started.elapsed() < Duration::from_millis(1200));
    }
}
