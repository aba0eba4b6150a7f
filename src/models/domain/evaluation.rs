use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_SUGGESTIONS: usize = 3;
pub const NEUTRAL_SCORE: i64 = 50;
pub const DEFAULT_COMMENTS: &str = "No specific feedback available.";
pub const DEFAULT_SUGGESTIONS: [&str; 2] = [
    "Review your answer for completeness.",
    "Check that you've addressed all parts of the question.",
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluationItem {
    pub score: i64, // 0..=100
    pub comments: String,
    pub suggestions: Vec<String>, // at most MAX_SUGGESTIONS
}

impl EvaluationItem {
    pub fn no_answer() -> Self {
        Self::canned(0, "No answer provided.", "Please provide an answer.")
    }

    pub fn timed_out() -> Self {
        Self::canned(
            NEUTRAL_SCORE,
            "Evaluation timed out. Your answer has been recorded.",
            "The system was unable to complete the evaluation in time.",
        )
    }

    pub fn unparseable() -> Self {
        Self::canned(
            NEUTRAL_SCORE,
            "The evaluation could not be interpreted. Your answer has been recorded.",
            "Please check back later for a complete evaluation.",
        )
    }

    pub fn upstream_failed() -> Self {
        Self::canned(
            NEUTRAL_SCORE,
            "Error during evaluation. Your answer has been recorded.",
            "Please check back later for a complete evaluation.",
        )
    }

    fn canned(score: i64, comments: &str, suggestion: &str) -> Self {
        Self {
            score,
            comments: comments.to_string(),
            suggestions: vec![suggestion.to_string()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationMetrics {
    pub questions_evaluated: usize,
    pub highest_score: i64,
    pub lowest_score: i64,
    pub evaluation_timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationBatchResult {
    pub feedback: Vec<EvaluationItem>,
    pub overall_score: i64,
    pub metrics: EvaluationMetrics,
}

/// Aggregate over the finite scores of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSummary {
    pub overall_score: i64,
    pub questions_evaluated: usize,
    pub highest_score: i64,
    pub lowest_score: i64,
}

impl ScoreSummary {
    /// Non-finite scores are ignored. An empty set yields overall 50, highest 0 and lowest 100.
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        let valid: Vec<f64> = scores.into_iter().filter(|s| s.is_finite()).collect();

        let overall_score = if valid.is_empty() {
            NEUTRAL_SCORE
        } else {
            (valid.iter().sum::<f64>() / valid.len() as f64).round() as i64
        };

        Self {
            overall_score,
            questions_evaluated: valid.len(),
            highest_score: valid.iter().copied().fold(0.0, f64::max) as i64,
            lowest_score: valid.iter().copied().fold(100.0, f64::min) as i64,
        }
    }
}

impl EvaluationBatchResult {
    pub fn from_feedback(feedback: Vec<EvaluationItem>) -> Self {
        let summary = ScoreSummary::from_scores(feedback.iter().map(|item| item.score as f64));

        Self {
            feedback,
            overall_score: summary.overall_score,
            metrics: EvaluationMetrics {
                questions_evaluated: summary.questions_evaluated,
                highest_score: summary.highest_score,
                lowest_score: summary.lowest_score,
                evaluation_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}
