use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WrittenQuestionItem {
    #[serde(rename = "question")]
    pub question_text: String,
    pub category: String,
    pub difficulty: String,
}
