use serde::{Deserialize, Serialize};

use crate::constants::response_format::CHOICES_PER_QUESTION;

/// One of the four answer labels `a`..`d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(ChoiceLabel::A),
            'b' => Some(ChoiceLabel::B),
            'c' => Some(ChoiceLabel::C),
            'd' => Some(ChoiceLabel::D),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodeSnippet {
    pub language: String, // empty when the fence had no tag
    pub code: String,
}

impl CodeSnippet {
    /// Renders the snippet back into a Markdown fence. Untagged snippets keep an empty tag.
    pub fn to_fence(&self) -> String {
        format!("```{}\n{}\n```", self.language, self.code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McqItem {
    #[serde(rename = "question")]
    pub question_text: String,
    pub choices: [String; CHOICES_PER_QUESTION], // each starts with its "a)".."d)" label
    pub correct_answer: ChoiceLabel,
    pub explanation: String,
    pub difficulty: String,
    pub code_snippets: Vec<CodeSnippet>,
}
