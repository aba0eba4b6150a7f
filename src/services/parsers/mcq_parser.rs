use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{
    constants::response_format::{
        CHOICES_PER_QUESTION, CHOICE_LINE, CODE_FENCE, CORRECT_ANSWER_LINE, DEFAULT_DIFFICULTY,
        EXPLANATION_CUE, MCQ_BLOCK_MARKER, MIN_MCQ_BLOCK_LINES,
    },
    models::domain::{ChoiceLabel, CodeSnippet, McqItem},
};

static BLOCK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(MCQ_BLOCK_MARKER).expect("MCQ_BLOCK_MARKER is a valid regex pattern"));
static CHOICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CHOICE_LINE).expect("CHOICE_LINE is a valid regex pattern"));
static CORRECT_ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(CORRECT_ANSWER_LINE).expect("CORRECT_ANSWER_LINE is a valid regex pattern")
});
static EXPLANATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(EXPLANATION_CUE).expect("EXPLANATION_CUE is a valid regex pattern"));
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CODE_FENCE).expect("CODE_FENCE is a valid regex pattern"));

/// Why a block could not become an [`McqItem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDefect {
    #[error("block has {0} non-empty lines, too few for a question")]
    TooFewLines(usize),

    #[error("block has no labeled answer choices")]
    NoChoices,

    #[error("block has no question text before its choices")]
    EmptyQuestion,

    #[error("block has {0} answer choices instead of 4")]
    IncompleteChoices(usize),

    #[error("block has no resolvable correct answer")]
    MissingCorrectAnswer,
}

/// Fenced code pulled out of a block before line-based parsing.
struct ExtractedCode {
    text: String,
    snippets: Vec<CodeSnippet>,
}

impl ExtractedCode {
    fn placeholder(index: usize) -> String {
        format!("__CODE_BLOCK_{}__", index)
    }

    fn from_block(block: &str) -> Self {
        let mut snippets = Vec::new();
        let text = FENCE
            .replace_all(block, |caps: &regex::Captures| {
                snippets.push(CodeSnippet {
                    language: caps[1].to_string(),
                    code: caps[2].trim_end().to_string(),
                });
                Self::placeholder(snippets.len() - 1)
            })
            .into_owned();

        Self { text, snippets }
    }

    fn restore(&self, text: &str) -> String {
        self.snippets
            .iter()
            .enumerate()
            .fold(text.to_string(), |acc, (i, snippet)| {
                acc.replace(&Self::placeholder(i), &snippet.to_fence())
            })
    }
}

/// Parses a completion into multiple-choice questions, skipping any block that
/// does not follow the expected format.
pub fn parse_mcq(raw_text: &str) -> Vec<McqItem> {
    let mut items = Vec::new();

    for (index, block) in split_blocks(raw_text).enumerate() {
        match parse_block(block) {
            Ok(item) => items.push(item),
            Err(defect) => log::warn!("Skipping MCQ block {}: {}", index + 1, defect),
        }
    }

    log::debug!("Parsed {} MCQ items", items.len());
    items
}

fn split_blocks(raw_text: &str) -> impl Iterator<Item = &str> {
    BLOCK_MARKER
        .split(raw_text)
        .filter(|block| !block.trim().is_empty())
}

pub fn parse_block(block: &str) -> Result<McqItem, ParseDefect> {
    let raw_lines = block.lines().filter(|l| !l.trim().is_empty()).count();
    if raw_lines < MIN_MCQ_BLOCK_LINES {
        return Err(ParseDefect::TooFewLines(raw_lines));
    }

    let extracted = ExtractedCode::from_block(block);
    let lines: Vec<&str> = extracted
        .text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let first_choice = lines
        .iter()
        .position(|l| CHOICE.is_match(l))
        .ok_or(ParseDefect::NoChoices)?;

    let question_text = lines[..first_choice].join("\n");
    if question_text.is_empty() {
        return Err(ParseDefect::EmptyQuestion);
    }

    let choices: [String; CHOICES_PER_QUESTION] = lines[first_choice..]
        .iter()
        .filter(|l| CHOICE.is_match(l))
        .take(CHOICES_PER_QUESTION)
        .map(|l| extracted.restore(l))
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|v: Vec<String>| ParseDefect::IncompleteChoices(v.len()))?;

    let correct_answer = lines
        .iter()
        .find_map(|l| CORRECT_ANSWER.captures(l))
        .and_then(|caps| caps[1].chars().next())
        .and_then(ChoiceLabel::from_letter)
        .ok_or(ParseDefect::MissingCorrectAnswer)?;

    // Runs from the first cue line to the end of the block, wherever the cue appears.
    let explanation = lines
        .iter()
        .position(|l| EXPLANATION.is_match(l))
        .map(|start| lines[start..].join(" "))
        .unwrap_or_default();

    Ok(McqItem {
        question_text: extracted.restore(&question_text).trim().to_string(),
        choices,
        correct_answer,
        explanation: extracted.restore(explanation.trim()),
        difficulty: DEFAULT_DIFFICULTY.to_string(),
        code_snippets: extracted.snippets,
    })
}
