//! The textual convention the parsers expect from the completion service.
//!
//! Prompts in [`super::prompts`] instruct the model to emit exactly this shape,
//! and the parsers in `services::parsers` compile these patterns. Bump
//! [`RESPONSE_FORMAT_VERSION`] whenever either side changes so they stay in sync.

pub const RESPONSE_FORMAT_VERSION: u32 = 2;

/// Start of an MCQ block: `1.` or `Question 1:` at the start of a line.
pub const MCQ_BLOCK_MARKER: &str = r"(?i)(?:^|\n)(?:\d+\.|Question\s+\d+:)";

/// Start of a written-question block: `1.` or `1)` at the start of a line.
pub const WRITTEN_BLOCK_MARKER: &str = r"(?:^|\n)(?:\d+\.|\d+\))";

/// A labeled answer choice line, e.g. `b) 22`.
pub const CHOICE_LINE: &str = r"^[a-d]\)";

/// The answer key line, e.g. `Correct Answer: b)`.
pub const CORRECT_ANSWER_LINE: &str = r"(?i)Correct Answer:\s*([a-d])\)";

/// Words that open the explanation paragraph of an MCQ block.
pub const EXPLANATION_CUE: &str = r"(?i)explanation|reason|because";

/// A fenced code region with an optional language tag.
pub const CODE_FENCE: &str = r"```([^\s`]*)[ \t]*\r?\n?((?s:.*?))```";

/// A Markdown heading of depth 1 to 3.
pub const NOTES_HEADING: &str = r"(?m)^#{1,3}[ \t]+([^\n]+)";

pub const CHOICES_PER_QUESTION: usize = 4;

/// Blocks with fewer non-empty lines than this cannot hold a question, four choices and a key.
pub const MIN_MCQ_BLOCK_LINES: usize = 5;

pub const MAX_NOTE_SECTIONS: usize = 10;

pub const DEFAULT_CATEGORY: &str = "Fundamentals";

pub const DEFAULT_DIFFICULTY: &str = "medium";
