use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::response_format::{CODE_FENCE, DEFAULT_CATEGORY, WRITTEN_BLOCK_MARKER},
    models::domain::WrittenQuestionItem,
};

static BLOCK_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(WRITTEN_BLOCK_MARKER).expect("WRITTEN_BLOCK_MARKER is a valid regex pattern")
});
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CODE_FENCE).expect("CODE_FENCE is a valid regex pattern"));

/// Splits a comma separated category list, falling back to the default category.
pub fn parse_categories(categories_csv: Option<&str>) -> Vec<String> {
    let categories: Vec<String> = categories_csv
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if categories.is_empty() {
        vec![DEFAULT_CATEGORY.to_string()]
    } else {
        categories
    }
}

/// Parses numbered open-ended questions, assigning categories round-robin in source order.
pub fn parse_written(
    raw_text: &str,
    categories_csv: Option<&str>,
    difficulty: &str,
) -> Vec<WrittenQuestionItem> {
    let categories = parse_categories(categories_csv);

    let blocks: Vec<&str> = split_blocks(raw_text)
        .filter(|block| !block.trim().is_empty())
        .collect();

    blocks
        .into_iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let question_text = FENCE.replace_all(block, "").trim().to_string();
            if question_text.is_empty() {
                log::debug!("Written block {} held only code; skipping", index + 1);
                return None;
            }

            Some(WrittenQuestionItem {
                question_text,
                category: categories[index % categories.len()].clone(),
                difficulty: difficulty.to_string(),
            })
        })
        .collect()
}

/// Splits at each numbering marker. Text before the first marker is a block of its own.
fn split_blocks(raw_text: &str) -> impl Iterator<Item = &str> {
    BLOCK_MARKER.split(raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn categories_default_to_fundamentals() {
        assert_eq!(parse_categories(None), vec!["Fundamentals"]);
        assert_eq!(parse_categories(Some(" , ")), vec!["Fundamentals"]);
        assert_eq!(
            parse_categories(Some(" Theory, Practice ,,Design")),
            vec!["Theory", "Practice", "Design"]
        );
    }

    #[test]
    fn assigns_categories_round_robin_in_order() {
        let items = parse_written(fixtures::WRITTEN_COMPLETION, Some("Theory, Practice"), "hard");

        assert_eq!(items.len(), 3);
        assert_eq!(
            items.iter().map(|i| i.category.as_str()).collect::<Vec<_>>(),
            vec!["Theory", "Practice", "Theory"]
        );
        assert!(items.iter().all(|i| i.difficulty == "hard"));
        assert!(items[0].question_text.starts_with("Explain the concept of ownership"));
        assert!(items[2].question_text.starts_with("Describe"));
    }

    #[test]
    fn accepts_parenthesis_numbering() {
        let items = parse_written("1) First question?\n2) Second question?", None, "medium");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].question_text, "First question?");
        assert_eq!(items[1].question_text, "Second question?");
        assert_eq!(items[1].category, "Fundamentals");
    }

    #[test]
    fn strips_code_fences() {
        let text = "1. Explain this pattern:\n```rust\nlet x = 5;\n```\nWhy is it useful?";
        let items = parse_written(text, None, "medium");

        assert_eq!(items.len(), 1);
        assert!(!items[0].question_text.contains("```"));
        assert!(!items[0].question_text.contains("let x"));
        assert!(items[0].question_text.contains("Why is it useful?"));
    }

    #[test]
    fn leading_text_is_the_first_block_in_the_rotation() {
        let text = "Here are your questions:\n1. What is a trait?\n2. What is a lifetime?";
        let items = parse_written(text, Some("X, Y"), "medium");

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].question_text, "Here are your questions:");
        assert_eq!(items[0].category, "X");
        assert_eq!(items[1].question_text, "What is a trait?");
        assert_eq!(items[1].category, "Y");
        assert_eq!(items[2].category, "X");
    }

    #[test]
    fn unnumbered_text_is_one_question() {
        let items = parse_written("Discuss the trade-offs of garbage collection.", None, "easy");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].question_text, "Discuss the trade-offs of garbage collection.");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_written("", None, "medium").is_empty());
        assert!(parse_written("  \n ", None, "medium").is_empty());
    }
}
