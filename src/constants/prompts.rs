use crate::constants::response_format::DEFAULT_CATEGORY;

pub const SYSTEM_PROMPT: &str = "You are a helpful educational content generator.";

pub const CONNECTION_TEST_PROMPT: &str = "Hello! Please respond with a short greeting.";

const MCQ_FORMAT_RULES: &str = r#"## FORMAT

Every question MUST:
- Start on a new line with its number followed by a period, e.g. "1."
- Offer exactly 4 answer choices, each on its own line, labeled a), b), c) and d)
- State the answer key on its own line as "Correct Answer: x)"
- End with a line starting with "Explanation:" that justifies the correct answer
- Be separated from the next question by a blank line

## CODE

When a question involves code:
- Put the snippet in a fenced Markdown block with a language tag, e.g. ```javascript
- Place the snippet after the question text and before the answer choices
- Do not wrap the fence markers in quotes

## EXAMPLE

1. What does the following code output?

```javascript
console.log(2 + "2");
```

a) 4
b) 22
c) "22"
d) Error

Correct Answer: b)

Explanation: Adding a number to a string converts the number to a string and concatenates them."#;

const WRITTEN_FORMAT_RULES: &str = r#"## FORMAT

- Number every question ("1.", "2.", ...) at the start of its line
- Separate questions with a blank line
- Do not include code snippets, even when the topic is programming
- Include any context a student needs to answer

## EXAMPLE

1. Explain how closures capture variables in JavaScript and show how they can hide private state.

2. Compare REST and GraphQL APIs. When would you choose one over the other?"#;

pub fn mcq_prompt(topic: &str, question_count: u32) -> String {
    format!(
        "Generate {question_count} multiple-choice questions on the topic: {topic}.\n\n{MCQ_FORMAT_RULES}"
    )
}

pub fn written_prompt(
    topic: &str,
    question_count: u32,
    difficulty: &str,
    categories: Option<&str>,
) -> String {
    let categories = categories.unwrap_or(DEFAULT_CATEGORY);
    format!(
        "Generate {question_count} open-ended written questions on the topic: {topic}.\n\n\
         Difficulty level: {difficulty}\n\
         Question categories: {categories}\n\n\
         Each question should require explanation and analysis, focus on the listed categories \
         and suit the {difficulty} difficulty level.\n\n{WRITTEN_FORMAT_RULES}"
    )
}

pub fn evaluation_prompt(topic: &str, difficulty: &str, question: &str, answer: &str) -> String {
    format!(
        "Evaluate this {topic} answer ({difficulty} level).\n\
         Question: \"{question}\"\n\
         Answer: \"{answer}\"\n\n\
         Return only JSON: {{\"score\": [0-100], \"comments\": \"feedback\", \"suggestions\": [\"suggestion1\", \"suggestion2\"]}}"
    )
}

pub fn notes_prompt(subject: &str, level: &str, format: &str) -> String {
    format!(
        "Generate concise study notes on: {subject}.\n\n\
         Subject: {subject}\n\
         Level: {level}\n\
         Format: {format}\n\n\
         The notes should open with a short introduction, cover the key concepts with \
         definitions and examples, and close with a brief summary.\n\
         Organize them under Markdown headings (#, ## or ###) so each heading starts a section."
    )
}

pub fn roadmap_prompt(topic: &str, timeframe: &str, level: Option<&str>) -> String {
    let audience = level
        .map(|l| format!(" for {} level learners", l))
        .unwrap_or_default();
    format!(
        "Generate a learning roadmap for the topic: {topic} with a timeframe of {timeframe}{audience}.\n\
         Use a Markdown heading (##) for each phase of the roadmap."
    )
}

/// Builds the career-path prompt from `(question, answer)` pairs the caller already capped.
pub fn suggestions_prompt<'a>(responses: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let interests = responses
        .into_iter()
        .enumerate()
        .map(|(i, (question, answer))| format!("Question {}: {}\nAnswer: {}", i + 1, question, answer))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Based on the following student responses, suggest appropriate educational paths after high school, \
         including but not limited to engineering programs. Consider domains and careers that match the \
         student's interests and aptitudes.\n\n{interests}\n\n\
         Please provide:\n\
         1. Top 3 recommended educational paths with justification\n\
         2. Specific courses or majors within each path\n\
         3. Potential career outcomes for each path\n\
         4. Alternative options beyond traditional degree programs (if appropriate)\n\
         5. Skills the student should develop regardless of their chosen path"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcq_prompt_carries_topic_count_and_answer_key_convention() {
        let prompt = mcq_prompt("Rust ownership", 4);

        assert!(prompt.starts_with("Generate 4 multiple-choice questions on the topic: Rust ownership."));
        assert!(prompt.contains("Correct Answer: x)"));
        assert!(prompt.contains("a), b), c) and d)"));
    }

    #[test]
    fn written_prompt_defaults_categories() {
        let prompt = written_prompt("Databases", 2, "hard", None);

        assert!(prompt.contains("Question categories: Fundamentals"));
        assert!(prompt.contains("Difficulty level: hard"));
    }

    #[test]
    fn evaluation_prompt_embeds_question_and_answer() {
        let prompt = evaluation_prompt("physics", "easy", "What is inertia?", "Resistance to change");

        assert!(prompt.contains("Evaluate this physics answer (easy level)."));
        assert!(prompt.contains("Question: \"What is inertia?\""));
        assert!(prompt.contains("Answer: \"Resistance to change\""));
        assert!(prompt.contains("{\"score\": [0-100]"));
    }

    #[test]
    fn roadmap_prompt_mentions_level_only_when_given() {
        assert!(roadmap_prompt("Go", "3 months", Some("beginner")).contains("for beginner level learners"));
        assert!(!roadmap_prompt("Go", "3 months", None).contains("level learners"));
    }

    #[test]
    fn suggestions_prompt_numbers_responses() {
        let prompt = suggestions_prompt(vec![("Favourite subject?", "Maths"), ("Hobby?", "Robotics")]);

        assert!(prompt.contains("Question 1: Favourite subject?\nAnswer: Maths"));
        assert!(prompt.contains("Question 2: Hobby?\nAnswer: Robotics"));
    }
}
