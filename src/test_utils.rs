#[cfg(test)]
pub mod fixtures {
    /// Three well-formed questions (answers b, a, d) after a chatty preamble,
    /// followed by one block with only three choices.
    pub const MCQ_COMPLETION: &str = r#"Sure! Here are your multiple-choice questions.

1. Which keyword moves a closure's captured variables into it?
a) ref
b) move
c) static
d) dyn
Correct Answer: b)
Explanation: move forces the closure to take ownership of what it captures.

2. What does the ? operator do on an Err value?
a) Returns the error early from the function
b) Panics with the error message
c) Converts it into None
d) Ignores it and continues
Correct Answer: a)
Explanation: The operator propagates the error to the caller after converting it with From.

3. Which trait allows a type to be duplicated with a simple bit copy?
a) Clone
b) Send
c) Sized
d) Copy
Correct Answer: d)
Explanation: Copy types are duplicated implicitly by copying their bits.

4. Which of these is not a primitive type?
a) u8
b) String
c) bool
Correct Answer: b)
Explanation: String is a heap-allocated collection type."#;

    pub const MCQ_WITH_CODE: &str = r#"1. What does the following code output?
```javascript
console.log(2 + "2");
```
a) 4
b) "22"
c) NaN
d) TypeError
Correct Answer: b)
Explanation: The number is coerced to a string before concatenation."#;

    /// Lines inside the fence look like answer choices.
    pub const MCQ_WITH_TRICKY_CODE: &str = r#"1. What does this snippet print?
```python
options = """
a) foo
b) bar
"""
print(options.count(")"))
```
a) 1
b) 2
c) 3
d) None
Correct Answer: b)
Explanation: The string holds two closing parentheses, one per labeled line."#;

    pub const WRITTEN_COMPLETION: &str = r#"1. Explain the concept of ownership in Rust and how it prevents use-after-free bugs.

2. Compare borrowing with reference counting. When would you reach for Rc<T> instead of a plain reference?

3. Describe how lifetimes let the compiler check that references stay valid, using a short example."#;

    pub const NOTES_COMPLETION: &str = r#"# Ownership in Rust

## Introduction
Every value has a single owner.

## Borrowing
References let you use a value without taking ownership.
- Shared references: `&T`
- Mutable references: `&mut T`

## Summary
Ownership and borrowing make memory safety a compile-time guarantee."#;

    /// A verdict as a model tends to return it: JSON wrapped in prose.
    pub fn evaluation_reply(score: i64, comments: &str) -> String {
        format!(
            "Here is my evaluation:\n{{\"score\": {}, \"comments\": \"{}\", \"suggestions\": [\"Add an example.\"]}}",
            score, comments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::{evaluation_service::parse_evaluation, parsers::parse_mcq};

    #[test]
    fn test_fixtures_mcq_completion_has_four_numbered_blocks() {
        assert_eq!(MCQ_COMPLETION.matches("Correct Answer:").count(), 4);
        assert_eq!(parse_mcq(MCQ_COMPLETION).len(), 3);
    }

    #[test]
    fn test_fixtures_evaluation_reply_parses() {
        let item = parse_evaluation(&evaluation_reply(82, "Clear and correct")).unwrap();
        assert_eq!(item.score, 82);
        assert_eq!(item.comments, "Clear and correct");
        assert_eq!(item.suggestions, vec!["Add an example."]);
    }
}
