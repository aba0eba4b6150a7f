use serde_json::{Map, Value};

/// Finds the first JSON object embedded in free text.
///
/// Candidates are balanced `{...}` spans found by a depth scanner that ignores
/// braces inside string literals; the first candidate that parses as an object
/// wins. If none does, the greedy span from the first `{` to the last `}` is tried
/// as a last resort.
pub fn extract_first_json_object(text: &str) -> Option<Map<String, Value>> {
    let bytes = text.as_bytes();

    for (start, _) in text.match_indices('{') {
        if let Some(end) = balanced_end(bytes, start) {
            if let Ok(Value::Object(map)) = serde_json::from_str(&text[start..=end]) {
                return Some(map);
            }
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str(&text[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Index of the `}` closing the object opened at `start`, if the text balances.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(text: &str) -> Option<Value> {
        extract_first_json_object(text).map(Value::Object)
    }

    #[test]
    fn extracts_bare_object() {
        assert_eq!(
            extract(r#"{"score": 80, "comments": "good"}"#),
            Some(json!({"score": 80, "comments": "good"}))
        );
    }

    #[test]
    fn extracts_object_wrapped_in_prose_and_fences() {
        let text = "Here is my evaluation:\n```json\n{\"score\": 72, \"suggestions\": [\"more detail\"]}\n```\nHope this helps!";
        assert_eq!(
            extract(text),
            Some(json!({"score": 72, "suggestions": ["more detail"]}))
        );
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_the_scanner() {
        let text = r#"Result: {"score": 90, "comments": "Use {braces} wisely }"} and {"other": 1}"#;
        assert_eq!(
            extract(text),
            Some(json!({"score": 90, "comments": "Use {braces} wisely }"}))
        );
    }

    #[test]
    fn nested_objects_are_kept_whole() {
        let text = r#"{"score": 60, "detail": {"clarity": 3}} trailing {"score": 1}"#;
        assert_eq!(
            extract(text),
            Some(json!({"score": 60, "detail": {"clarity": 3}}))
        );
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let text = r#"{"comments": "She said \"{hi}\"", "score": 55}"#;
        assert_eq!(
            extract(text),
            Some(json!({"comments": "She said \"{hi}\"", "score": 55}))
        );
    }

    #[test]
    fn skips_unparseable_candidate_and_takes_next() {
        let text = r#"{not json} then {"score": 40}"#;
        assert_eq!(extract(text), Some(json!({"score": 40})));
    }

    #[test]
    fn returns_none_without_object() {
        assert_eq!(extract("no json here"), None);
        assert_eq!(extract("} backwards {"), None);
        assert_eq!(extract(r#"{"unterminated": "#), None);
        assert_eq!(extract("[1, 2, 3]"), None);
    }
}
