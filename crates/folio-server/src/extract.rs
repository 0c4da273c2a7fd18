//! Recovering the result JSON from the upstream reply.
//!
//! The service is instructed to answer with bare JSON, but replies sometimes
//! arrive wrapped in prose. The fallback scans for the first balanced
//! `{...}` object, tracking string literals and escapes so braces inside
//! strings don't end the scan early.

use crate::style_check::StyleCheckResult;

/// Parse the upstream text into the result contract: strict parse first,
/// balanced-object fallback second, `None` when neither works.
pub fn parse_result(raw: &str) -> Option<StyleCheckResult> {
    if let Ok(result) = serde_json::from_str(raw) {
        return Some(result);
    }

    let candidate = first_balanced_object(raw)?;
    serde_json::from_str(candidate).ok()
}

fn first_balanced_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + 1]);
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

    #[test]
    fn parses_bare_json() {
        let result =
            parse_result(r#"{"revised":"Save changes","changes":[],"summary":"ok"}"#).unwrap();

        assert_eq!(result.revised, "Save changes");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn recovers_json_wrapped_in_prose() {
        let raw = r#"Sure! {"revised":"x","changes":[],"summary":"ok"} Hope that helps."#;

        let result = parse_result(raw).unwrap();

        assert_eq!(result.revised, "x");
        assert_eq!(result.summary, "ok");
    }

    #[test]
    fn braces_inside_strings_do_not_end_the_scan() {
        let raw = r#"Here: {"revised":"use {placeholder} tokens","changes":[],"summary":"a } in prose"}"#;

        let result = parse_result(raw).unwrap();

        assert_eq!(result.revised, "use {placeholder} tokens");
        assert_eq!(result.summary, "a } in prose");
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let raw = r#"{"revised":"say \"hi\"","changes":[],"summary":"quoted"}"#;

        assert_eq!(parse_result(raw).unwrap().revised, "say \"hi\"");
    }

    #[test]
    fn rejects_text_without_a_complete_object() {
        assert!(parse_result("no json here").is_none());
        assert!(parse_result(r#"{"revised":"truncated"#).is_none());
        assert!(parse_result(r#"{"unrelated":"shape"}"#).is_none());
    }
}
