use super::{Paragraph, Story};
use crate::error::StoryError;
use serde::Deserialize;
use serde_json::Value;

/// Parse a story from model output.
///
/// Accepts a story object, a bare paragraph array, the Claude CLI
/// `{"result": "..."}` envelope, and JSON buried in markdown or prose.
pub fn parse_story(raw: &str) -> Result<Story, StoryError> {
    #[derive(Deserialize)]
    struct ClaudeOutput {
        result: String,
    }

    if let Ok(claude_out) = serde_json::from_str::<ClaudeOutput>(raw) {
        return parse_story_json(&claude_out.result);
    }

    parse_story_json(raw)
}

fn parse_story_json(s: &str) -> Result<Story, StoryError> {
    let json_str = extract_json(s).ok_or(StoryError::NotFound)?;
    let value: Value = serde_json::from_str(&json_str)?;

    let story = match value {
        Value::Array(_) => Story::new(serde_json::from_value::<Vec<Paragraph>>(value)?),
        other => serde_json::from_value::<Story>(other)?,
    };

    if story.paragraphs.is_empty() {
        return Err(StoryError::Empty);
    }

    tracing::debug!("Parsed story with {} paragraphs", story.paragraphs.len());
    Ok(story)
}

/// Extract a JSON object or array from a string that might contain markdown
/// code blocks or surrounding prose
fn extract_json(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<Value>(trimmed).is_ok()
    {
        return Some(trimmed.to_string());
    }

    let re = regex::Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").ok()?;
    for cap in re.captures_iter(s) {
        let potential_json = cap.get(1)?.as_str().trim();
        if serde_json::from_str::<Value>(potential_json).is_ok() {
            return Some(potential_json.to_string());
        }
    }

    // Prose may contain its own brackets, so try every opening position
    for (start, _) in s.match_indices(&['{', '['][..]) {
        let Some(end) = balanced_end(&s[start..]) else {
            continue;
        };
        let potential_json = &s[start..start + end];
        if serde_json::from_str::<Value>(potential_json).is_ok_and(|v| looks_like_story(&v)) {
            return Some(potential_json.to_string());
        }
    }

    None
}

/// A story object or a list of paragraph objects, as opposed to a
/// bracketed aside like `[3 paragraphs]` or `[1, 2]`
fn looks_like_story(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty() && items.iter().all(Value::is_object),
        _ => false,
    }
}

/// Byte length of the bracketed value at the start of `s`, skipping
/// brackets inside string literals
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}
