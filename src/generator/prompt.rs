use crate::story::{IMAGE_INTERVAL, QUIZ_OPTION_COUNT};

/// Build the instruction that turns a lesson into a story
pub fn build_prompt(lesson: &str, universe: &str, paragraphs: usize) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Rewrite the lesson below as an engaging story set in the universe of {}.\n",
        universe
    ));
    prompt.push_str("Every fact taught by the lesson must appear in the story.\n\n");

    prompt.push_str("## Rules\n\n");
    prompt.push_str(&format!("- Write exactly {} paragraphs.\n", paragraphs));
    prompt.push_str(&format!(
        "- Paragraphs whose 0-based index is a multiple of {} (0, {}, {}, ...) have an \
         `imagePrompt` describing one vivid scene from that paragraph. All other \
         paragraphs have `\"imagePrompt\": null`.\n",
        IMAGE_INTERVAL,
        IMAGE_INTERVAL,
        IMAGE_INTERVAL * 2
    ));
    prompt.push_str(&format!(
        "- Every paragraph has a `quiz` testing the lesson content it covers, with \
         exactly {} `options`; `answer` must be copied verbatim from `options`.\n",
        QUIZ_OPTION_COUNT
    ));
    prompt.push_str("- Respond with JSON only, no commentary.\n\n");

    prompt.push_str("## Output format\n\n");
    prompt.push_str("```json\n");
    prompt.push_str(
        r#"{
  "title": "Story title",
  "paragraphs": [
    {
      "text": "Paragraph text",
      "imagePrompt": "Scene description or null",
      "quiz": {
        "question": "Question text",
        "options": ["A", "B", "C", "D", "E"],
        "answer": "B"
      }
    }
  ]
}"#,
    );
    prompt.push_str("\n```\n\n");

    prompt.push_str("## Lesson\n\n");
    prompt.push_str(lesson.trim());
    prompt.push('\n');

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_inputs_and_rules() {
        let prompt = build_prompt("  Photosynthesis turns light into sugar.  ", "Star Wars", 6);

        assert!(prompt.contains("universe of Star Wars"));
        assert!(prompt.contains("exactly 6 paragraphs"));
        assert!(prompt.contains("multiple of 3 (0, 3, 6, ...)"));
        assert!(prompt.contains("exactly 5 `options`"));
        assert!(prompt.ends_with("## Lesson\n\nPhotosynthesis turns light into sugar.\n"));
    }
}
