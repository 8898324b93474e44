use super::StoredStory;

/// Render a stored story as markdown for reading outside the app
pub fn render_markdown(stored: &StoredStory) -> String {
    let story = &stored.story;
    let mut content = String::new();

    let title = story.title.as_deref().unwrap_or("Untitled story");
    content.push_str(&format!("# {}\n\n", title));

    content.push_str("| Field | Value |\n");
    content.push_str("|-------|-------|\n");
    content.push_str(&format!("| ID | `{}` |\n", stored.id));
    content.push_str(&format!(
        "| Created | {} |\n",
        stored.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    content.push_str(&format!("| Universe | {} |\n", stored.universe));
    content.push_str(&format!("| Paragraphs | {} |\n", story.paragraphs.len()));

    let images = &stored.report.image_prompts;
    let quizzes = &stored.report.quizzes;
    content.push_str(&format!(
        "| Image prompts | {} kept, {} moved, {} synthesized, {} discarded |\n",
        images.assigned_from_original,
        images.reassigned,
        images.generated_fallbacks,
        images.discarded_extra_prompts
    ));
    content.push_str(&format!(
        "| Quizzes | {} found, {} added, {} fixed |\n",
        quizzes.quizzes_found, quizzes.quizzes_added, quizzes.quizzes_fixed
    ));
    content.push_str("\n---\n\n");

    for (index, paragraph) in story.paragraphs.iter().enumerate() {
        content.push_str(&format!("## {}\n\n", index + 1));
        content.push_str(&format!("{}\n\n", paragraph.text.trim()));

        if let Some(prompt) = &paragraph.image_prompt {
            content.push_str(&format!("> **Illustration:** {}\n\n", prompt));
        }

        if let Some(quiz) = &paragraph.quiz {
            content.push_str(&format!("**Quiz:** {}\n\n", quiz.question));
            for option in &quiz.options {
                let mark = if *option == quiz.answer { "x" } else { " " };
                content.push_str(&format!("- [{}] {}\n", mark, option));
            }
            content.push('\n');
        }
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::reconcile_story;
    use crate::story::{Paragraph, Story};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_render_marks_answer_and_illustration() {
        let mut story = Story::new(vec![
            Paragraph::new("The fox ran.").with_image_prompt("a red fox"),
            Paragraph::new("It hid."),
        ]);
        let report = reconcile_story(&mut story, "Forest");
        let stored = StoredStory {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            universe: "Forest".to_string(),
            lesson_digest: "abc".to_string(),
            story,
            report,
        };

        let md = render_markdown(&stored);
        assert!(md.starts_with("# Untitled story\n"));
        assert!(md.contains("> **Illustration:** a red fox"));
        assert!(md.contains("- [x] Option A"));
        assert!(md.contains("- [ ] Option E"));
        assert!(md.contains("| Quizzes | 0 found, 2 added, 0 fixed |"));
        assert!(md.contains("## 2\n\nIt hid."));
    }
}
