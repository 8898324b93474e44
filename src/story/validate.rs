use super::{Paragraph, IMAGE_INTERVAL};
use serde::Serialize;
use std::fmt;

/// A place where a story breaks the image or quiz layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    MissingImagePrompt { index: usize },
    UnexpectedImagePrompt { index: usize },
    MissingQuiz { index: usize },
    MalformedQuiz { index: usize, reason: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingImagePrompt { index } => {
                write!(f, "paragraph {}: missing image prompt", index)
            }
            Violation::UnexpectedImagePrompt { index } => {
                write!(f, "paragraph {}: image prompt not allowed here", index)
            }
            Violation::MissingQuiz { index } => write!(f, "paragraph {}: missing quiz", index),
            Violation::MalformedQuiz { index, reason } => {
                write!(f, "paragraph {}: malformed quiz ({})", index, reason)
            }
        }
    }
}

/// List every layout violation in `paragraphs`, in index order
pub fn validate(paragraphs: &[Paragraph]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let wants_image = index % IMAGE_INTERVAL == 0;
        let has_image = paragraph
            .image_prompt
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty());

        if wants_image && !has_image {
            violations.push(Violation::MissingImagePrompt { index });
        } else if !wants_image
            && (paragraph.image_prompt.is_some() || paragraph.unusable_image_prompt)
        {
            violations.push(Violation::UnexpectedImagePrompt { index });
        }

        match &paragraph.quiz {
            None => violations.push(Violation::MissingQuiz { index }),
            Some(quiz) => {
                let mut problems = Vec::new();
                if !quiz.has_question() {
                    problems.push("empty question");
                }
                if !quiz.has_valid_options() {
                    problems.push("wrong option count");
                }
                if !quiz.has_valid_answer() {
                    problems.push("answer not among options");
                }
                if !problems.is_empty() {
                    violations.push(Violation::MalformedQuiz {
                        index,
                        reason: problems.join(", "),
                    });
                }
            }
        }
    }

    violations
}
