use crate::story::{Paragraph, Quiz};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_QUESTION: &str = "What is the main idea of this part of the story?";

pub const PLACEHOLDER_OPTIONS: [&str; 5] =
    ["Option A", "Option B", "Option C", "Option D", "Option E"];

/// Outcome of one quiz pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub total_paragraphs: usize,
    pub quizzes_found: usize,
    pub quizzes_added: usize,
    pub quizzes_fixed: usize,
}

/// Give every paragraph a well-formed quiz.
///
/// Missing quizzes get a placeholder. Malformed ones are repaired field by
/// field so a good question survives a bad option list and vice versa.
pub fn reconcile_quizzes(paragraphs: &mut [Paragraph]) -> QuizSummary {
    let mut summary = QuizSummary {
        total_paragraphs: paragraphs.len(),
        ..Default::default()
    };

    for (index, paragraph) in paragraphs.iter_mut().enumerate() {
        match paragraph.quiz.as_mut() {
            None => {
                paragraph.quiz = Some(placeholder_quiz());
                summary.quizzes_added += 1;
            }
            Some(quiz) => {
                summary.quizzes_found += 1;
                if !quiz.is_well_formed() {
                    debug!("Repairing quiz on paragraph {}", index);
                    repair(quiz);
                    summary.quizzes_fixed += 1;
                }
            }
        }
    }

    summary
}

pub fn placeholder_quiz() -> Quiz {
    Quiz::new(DEFAULT_QUESTION, PLACEHOLDER_OPTIONS, PLACEHOLDER_OPTIONS[0])
}

fn repair(quiz: &mut Quiz) {
    if !quiz.has_question() {
        quiz.question = DEFAULT_QUESTION.to_string();
    }
    if !quiz.has_valid_options() {
        quiz.options = PLACEHOLDER_OPTIONS.iter().map(|s| s.to_string()).collect();
    }
    if !quiz.has_valid_answer() {
        quiz.answer = quiz.options[0].clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Vec<&'static str> {
        vec!["red", "green", "blue", "cyan", "pink"]
    }

    #[test]
    fn test_empty_sequence() {
        let summary = reconcile_quizzes(&mut []);
        assert_eq!(summary, QuizSummary::default());
    }

    #[test]
    fn test_missing_quizzes_added() {
        let mut ps = vec![Paragraph::new("a"), Paragraph::new("b")];
        let summary = reconcile_quizzes(&mut ps);

        assert_eq!(summary.total_paragraphs, 2);
        assert_eq!(summary.quizzes_added, 2);
        assert_eq!(summary.quizzes_found, 0);
        assert_eq!(ps[0].quiz, Some(placeholder_quiz()));
        assert_eq!(ps[0].quiz.as_ref().unwrap().answer, "Option A");
    }

    #[test]
    fn test_valid_quiz_untouched() {
        let quiz = Quiz::new("Which colour?", five(), "blue");
        let mut ps = vec![Paragraph::new("a").with_quiz(quiz.clone())];
        let summary = reconcile_quizzes(&mut ps);

        assert_eq!(summary.quizzes_found, 1);
        assert_eq!(summary.quizzes_fixed, 0);
        assert_eq!(ps[0].quiz, Some(quiz));
    }

    #[test]
    fn test_short_options_and_bad_answer() {
        let mut ps = vec![
            Paragraph::new("zero"),
            Paragraph::new("one").with_quiz(Quiz::new("Who won?", ["x", "y", "z"], "w")),
            Paragraph::new("two"),
        ];
        let summary = reconcile_quizzes(&mut ps);

        let quiz = ps[1].quiz.as_ref().unwrap();
        assert_eq!(quiz.question, "Who won?");
        assert_eq!(quiz.options, PLACEHOLDER_OPTIONS.to_vec());
        assert_eq!(quiz.answer, "Option A");
        assert_eq!(summary.quizzes_fixed, 1);
        assert_eq!(summary.quizzes_found, 1);
        assert_eq!(summary.quizzes_added, 2);
    }

    #[test]
    fn test_empty_question_only_replaces_question() {
        let mut ps = vec![Paragraph::new("a").with_quiz(Quiz::new("  ", five(), "pink"))];
        reconcile_quizzes(&mut ps);

        let quiz = ps[0].quiz.as_ref().unwrap();
        assert_eq!(quiz.question, DEFAULT_QUESTION);
        assert_eq!(quiz.options, five());
        assert_eq!(quiz.answer, "pink");
    }

    #[test]
    fn test_answer_outside_options_becomes_first_option() {
        let mut ps = vec![Paragraph::new("a").with_quiz(Quiz::new("Q?", five(), "Blue"))];
        reconcile_quizzes(&mut ps);
        assert_eq!(ps[0].quiz.as_ref().unwrap().answer, "red");
    }

    #[test]
    fn test_answer_kept_when_it_matches_substituted_options() {
        let mut ps = vec![Paragraph::new("a").with_quiz(Quiz::new("Q?", ["Option C"], "Option C"))];
        reconcile_quizzes(&mut ps);

        let quiz = ps[0].quiz.as_ref().unwrap();
        assert_eq!(quiz.options.len(), 5);
        assert_eq!(quiz.answer, "Option C");
    }

    #[test]
    fn test_second_pass_finds_everything_valid() {
        let mut ps = vec![
            Paragraph::new("a"),
            Paragraph::new("b").with_quiz(Quiz::new("", Vec::<String>::new(), "")),
        ];
        reconcile_quizzes(&mut ps);
        let second = reconcile_quizzes(&mut ps);

        assert_eq!(second.quizzes_found, 2);
        assert_eq!(second.quizzes_added + second.quizzes_fixed, 0);
    }
}
