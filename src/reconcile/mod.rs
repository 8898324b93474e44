//! Layout enforcement for generated stories
//!
//! Models are asked to put an image prompt on every third paragraph and a
//! quiz on every paragraph, and often don't. Two passes repair the output:
//!
//! - [`reconcile_image_prompts`] owns `image_prompt` on every paragraph
//! - [`reconcile_quizzes`] owns `quiz` on every paragraph
//!
//! The passes touch disjoint fields, so they can run in either order. Both
//! are total: any input, including an empty story, leaves the layout valid.

mod images;
mod quizzes;

pub use images::{reconcile_image_prompts, ImagePromptSummary};
pub use quizzes::{reconcile_quizzes, QuizSummary};

use crate::story::Story;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Combined outcome of both passes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub image_prompts: ImagePromptSummary,
    pub quizzes: QuizSummary,
}

impl ReconcileReport {
    /// True when the model output already had the right layout
    pub fn is_clean(&self) -> bool {
        self.image_prompts.reassigned == 0
            && self.image_prompts.generated_fallbacks == 0
            && self.image_prompts.discarded_extra_prompts == 0
            && self.quizzes.quizzes_added == 0
            && self.quizzes.quizzes_fixed == 0
    }
}

/// Run both passes over a story
pub fn reconcile_story(story: &mut Story, universe: &str) -> ReconcileReport {
    let image_prompts = reconcile_image_prompts(&mut story.paragraphs, universe);
    let quizzes = reconcile_quizzes(&mut story.paragraphs);

    debug!(
        "Image prompts: {} kept, {} moved, {} synthesized, {} discarded",
        image_prompts.assigned_from_original,
        image_prompts.reassigned,
        image_prompts.generated_fallbacks,
        image_prompts.discarded_extra_prompts
    );
    debug!(
        "Quizzes: {} paragraphs, {} found, {} added, {} fixed",
        quizzes.total_paragraphs, quizzes.quizzes_found, quizzes.quizzes_added, quizzes.quizzes_fixed
    );

    if image_prompts.generated_fallbacks > 0 {
        warn!(
            "Model produced too few image prompts; synthesized {}",
            image_prompts.generated_fallbacks
        );
    }
    if image_prompts.discarded_extra_prompts > 0 {
        warn!(
            "Discarded {} surplus image prompts",
            image_prompts.discarded_extra_prompts
        );
    }
    if quizzes.quizzes_added + quizzes.quizzes_fixed > 0 {
        warn!(
            "Model quizzes incomplete: {} added, {} repaired",
            quizzes.quizzes_added, quizzes.quizzes_fixed
        );
    }

    ReconcileReport {
        image_prompts,
        quizzes,
    }
}
