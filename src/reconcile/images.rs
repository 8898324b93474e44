use crate::story::{image_indices, Paragraph};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Characters of paragraph text quoted in a synthesized prompt
const EXCERPT_CHARS: usize = 300;

const UNNAMED_UNIVERSE: &str = "an original story universe";

/// Outcome of one image-prompt pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagePromptSummary {
    pub expected_indices: Vec<usize>,
    pub assigned_from_original: usize,
    pub reassigned: usize,
    pub generated_fallbacks: usize,
    pub discarded_extra_prompts: usize,
}

/// A prompt lifted out of the story, remembering where the model put it
#[derive(Debug)]
struct PoolEntry {
    prompt: String,
    origin: usize,
}

/// Place image prompts on every third paragraph and nowhere else.
///
/// All prompts are first pulled into a FIFO pool. Each expected slot then
/// takes, in order of preference: the prompt the model put at that same
/// index, the oldest remaining pooled prompt, or a prompt synthesized from
/// the paragraph text and `universe`. Leftover pooled prompts are dropped.
pub fn reconcile_image_prompts(paragraphs: &mut [Paragraph], universe: &str) -> ImagePromptSummary {
    let expected = image_indices(paragraphs.len());
    let mut summary = ImagePromptSummary::default();

    let mut pool: VecDeque<PoolEntry> = paragraphs
        .iter_mut()
        .enumerate()
        .filter_map(|(origin, p)| {
            p.unusable_image_prompt = false;
            p.image_prompt.take().map(|prompt| PoolEntry { prompt, origin })
        })
        .collect();

    for &index in &expected {
        let paragraph = &mut paragraphs[index];

        if let Some(pos) = pool.iter().position(|e| e.origin == index) {
            if let Some(entry) = pool.remove(pos) {
                paragraph.image_prompt = Some(entry.prompt);
                summary.assigned_from_original += 1;
                continue;
            }
        }

        if let Some(entry) = pool.pop_front() {
            debug!("Moving image prompt from paragraph {} to {}", entry.origin, index);
            paragraph.image_prompt = Some(entry.prompt);
            summary.reassigned += 1;
            continue;
        }

        paragraph.image_prompt = Some(fallback_prompt(&paragraph.text, universe));
        summary.generated_fallbacks += 1;
    }

    summary.expected_indices = expected;
    summary.discarded_extra_prompts = pool.len();
    for entry in &pool {
        debug!("Discarding surplus image prompt from paragraph {}", entry.origin);
    }

    summary
}

/// Illustration prompt for a paragraph the model left without one
pub fn fallback_prompt(text: &str, universe: &str) -> String {
    let universe = match universe.trim() {
        "" => UNNAMED_UNIVERSE,
        name => name,
    };

    let mut excerpt: String = text.trim().chars().take(EXCERPT_CHARS).collect();
    if text.trim().chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }

    format!(
        "A cinematic illustration set in the world of {}, depicting the following scene: {}",
        universe, excerpt
    )
}
