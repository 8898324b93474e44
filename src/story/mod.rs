mod paragraph;
mod parse;
mod validate;

pub use paragraph::{Paragraph, Quiz};
pub use parse::parse_story;
pub use validate::{validate, Violation};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Every paragraph whose index is a multiple of this carries an image prompt
pub const IMAGE_INTERVAL: usize = 3;

/// Number of options every quiz must offer
pub const QUIZ_OPTION_COUNT: usize = 5;

/// A generated story: an ordered sequence of paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(alias = "story")]
    pub paragraphs: Vec<Paragraph>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Story {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            title: None,
            paragraphs,
            extra: Map::new(),
        }
    }
}

/// Indices that must carry an image prompt in a sequence of `len` paragraphs
pub fn image_indices(len: usize) -> Vec<usize> {
    (0..len).step_by(IMAGE_INTERVAL).collect()
}
