use super::QUIZ_OPTION_COUNT;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of a generated story
///
/// Decoding is lenient: model output is not trusted to have the right shape,
/// so wrong-typed fields decode to "absent" and are repaired by the reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParagraph")]
pub struct Paragraph {
    pub text: String,

    #[serde(rename = "imagePrompt")]
    pub image_prompt: Option<String>,

    pub quiz: Option<Quiz>,

    /// Fields the model emitted that we do not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// The input carried an image prompt that was blank or not a string.
    /// Cleared once the image-prompt pass has run.
    #[serde(skip)]
    pub unusable_image_prompt: bool,
}

#[cfg(test)]
impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_prompt: None,
            quiz: None,
            extra: Map::new(),
            unusable_image_prompt: false,
        }
    }

    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(prompt.into());
        self
    }

    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = Some(quiz);
        self
    }
}

/// Multiple-choice question attached to a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Quiz {
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }

    pub fn has_valid_options(&self) -> bool {
        self.options.len() == QUIZ_OPTION_COUNT
    }

    /// The answer is non-empty and one of the options
    pub fn has_valid_answer(&self) -> bool {
        !self.answer.is_empty() && self.options.contains(&self.answer)
    }

    pub fn is_well_formed(&self) -> bool {
        self.has_question() && self.has_valid_options() && self.has_valid_answer()
    }

    /// Decode a quiz from arbitrary JSON.
    ///
    /// Anything that is not an object is no quiz at all. Inside an object,
    /// non-string `question`/`answer` become empty and an `options` value that
    /// is not an array of strings becomes an empty list.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        let text_field = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let options = match map.get("options") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        Some(Self {
            question: text_field("question"),
            options,
            answer: text_field("answer"),
        })
    }
}

/// Wire shape of a paragraph. Each alias is its own field so a paragraph
/// carrying both `text` and `content` decodes instead of failing.
#[derive(Deserialize)]
struct RawParagraph {
    #[serde(default)]
    text: Value,
    #[serde(default, rename = "bodyText")]
    body_text: Value,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    paragraph: Value,

    #[serde(default, rename = "imagePrompt")]
    image_prompt: Value,
    #[serde(default, rename = "image_prompt")]
    image_prompt_snake: Value,

    #[serde(default)]
    quiz: Value,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawParagraph> for Paragraph {
    fn from(raw: RawParagraph) -> Self {
        let texts = [raw.text, raw.body_text, raw.content, raw.paragraph];
        let text = match texts.iter().find(|v| v.is_string()) {
            Some(Value::String(s)) => s.clone(),
            _ => texts
                .iter()
                .find(|v| !v.is_null())
                .map(Value::to_string)
                .unwrap_or_default(),
        };

        let prompts = [raw.image_prompt, raw.image_prompt_snake];
        // Blank prompts carry nothing to illustrate
        let image_prompt = prompts.iter().find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        });
        let unusable_image_prompt = image_prompt.is_none() && prompts.iter().any(|v| !v.is_null());

        Self {
            text,
            image_prompt,
            quiz: Quiz::from_value(&raw.quiz),
            extra: raw.extra,
            unusable_image_prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_well_formed_paragraph() {
        let p: Paragraph = serde_json::from_value(json!({
            "text": "Once upon a time",
            "imagePrompt": "A castle at dawn",
            "quiz": {
                "question": "Where does it start?",
                "options": ["A", "B", "C", "D", "E"],
                "answer": "C"
            }
        }))
        .unwrap();

        assert_eq!(p.text, "Once upon a time");
        assert_eq!(p.image_prompt.as_deref(), Some("A castle at dawn"));
        let quiz = p.quiz.unwrap();
        assert_eq!(quiz.options.len(), 5);
        assert_eq!(quiz.answer, "C");
        assert!(p.extra.is_empty());
    }

    #[test]
    fn test_decode_wrong_types_as_absent() {
        let p: Paragraph = serde_json::from_value(json!({
            "bodyText": "Body",
            "imagePrompt": 42,
            "quiz": "not a quiz"
        }))
        .unwrap();

        assert_eq!(p.text, "Body");
        assert!(p.image_prompt.is_none());
        assert!(p.unusable_image_prompt);
        assert!(p.quiz.is_none());
    }

    #[test]
    fn test_decode_with_several_aliases_present() {
        let p: Paragraph = serde_json::from_value(json!({
            "content": "from content",
            "text": "from text",
            "imagePrompt": null,
            "image_prompt": "a lighthouse"
        }))
        .unwrap();

        assert_eq!(p.text, "from text");
        assert_eq!(p.image_prompt.as_deref(), Some("a lighthouse"));
        assert!(!p.unusable_image_prompt);
        assert!(p.extra.is_empty());

        let p: Paragraph =
            serde_json::from_value(json!({"text": 12, "paragraph": "words"})).unwrap();
        assert_eq!(p.text, "words");
    }

    #[test]
    fn test_blank_prompt_is_absent() {
        let p: Paragraph =
            serde_json::from_value(json!({"text": "t", "imagePrompt": "   "})).unwrap();
        assert!(p.image_prompt.is_none());
        assert!(p.unusable_image_prompt);
    }

    #[test]
    fn test_malformed_quiz_object_is_kept_for_repair() {
        let p: Paragraph = serde_json::from_value(json!({
            "text": "t",
            "quiz": {"question": 7, "options": ["A", 2, "C"], "answer": "A"}
        }))
        .unwrap();

        let quiz = p.quiz.unwrap();
        assert_eq!(quiz.question, "");
        assert!(quiz.options.is_empty());
        assert_eq!(quiz.answer, "A");
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let p: Paragraph =
            serde_json::from_value(json!({"text": "t", "mood": "tense"})).unwrap();
        assert_eq!(p.extra.get("mood"), Some(&json!("tense")));

        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out["mood"], json!("tense"));
        assert_eq!(out["imagePrompt"], Value::Null);
        assert_eq!(out["quiz"], Value::Null);
    }
}
