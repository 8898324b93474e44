use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum StoryError {
    #[error("Failed to parse story JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No story JSON could be found in model output")]
    NotFound,

    #[error("Story has no paragraphs")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Execution timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Lesson text is empty")]
    EmptyLesson,

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Story error: {0}")]
    Story(#[from] StoryError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write story: {0}")]
    Write(std::io::Error),

    #[error("Failed to read story '{id}': {source}")]
    Read { id: String, source: std::io::Error },

    #[error("Story '{0}' not found")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
