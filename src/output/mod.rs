//! Persistence of finished stories
//!
//! Each story is written as `<id>.json` (the document other services read)
//! and `<id>.md` (for humans) under the configured output directory.

mod render;

pub use render::render_markdown;

use crate::error::StoreError;
use crate::reconcile::ReconcileReport;
use crate::story::Story;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStory {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub universe: String,
    /// Identifies the lesson a story was made from without storing it
    pub lesson_digest: String,
    pub story: Story,
    pub report: ReconcileReport,
}

impl StoredStory {
    pub fn new(lesson: &str, universe: &str, story: Story, report: ReconcileReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            universe: universe.to_string(),
            lesson_digest: lesson_digest(lesson),
            story,
            report,
        }
    }
}

/// Short stable hash of lesson text
pub fn lesson_digest(lesson: &str) -> String {
    let hash = Sha256::digest(lesson.trim().as_bytes());
    format!("{:x}", hash)[..16].to_string()
}

pub struct StoryStore {
    dir: PathBuf,
}

impl StoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the JSON document and its markdown rendering; returns the JSON path
    pub fn save(&self, stored: &StoredStory) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(StoreError::CreateDir)?;

        let json_path = self.json_path(&stored.id);
        let json = serde_json::to_string_pretty(stored)?;
        fs::write(&json_path, json).map_err(StoreError::Write)?;

        let md_path = self.dir.join(format!("{}.md", stored.id));
        fs::write(&md_path, render_markdown(stored)).map_err(StoreError::Write)?;

        info!("Saved story {} to {:?}", stored.id, json_path);
        Ok(json_path)
    }

    /// Load a story by id. Anything that is not a UUID cannot name a stored
    /// story and is reported as not found.
    pub fn load(&self, id: &str) -> Result<StoredStory, StoreError> {
        let uuid = Uuid::parse_str(id.trim()).map_err(|_| StoreError::NotFound(id.to_string()))?;
        let path = self.json_path(&uuid);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let content = fs::read_to_string(&path).map_err(|e| StoreError::Read {
            id: id.to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn json_path(&self, id: &Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}
