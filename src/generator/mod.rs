//! Story generation: lesson text in, reconciled story out
//!
//! 1. Builds the story prompt from the lesson and universe
//! 2. Calls the configured model runner, retrying on transport or parse failure
//! 3. Reconciles the parsed story before anyone else sees it

mod prompt;
mod retry;

pub use prompt::build_prompt;
use retry::retry_with_backoff;

use crate::config::Config;
use crate::error::GenerateError;
use crate::provider::Runner;
use crate::reconcile::{reconcile_story, ReconcileReport};
use crate::story::{parse_story, Story};
use std::time::Duration;
use tracing::{debug, info};

/// What to turn into a story
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub lesson: String,
    pub universe: String,
    pub paragraphs: usize,
}

/// A reconciled story plus what reconciliation had to change
#[derive(Debug, Clone)]
pub struct GeneratedStory {
    pub story: Story,
    pub report: ReconcileReport,
}

pub async fn generate_story(
    config: &Config,
    runner: &dyn Runner,
    request: &GenerationRequest,
) -> Result<GeneratedStory, GenerateError> {
    if request.lesson.trim().is_empty() {
        return Err(GenerateError::EmptyLesson);
    }

    let prompt = build_prompt(&request.lesson, &request.universe, request.paragraphs);
    let timeout = Duration::from_secs(config.timeout_sec);

    info!(
        "Generating {} paragraph story in '{}' with {}",
        request.paragraphs,
        request.universe,
        runner.name()
    );

    let mut story = retry_with_backoff(&config.retry, || async {
        let output = runner.execute(&prompt, timeout).await?;
        debug!(
            "{} answered in {:.1}s (exit {}, {} bytes)",
            runner.name(),
            output.duration.as_secs_f64(),
            output.exit_code,
            output.stdout.len()
        );
        if !output.stderr.trim().is_empty() {
            debug!("{} stderr: {}", runner.name(), output.stderr.trim());
        }
        Ok::<Story, GenerateError>(parse_story(&output.stdout)?)
    })
    .await?;

    if story.paragraphs.len() != request.paragraphs {
        debug!(
            "Model wrote {} paragraphs, {} requested",
            story.paragraphs.len(),
            request.paragraphs
        );
    }

    let report = reconcile_story(&mut story, &request.universe);

    Ok(GeneratedStory { story, report })
}
