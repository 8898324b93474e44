use super::{command_for, ProviderOutput, Runner};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

pub struct CodexRunner {
    pub binary: PathBuf,
    pub model: String,
}

#[async_trait]
impl Runner for CodexRunner {
    fn name(&self) -> &'static str {
        "codex_cli"
    }

    async fn execute(&self, prompt: &str, timeout: Duration) -> Result<ProviderOutput, ProviderError> {
        // Final assistant message lands here; stdout is a JSONL event stream
        let out_file = NamedTempFile::new().map_err(ProviderError::Io)?;

        let mut cmd = command_for(&self.binary);
        cmd.arg("exec")
            .arg("--model")
            .arg(&self.model)
            .arg("--json")
            .arg("--output-last-message")
            .arg(out_file.path())
            .arg("-");

        cmd.stdin(std::process::Stdio::piped());
        cmd.stdout(std::process::Stdio::piped());
        cmd.stderr(std::process::Stdio::piped());

        debug!("Invoking codex with {} byte prompt", prompt.len());
        let start = std::time::Instant::now();

        let mut child = cmd.spawn().map_err(ProviderError::Io)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(ProviderError::Io)?;
            stdin.shutdown().await.map_err(ProviderError::Io)?;
        }

        let output = tokio_timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| ProviderError::Timeout(timeout))?
            .map_err(ProviderError::Io)?;

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ProviderError::NonZeroExit {
                code: exit_code,
                stderr,
            });
        }

        let stdout = tokio::fs::read_to_string(out_file.path())
            .await
            .map_err(ProviderError::Io)?;

        Ok(ProviderOutput {
            stdout,
            stderr,
            duration: start.elapsed(),
            exit_code,
        })
    }
}
