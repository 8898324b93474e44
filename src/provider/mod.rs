mod claude;
mod codex;

pub use claude::ClaudeRunner;
pub use codex::CodexRunner;

use crate::config::{Config, Provider};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;

#[derive(Debug)]
pub struct ProviderOutput {
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub exit_code: i32,
}

/// Something that turns a prompt into model output
#[async_trait]
pub trait Runner: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, prompt: &str, timeout: Duration) -> Result<ProviderOutput, ProviderError>;
}

/// Create a runner for the configured provider
pub fn create_runner(config: &Config) -> Arc<dyn Runner> {
    match config.provider {
        Provider::ClaudeCli => Arc::new(ClaudeRunner {
            binary: config.providers.claude_cli.binary.clone(),
            model: config.providers.claude_cli.model.clone(),
        }),
        Provider::CodexCli => Arc::new(CodexRunner {
            binary: config.providers.codex_cli.binary.clone(),
            model: config.providers.codex_cli.model.clone(),
        }),
    }
}

/// Build a command, letting the OS search PATH for bare binary names.
///
/// The child is killed if its handle is dropped, which is what happens to a
/// model CLI that outlives the generation timeout.
fn command_for(binary: &Path) -> Command {
    let binary_str = binary.to_string_lossy();
    let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
        Command::new(binary)
    } else {
        Command::new(binary_str.as_ref())
    };
    cmd.kill_on_drop(true);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_runner_follows_config() {
        let mut config = Config::default();
        assert_eq!(create_runner(&config).name(), "claude_cli");

        config.provider = Provider::CodexCli;
        assert_eq!(create_runner(&config).name(), "codex_cli");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timed_out_model_is_killed() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("finished");
        let script = dir.path().join("slow-claude");
        std::fs::write(
            &script,
            format!("#!/bin/sh\nsleep 1\ntouch {}\n", marker.display()),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = ClaudeRunner {
            binary: script,
            model: "sonnet".to_string(),
        };
        let err = runner
            .execute("prompt", Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Timeout(_)));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!marker.exists());
    }
}
