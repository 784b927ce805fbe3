// file: src/exec/runner.rs
// version: 1.2.1
// guid: 9c4a7e25-1d8b-4f60-b3a9-6e52c0d18f74

//! Invokes the provisioned binary and captures its output

use crate::Result;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Captured stdout/stderr of a completed invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout split into lines for log capture
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines().map(str::to_string).collect()
    }
}

/// Runs the wrapped binary with constructed argument lists
#[derive(Debug, Clone)]
pub struct CommandRunner {
    exec_path: PathBuf,
}

impl CommandRunner {
    pub fn new<P: Into<PathBuf>>(exec_path: P) -> Self {
        Self { exec_path: exec_path.into() }
    }

    pub fn exec_path(&self) -> &Path {
        &self.exec_path
    }

    /// Run with the automation environment applied
    pub async fn run(&self, args: &[String]) -> Result<CommandOutput> {
        self.run_with_env(args, &[]).await
    }

    /// Run with extra environment variables on top of the automation defaults
    pub async fn run_with_env(
        &self,
        args: &[String],
        extra_env: &[(&str, &str)],
    ) -> Result<CommandOutput> {
        debug!("Calling {} {:?}", self.exec_path.display(), args);

        let output = Command::new(&self.exec_path)
            .args(args)
            .env("TF_IN_AUTOMATION", "true")
            .envs(extra_env.iter().copied())
            .output()
            .await
            .map_err(|e| {
                crate::error::DriverError::execution(format!(
                    "Failed to spawn {}: {}",
                    self.exec_path.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            debug!("{}", output.status);
            debug!("{}", stderr);
            debug!("{}", stdout);
            return Err(crate::error::DriverError::execution(format!(
                "{} {} exited with {}: {}",
                self.exec_path.display(),
                args.first().map(String::as_str).unwrap_or(""),
                output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                stderr_excerpt(&stderr)
            )));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Last few stderr lines, enough to name the failure without flooding logs
fn stderr_excerpt(stderr: &str) -> String {
    const MAX_LINES: usize = 8;
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() <= MAX_LINES {
        lines.join(" | ")
    } else {
        lines[lines.len() - MAX_LINES..].join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let runner = CommandRunner::new("/bin/sh");
        let output = runner
            .run(&["-c".to_string(), "echo hello".to_string()])
            .await
            .unwrap();

        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_run_separates_streams() {
        let runner = CommandRunner::new("/bin/sh");
        let output = runner
            .run(&["-c".to_string(), "echo out; echo err >&2".to_string()])
            .await
            .unwrap();

        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[tokio::test]
    async fn test_run_injects_automation_env() {
        let runner = CommandRunner::new("/bin/sh");
        let output = runner
            .run(&["-c".to_string(), "printf %s \"$TF_IN_AUTOMATION\"".to_string()])
            .await
            .unwrap();

        assert_eq!(output.stdout, "true");
    }

    #[tokio::test]
    async fn test_run_with_extra_env() {
        let runner = CommandRunner::new("/bin/sh");
        let output = runner
            .run_with_env(
                &["-c".to_string(), "printf %s \"$TF_WORKSPACE\"".to_string()],
                &[("TF_WORKSPACE", "staging")],
            )
            .await
            .unwrap();

        assert_eq!(output.stdout, "staging");
    }

    #[tokio::test]
    async fn test_nonzero_exit_reports_code_and_stderr() {
        let runner = CommandRunner::new("/bin/sh");
        let err = runner
            .run(&["-c".to_string(), "echo boom >&2; exit 3".to_string()])
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains('3'), "missing exit code: {}", msg);
        assert!(msg.contains("boom"), "missing stderr excerpt: {}", msg);
    }

    #[tokio::test]
    async fn test_missing_binary_is_execution_error() {
        let runner = CommandRunner::new("/nonexistent/terraform");
        let err = runner.run(&["version".to_string()]).await.unwrap_err();

        assert!(matches!(err, crate::error::DriverError::Execution(_)));
    }

    #[test]
    fn test_stderr_excerpt_truncates() {
        let noisy: String = (0..20).map(|i| format!("line{}\n", i)).collect();
        let excerpt = stderr_excerpt(&noisy);

        assert!(excerpt.contains("line19"));
        assert!(!excerpt.contains("line5"));
    }

    #[test]
    fn test_stdout_lines() {
        let output = CommandOutput {
            stdout: "a\nb\n".to_string(),
            stderr: String::new(),
        };

        assert_eq!(output.stdout_lines(), vec!["a".to_string(), "b".to_string()]);
    }
}
