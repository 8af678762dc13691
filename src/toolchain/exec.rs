//! Narrow subprocess seam for the external toolchain.
//!
//! Everything that shells out (the slidev CLI, npm, the content fetcher)
//! goes through [`CommandRunner`], so tests can substitute a scripted double
//! and failure classification stays in one place.

use async_trait::async_trait;
use log::debug;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use crate::config::subprocess_timeout_secs;

/// Captured result of a subprocess that ran to completion.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of a subprocess invocation, classified so callers can tell a
/// missing binary from a failing one from a hung one.
#[derive(Debug)]
pub enum ExecOutcome {
    Completed(ExecOutput),
    /// The program itself could not be found.
    NotFound(String),
    /// The program ran past the configured timeout and was killed.
    TimedOut(u64),
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> ExecOutcome;
}

/// Production runner on top of `tokio::process`, with an explicit timeout.
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> ExecOutcome {
        debug!("Running: {} {}", program, args.join(" "));

        let mut command = tokio::process::Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ExecOutcome::NotFound(program.to_string());
            }
            Err(e) => {
                return ExecOutcome::Completed(ExecOutput {
                    exit_code: -1,
                    stdout: String::new(),
                    stderr: format!("Failed to spawn {}: {}", program, e),
                });
            }
        };

        let timeout_secs = subprocess_timeout_secs();
        let waited =
            tokio::time::timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await;

        match waited {
            Err(_) => ExecOutcome::TimedOut(timeout_secs),
            Ok(Err(e)) => ExecOutcome::Completed(ExecOutput {
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to wait for {}: {}", program, e),
            }),
            Ok(Ok(output)) => ExecOutcome::Completed(ExecOutput {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
        }
    }
}
