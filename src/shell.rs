use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

/// Result of one external command. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success { output: String },
    Failure { command: String, message: String },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output } => Some(output),
            Self::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

pub trait CommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> CommandOutcome;
}

/// Runs commands through the platform shell and waits for them. Failures are
/// logged, not printed; callers decide what the user sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> CommandOutcome {
        debug!(command, cwd = %cwd.display(), "running command");

        let outcome = match shell(command).current_dir(cwd).output() {
            Ok(out) if out.status.success() => CommandOutcome::Success {
                output: String::from_utf8_lossy(&out.stdout).trim().to_string(),
            },
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
                let message = if stderr.is_empty() {
                    format!("exited with {}", out.status)
                } else {
                    stderr
                };
                CommandOutcome::Failure { command: command.to_string(), message }
            }
            Err(e) => CommandOutcome::Failure {
                command: command.to_string(),
                message: format!("failed to spawn: {e}"),
            },
        };

        if let CommandOutcome::Failure { command, message } = &outcome {
            warn!(%command, %message, "command failed");
        }

        outcome
    }
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

#[cfg(not(unix))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_trimmed_stdout() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = ShellRunner.run("echo hello", tmp.path());
        assert_eq!(outcome, CommandOutcome::Success { output: "hello".into() });
        assert_eq!(outcome.output(), Some("hello"));
    }

    #[test]
    fn non_zero_exit_is_failure_with_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = ShellRunner.run("echo boom >&2; exit 3", tmp.path());
        assert!(!outcome.is_success());
        assert_eq!(outcome.error_message(), Some("boom"));
        match outcome {
            CommandOutcome::Failure { command, .. } => assert_eq!(command, "echo boom >&2; exit 3"),
            CommandOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn silent_failure_reports_exit_status() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = ShellRunner.run("exit 1", tmp.path());
        assert!(outcome.error_message().unwrap().contains("exit"));
    }

    #[test]
    fn runs_in_requested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("marker.txt"), "x").unwrap();
        let outcome = ShellRunner.run("ls", tmp.path());
        assert!(outcome.output().unwrap().contains("marker.txt"));
    }
}
