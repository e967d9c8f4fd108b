use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::config::SetupConfig;
use crate::shell::{CommandOutcome, CommandRunner};
use crate::templates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GitStep {
    /// `.git` was already there; nothing was run.
    AlreadyInitialized,
    Skipped,
    InitFailed { message: String },
    CommitFailed { message: String },
    Committed { hooks_installed: Option<bool> },
}

/// Initializes a repository and records the first commit, unless one already
/// exists. Stops after a failed `git init` instead of staging into nothing.
///
/// Command failures end up in the returned step; only writing to `out` can fail.
pub fn initialize_repository(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<GitStep> {
    if config.git_dir().exists() {
        debug!("repository marker present, leaving git alone");
        writeln!(out, "Git repository already exists, skipping init.")?;
        return Ok(GitStep::AlreadyInitialized);
    }

    let cwd = config.project_dir.as_path();

    if let CommandOutcome::Failure { message, .. } = runner.run("git init", cwd) {
        writeln!(out, "⚠️  Git initialization failed: {message}")?;
        return Ok(GitStep::InitFailed { message });
    }
    writeln!(out, "✅ Git repository initialized")?;

    let hooks_installed = if config.install_hooks {
        let prepare = format!("{} run prepare", config.package_manager);
        writeln!(out, "Setting up Husky...")?;
        let installed = runner.run(&prepare, cwd).is_success();
        if installed {
            writeln!(out, "✅ Husky initialized")?;
        } else {
            writeln!(out, "⚠️  Husky setup failed; run `{prepare}` after installing dependencies")?;
        }
        Some(installed)
    } else {
        None
    };

    let commit = format!("git commit --no-verify -m \"{}\"", templates::COMMIT_MESSAGE);
    for command in ["git add .", commit.as_str()] {
        if let CommandOutcome::Failure { message, .. } = runner.run(command, cwd) {
            writeln!(out, "⚠️  Initial commit failed: {message}")?;
            return Ok(GitStep::CommitFailed { message });
        }
    }
    writeln!(out, "✅ Initial commit created")?;

    Ok(GitStep::Committed { hooks_installed })
}
