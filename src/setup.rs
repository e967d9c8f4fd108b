use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::config::SetupConfig;
use crate::git::{self, GitStep};
use crate::hooks::{self, HookPermissions};
use crate::pin;
use crate::shell::CommandRunner;

#[derive(Debug, Serialize)]
pub struct SetupReport {
    pub project_slug: String,
    pub hooks: HookPermissions,
    pub pin_file: PathBuf,
    pub node_version: String,
    pub git: GitStep,
}

/// Runs the post-generation steps in order: hook permissions, runtime pin,
/// repository setup. Hooks must be executable before anything commits.
///
/// Progress goes to `out`; pass `io::sink()` for a silent run. Only a failed
/// pin write (or a failed write to `out`) is fatal.
pub fn run_setup(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<SetupReport> {
    let hook_dir = config.hook_dir();
    if hook_dir.is_dir() {
        writeln!(out, "Setting up Husky hooks...")?;
    }
    let hooks = hooks::normalize_hook_permissions(&hook_dir);
    print_hooks(out, &hooks)?;

    let pin_file = config.pin_path();
    pin::write_version_pin(&pin_file, &config.node_version)?;
    writeln!(out, "✅ Created .nvmrc file with Node.js v{}", config.node_version)?;
    writeln!(out)?;
    writeln!(out, "✅ Husky hooks are now executable.")?;
    writeln!(out, "✨ Project successfully generated!")?;

    let git = if config.init_git {
        git::initialize_repository(config, runner, out)?
    } else {
        GitStep::Skipped
    };
    print_next_steps(out, &config.project_slug, &config.package_manager)?;

    Ok(SetupReport {
        project_slug: config.project_slug.clone(),
        hooks,
        pin_file,
        node_version: config.node_version.clone(),
        git,
    })
}

pub fn print_hooks(out: &mut dyn Write, hooks: &HookPermissions) -> io::Result<()> {
    for path in &hooks.made_executable {
        match file_name(path) {
            "husky.sh" => writeln!(out, "✅ Made husky.sh executable")?,
            name => writeln!(out, "✅ Made {name} hook executable")?,
        }
    }
    for (path, err) in &hooks.failed {
        writeln!(out, "⚠️  Could not make {} executable: {err}", path.display())?;
    }
    Ok(())
}

pub fn print_next_steps(out: &mut dyn Write, slug: &str, package_manager: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚀 Next steps:")?;
    writeln!(out, "  cd {slug}")?;
    writeln!(out, "  {package_manager} install")?;
    writeln!(out, "  {package_manager} run start:dev")
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
