use std::path::{Path, PathBuf};

use crate::templates;

/// Values that a template engine would otherwise inline into the hook.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub project_dir: PathBuf,
    pub project_slug: String,
    pub node_version: String,
    pub package_manager: String,
    pub install_hooks: bool,
    pub init_git: bool,
}

impl SetupConfig {
    /// Defaults for a generated project rooted at `dir`. The slug falls back to
    /// the directory name, which is what the template engine names it after.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let project_dir = dir.into();
        let project_slug = default_slug(&project_dir);
        Self {
            project_dir,
            project_slug,
            node_version: templates::NODE_VERSION.to_string(),
            package_manager: templates::PACKAGE_MANAGER.to_string(),
            install_hooks: true,
            init_git: true,
        }
    }

    pub fn hook_dir(&self) -> PathBuf {
        self.project_dir.join(templates::HUSKY_DIR)
    }

    pub fn pin_path(&self) -> PathBuf {
        self.project_dir.join(templates::NVMRC)
    }

    pub fn git_dir(&self) -> PathBuf {
        self.project_dir.join(templates::GIT_DIR)
    }
}

fn default_slug(dir: &Path) -> String {
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}
