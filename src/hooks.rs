use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::templates;

#[derive(Debug, Default, Serialize)]
pub struct HookPermissions {
    /// Hook files that now carry execute permission for every class.
    pub made_executable: Vec<PathBuf>,
    /// Files that exist but could not be updated.
    pub failed: Vec<(PathBuf, String)>,
}

/// Every file the hook step touches, in the order it touches them.
pub fn hook_files(hook_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = templates::HOOK_NAMES.iter().map(|n| hook_dir.join(n)).collect();
    files.push(templates::HUSKY_SH.iter().fold(hook_dir.to_path_buf(), |p, c| p.join(c)));
    files
}

/// Adds execute permission to each known hook under `hook_dir`. A missing
/// directory or file is skipped without complaint.
#[cfg(unix)]
pub fn normalize_hook_permissions(hook_dir: &Path) -> HookPermissions {
    let mut result = HookPermissions::default();

    if !hook_dir.is_dir() {
        tracing::debug!(dir = %hook_dir.display(), "no hook directory, skipping permissions");
        return result;
    }

    for path in hook_files(hook_dir) {
        if !path.is_file() {
            continue;
        }
        match make_executable(&path) {
            Ok(()) => result.made_executable.push(path),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not make hook executable");
                result.failed.push((path, e.to_string()));
            }
        }
    }

    result
}

/// Execute bits don't exist here, so nothing is touched or reported.
#[cfg(not(unix))]
pub fn normalize_hook_permissions(hook_dir: &Path) -> HookPermissions {
    tracing::debug!(dir = %hook_dir.display(), "no execute bits on this platform");
    HookPermissions::default()
}

/// ORs owner, group and other execute bits into the file's current mode.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    let mode = perms.mode();
    perms.set_mode(mode | templates::EXECUTE_BITS);
    std::fs::set_permissions(path, perms)
}
