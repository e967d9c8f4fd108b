pub const NODE_VERSION: &str = "22.11.0";

pub const NVMRC: &str = ".nvmrc";

pub const HUSKY_DIR: &str = ".husky";

pub const HOOK_NAMES: [&str; 2] = ["pre-commit", "commit-msg"];

/// Shared fragment sourced by every hook, relative to the hook directory.
pub const HUSKY_SH: [&str; 2] = ["_", "husky.sh"];

pub const GIT_DIR: &str = ".git";

pub const COMMIT_MESSAGE: &str = "chore: initial commit";

pub const PACKAGE_MANAGER: &str = "pnpm";

pub const EXECUTE_BITS: u32 = 0o111;
