pub mod config;
pub mod git;
pub mod hooks;
pub mod pin;
pub mod setup;
pub mod shell;
pub mod templates;

pub use config::SetupConfig;
pub use git::GitStep;
pub use setup::{SetupReport, run_setup};
pub use shell::{CommandOutcome, CommandRunner, ShellRunner};

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout stays for the human-facing messages.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("post_gen_setup=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
