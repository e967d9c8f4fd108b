use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};

use post_gen_setup::{SetupConfig, ShellRunner, git, hooks, pin, setup, templates};

#[derive(Parser)]
#[command(version, about = "One-time setup for a freshly generated project")]
struct Cli {
    #[command(flatten)]
    opts: Opts,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct Opts {
    /// Root of the generated project
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,
    /// Name shown in the next-step instructions (default: directory name)
    #[arg(long, env = "POST_GEN_PROJECT_SLUG", global = true)]
    project_slug: Option<String>,
    /// Runtime version written to .nvmrc
    #[arg(long, env = "POST_GEN_NODE_VERSION", default_value = templates::NODE_VERSION, global = true)]
    node_version: String,
    /// Package manager used for hook installation and next steps
    #[arg(long, default_value = templates::PACKAGE_MANAGER, global = true)]
    package_manager: String,
    /// Don't run `<package-manager> run prepare` after git init
    #[arg(long, global = true)]
    skip_hook_install: bool,
    /// Don't initialize a git repository
    #[arg(long, global = true)]
    skip_git: bool,
    /// Print a JSON report instead of progress messages
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Only make the hook scripts executable
    Hooks,
    /// Only write the runtime version pin
    Pin,
    /// Only initialize the repository and create the first commit
    Git,
}

impl Opts {
    fn into_config(self) -> SetupConfig {
        let mut config = SetupConfig::new(self.dir);
        if let Some(slug) = self.project_slug {
            config.project_slug = slug;
        }
        config.node_version = self.node_version;
        config.package_manager = self.package_manager;
        config.install_hooks = !self.skip_hook_install;
        config.init_git = !self.skip_git;
        config
    }
}

fn main() -> Result<()> {
    post_gen_setup::init_logging();

    let cli = Cli::parse();
    if cli.opts.skip_git && matches!(cli.command, Some(Command::Git)) {
        bail!("--skip-git cannot be combined with the git subcommand");
    }

    let json = cli.opts.json;
    let config = cli.opts.into_config();
    let runner = ShellRunner;

    let mut stdout = io::stdout().lock();
    let mut sink = io::sink();
    let out: &mut dyn Write = if json { &mut sink } else { &mut stdout };

    match cli.command {
        None => {
            let report = setup::run_setup(&config, &runner, out)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Some(Command::Hooks) => {
            let result = hooks::normalize_hook_permissions(&config.hook_dir());
            setup::print_hooks(out, &result)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Some(Command::Pin) => {
            pin::write_version_pin(&config.pin_path(), &config.node_version)?;
            writeln!(out, "✅ Created .nvmrc file with Node.js v{}", config.node_version)?;
        }
        Some(Command::Git) => {
            let step = git::initialize_repository(&config, &runner, out)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&step)?);
            }
        }
    }

    Ok(())
}
