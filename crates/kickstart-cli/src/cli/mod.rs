//! Command-line surface of `kickstart`. Parsing only; handlers live in
//! `commands`.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name    = "kickstart",
    bin_name = "kickstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} FastAPI project scaffolding",
    long_about = "Kickstart generates production-ready FastAPI projects, wires \
                  middleware into existing ones and writes onboarding reports.",
    after_help = "EXAMPLES:\n\
        \x20 kickstart init my-api --with-database --with-auth\n\
        \x20 kickstart --path my-api add-rate-limiting\n\
        \x20 kickstart --path my-api onboarding-report\n\
        \x20 kickstart completions bash > /usr/share/bash-completion/completions/kickstart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new FastAPI project in --path
    #[command(
        visible_alias = "new",
        after_help = "EXAMPLES:\n\
            \x20 kickstart init my-api\n\
            \x20 kickstart init my-api --with-docker --with-tests --yes\n\
            \x20 kickstart --path ~/src init my-api --dry-run"
    )]
    Init(InitArgs),

    /// Report missing dependencies and configuration files
    EnvCheck,

    /// Add error handling middleware to app/main.py
    AddErrorMiddleware,

    /// Add rate limiting to app/main.py
    AddRateLimiting,

    /// Add request monitoring to app/main.py
    AddMonitoring,

    /// Write the async pytest suite
    TestInit,

    /// Write ONBOARDING_REPORT.md at the project root
    OnboardingReport,

    /// Write alembic.ini and the migrations/ directory
    SetupDatabase,

    /// Write Dockerfile and docker-compose.yml unless a Dockerfile exists
    DockerSetup,

    /// Look for blocking calls and sync functions in Python sources
    AsyncCheck,

    /// List the built-in templates
    #[command(visible_alias = "ls")]
    Templates(TemplatesArgs),

    /// Print a shell completion script
    #[command(after_help = "EXAMPLES:\n\
            \x20 kickstart completions bash > ~/.local/share/bash-completion/completions/kickstart\n\
            \x20 kickstart completions zsh  > ~/.zfunc/_kickstart")]
    Completions(CompletionsArgs),

    /// Show the effective configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Write a default configuration file
    ConfigInit(ConfigInitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory name of the new project
    pub name: String,

    /// Mention database support in the summary
    #[arg(long)]
    pub with_database: bool,

    /// Mention JWT authentication in the summary
    #[arg(long)]
    pub with_auth: bool,

    /// Mention Docker configuration in the summary
    #[arg(long)]
    pub with_docker: bool,

    /// Mention the test suite in the summary
    #[arg(long)]
    pub with_tests: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// List what would be created and exit
    #[arg(long)]
    pub dry_run: bool,
}

impl InitArgs {
    /// Names of the feature flags that were passed.
    pub fn features(&self) -> Vec<&'static str> {
        [
            (self.with_database, "database"),
            (self.with_auth, "auth"),
            (self.with_docker, "docker"),
            (self.with_tests, "tests"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Name, kind and size per template
    Table,
    /// Names only
    List,
    Json,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `checker.python`
    Get { key: String },
    /// Print every value
    List,
    /// Print where the default config file lives
    Path,
}

#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
