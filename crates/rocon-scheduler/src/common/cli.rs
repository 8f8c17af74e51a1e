use std::path::PathBuf;

use clap::Parser;

use crate::client::output::outputs::Outputs;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ColorPolicy {
    Auto,
    Always,
    Never,
}

// Common CLI options
#[derive(Parser)]
pub struct CommonOpts {
    /// Enables more detailed log output
    #[arg(long, global = true, help_heading("GLOBAL OPTIONS"))]
    pub debug: bool,

    /// Sets console color policy
    #[arg(
        long,
        default_value_t = ColorPolicy::Auto,
        value_enum,
        global = true,
        help_heading("GLOBAL OPTIONS"),
        hide_short_help(true)
    )]
    pub colors: ColorPolicy,

    /// Sets output formatting
    #[arg(
        long,
        env = "ROCON_OUTPUT_MODE",
        default_value_t = Outputs::Cli,
        value_enum,
        global = true,
        help_heading("GLOBAL OPTIONS")
    )]
    pub output_mode: Outputs,
}

// Root CLI options
#[derive(Parser)]
#[command(
    author,
    about,
    version(crate::SCHEDULER_VERSION),
    disable_help_subcommand(true),
    help_expected(true)
)]
pub struct RootOptions {
    #[clap(flatten)]
    pub common: CommonOpts,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    /// Shows the platforms of a resource pool
    Pool(PoolOpts),
    /// Grants the configured requests against the configured platforms
    Run(RunOpts),
}

#[derive(Parser)]
pub struct ConfigArg {
    /// Path to a TOML file with `[[platform]]` and `[[request]]` tables
    #[arg(long, value_hint = clap::ValueHint::FilePath, env = "ROCON_SCHEDULER_CONFIG")]
    pub config: PathBuf,
}

#[derive(Parser)]
pub struct PoolOpts {
    #[clap(flatten)]
    pub config: ConfigArg,
}

#[derive(Parser)]
pub struct RunOpts {
    #[clap(flatten)]
    pub config: ConfigArg,

    /// Cancel every granted request at the end and show the pool again
    #[arg(long)]
    pub release: bool,
}
