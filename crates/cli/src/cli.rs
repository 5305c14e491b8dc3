use clap::Parser;

/// Assign sequential rollout dates to tracker issues.
///
/// Fetches the issues matched by a JQL query, splits them round-robin
/// across teams, computes business-day start/due windows per issue, and
/// writes the dates back after confirmation.
#[derive(Parser, Debug)]
#[command(name = "rollout-cli", about = "Assign sequential rollout dates to tracker issues")]
pub struct CliArgs {
    /// Path to config file (default: ~/.config/rollout-cli/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// Skip the interactive prompts and run with the saved configuration
    #[arg(long)]
    pub non_interactive: bool,

    /// Skip the confirmation prompt before writing dates back
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Compute and display the plan without writing anything back
    #[arg(long)]
    pub dry_run: bool,
}
