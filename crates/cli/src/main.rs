mod cli;
mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use rollout_core::build_plan;
use rollout_jira::JiraClient;

use crate::cli::CliArgs;
use crate::config::RolloutConfig;
use crate::terminal::Terminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let terminal = Terminal::new();

    if let Err(err) = run(&args, &terminal).await {
        terminal.print_error(&format!("{err:#}")).ok();
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: &CliArgs, terminal: &Terminal) -> Result<()> {
    let mut config =
        RolloutConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    if !args.non_interactive {
        terminal.print_banner()?;
        configure(terminal, &mut config)?;
        config
            .save(args.config.as_deref())
            .context("failed to save configuration")?;
    }

    let start_date = config.validate().context("invalid configuration")?;
    terminal.print_summary(&config)?;

    let client = JiraClient::new(&config.jira_host, &config.username, &config.api_token);

    // A failed query aborts the whole run.
    let issues = client
        .search(&config.jql_query)
        .await
        .context("issue query failed")?;

    if issues.is_empty() {
        terminal.print_info("No issues matched the query.")?;
        return Ok(());
    }
    terminal.print_issues(&issues)?;

    let plan = build_plan(issues, config.num_teams, start_date)?;
    terminal.print_plan(&plan)?;

    if args.dry_run {
        terminal.print_info("Dry run: no updates sent.")?;
        return Ok(());
    }

    if !args.yes && !terminal.confirm("Proceed with the update?")? {
        terminal.print_info("Aborted; no updates sent.")?;
        return Ok(());
    }

    // Teams in order, issues within a team in order, one update at a time.
    // A failed update is logged and the loop continues; nothing is rolled back.
    let mut updated = 0usize;
    let mut failed = 0usize;
    for issue in plan.iter() {
        match client
            .update_dates(
                &issue.key,
                &config.start_date_field,
                &config.due_date_field,
                issue.start_date,
                issue.due_date,
            )
            .await
        {
            Ok(()) => {
                info!(key = %issue.key, start = %issue.start_date, due = %issue.due_date, "issue updated");
                updated += 1;
            }
            Err(err) => {
                error!(key = %issue.key, error = %err, "failed to update issue");
                failed += 1;
            }
        }
    }

    terminal.print_info(&format!("Done: {updated} updated, {failed} failed."))?;
    Ok(())
}

/// Walk every config value with an interactive prompt, keeping the saved
/// value when the answer is empty.
fn configure(terminal: &Terminal, config: &mut RolloutConfig) -> Result<()> {
    config.jira_host = terminal.prompt_value(
        "Tracker host, e.g. https://company.atlassian.net",
        &config.jira_host,
    )?;
    config.start_date_field =
        terminal.prompt_value("Start date field identifier", &config.start_date_field)?;
    config.due_date_field =
        terminal.prompt_value("Due date field identifier", &config.due_date_field)?;

    let teams = terminal.prompt_value("Number of teams", &config.num_teams.to_string())?;
    config.num_teams = teams
        .parse()
        .with_context(|| format!("'{teams}' is not a valid team count"))?;

    config.start_date = terminal.prompt_value("Start date (YYYY-MM-DD)", &config.start_date)?;
    config.jql_query = terminal.prompt_value("JQL query", &config.jql_query)?;
    config.username = terminal.prompt_value("Username/email", &config.username)?;

    if let Some(token) = terminal.prompt_secret("API token", !config.api_token.is_empty())? {
        config.api_token = token;
    }
    Ok(())
}
