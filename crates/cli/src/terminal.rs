use anyhow::{bail, Result};
use crossterm::{
    event::{read, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use rollout_core::{Issue, RolloutPlan};
use std::io::{self, Write};

use crate::config::RolloutConfig;

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const PROMPT: Color = Color::Green;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
    const HEADER: Color = Color::Magenta;
    const KEY: Color = Color::Cyan;
}

/// Manages terminal I/O for the interactive configuration flow.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Print the startup banner.
    pub fn print_banner(&self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print("rollout-cli"),
            ResetColor,
            Print(" - sequential rollout dates for tracker issues\n"),
            SetForegroundColor(Colors::DIM),
            Print("Press Enter at any prompt to keep the saved value.\n"),
            Print("---\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Prompt for a config value, showing the current value as the default.
    /// An empty answer keeps the current value.
    pub fn prompt_value(&self, label: &str, current: &str) -> Result<String> {
        let mut stdout = io::stdout();
        let shown = if current.is_empty() { "-" } else { current };
        execute!(
            stdout,
            SetForegroundColor(Colors::PROMPT),
            Print(format!("{label} ({shown}): ")),
            ResetColor,
        )?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Prompt for a secret with masked echo. Returns None if the user just
    /// presses Enter (keep the saved value).
    pub fn prompt_secret(&self, label: &str, has_saved: bool) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        let hint = if has_saved { " (saved)" } else { "" };
        execute!(
            stdout,
            SetForegroundColor(Colors::PROMPT),
            Print(format!("{label}{hint}: ")),
            ResetColor,
        )?;
        stdout.flush()?;

        enable_raw_mode()?;
        let result = self.read_masked();
        disable_raw_mode()?;
        println!();

        let secret = result?;
        if secret.is_empty() {
            Ok(None)
        } else {
            Ok(Some(secret))
        }
    }

    fn read_masked(&self) -> Result<String> {
        let mut secret = String::new();
        loop {
            if let Event::Key(key) = read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if secret.pop().is_some() {
                            print!("\x08 \x08");
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        disable_raw_mode().ok();
                        bail!("interrupted");
                    }
                    KeyCode::Char(c) => {
                        secret.push(c);
                        print!("*");
                        io::stdout().flush()?;
                    }
                    _ => {}
                }
            }
        }
        Ok(secret)
    }

    /// Prompt the user for a yes/no decision. Defaults to no.
    pub fn confirm(&self, question: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::PROMPT),
            Print(format!("{question} [y/N] ")),
            ResetColor,
        )?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim().to_lowercase();

        Ok(trimmed == "y" || trimmed == "yes")
    }

    /// Print the effective settings, with the token redacted.
    pub fn print_summary(&self, config: &RolloutConfig) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::HEADER),
            Print("Settings:\n"),
            SetForegroundColor(Colors::DIM),
            Print(format!("  host:             {}\n", config.jira_host)),
            Print(format!("  start date field: {}\n", config.start_date_field)),
            Print(format!("  due date field:   {}\n", config.due_date_field)),
            Print(format!("  teams:            {}\n", config.num_teams)),
            Print(format!("  start date:       {}\n", config.start_date)),
            Print(format!("  query:            {}\n", config.jql_query)),
            Print(format!("  username:         {}\n", config.username)),
            Print("  token:            ********\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print the numbered list of matched issues.
    pub fn print_issues(&self, issues: &[Issue]) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::HEADER),
            Print(format!("Matched issues ({}):\n", issues.len())),
            ResetColor,
        )?;
        for (i, issue) in issues.iter().enumerate() {
            execute!(
                stdout,
                SetForegroundColor(Colors::KEY),
                Print(format!("{:>3}. {}", i + 1, issue.key)),
                ResetColor,
                Print(format!(" - {}\n", issue.summary)),
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print the computed plan, one block per team.
    pub fn print_plan(&self, plan: &RolloutPlan) -> Result<()> {
        let mut stdout = io::stdout();
        for (team, issues) in plan.teams.iter().enumerate() {
            execute!(
                stdout,
                Print("\n"),
                SetForegroundColor(Colors::HEADER),
                Print(format!("Team {}:\n", team + 1)),
                ResetColor,
            )?;
            if issues.is_empty() {
                execute!(
                    stdout,
                    SetForegroundColor(Colors::DIM),
                    Print("  (no issues)\n"),
                    ResetColor,
                )?;
                continue;
            }
            for s in issues {
                execute!(
                    stdout,
                    SetForegroundColor(Colors::KEY),
                    Print(format!("  {:<12}", s.key)),
                    ResetColor,
                    Print(format!(" {} -> {}\n", s.start_date, s.due_date)),
                )?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print an error message.
    pub fn print_error(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::ERROR),
            Print(format!("Error: {msg}\n")),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an info message.
    pub fn print_info(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("{msg}\n")),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}
