use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Rollout configuration loaded from TOML and re-saved after the
/// interactive prompts. Immutable once validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Tracker base URL, e.g. https://company.atlassian.net
    #[serde(default)]
    pub jira_host: String,

    /// Field identifier receiving the computed start date
    #[serde(default = "default_start_field")]
    pub start_date_field: String,

    /// Field identifier receiving the computed due date
    #[serde(default = "default_due_field")]
    pub due_date_field: String,

    /// Number of teams to split the rollout across
    #[serde(default = "default_num_teams")]
    pub num_teams: usize,

    /// Seed start date, YYYY-MM-DD, must be a business day
    #[serde(default)]
    pub start_date: String,

    /// JQL query selecting the issues to schedule
    #[serde(default)]
    pub jql_query: String,

    /// Tracker account (username or email)
    #[serde(default)]
    pub username: String,

    /// API token paired with the account
    #[serde(default)]
    pub api_token: String,
}

fn default_start_field() -> String {
    "customfield_10015".to_string()
}

fn default_due_field() -> String {
    "duedate".to_string()
}

fn default_num_teams() -> usize {
    1
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            jira_host: String::new(),
            start_date_field: default_start_field(),
            due_date_field: default_due_field(),
            num_teams: default_num_teams(),
            start_date: String::new(),
            jql_query: String::new(),
            username: String::new(),
            api_token: String::new(),
        }
    }
}

impl RolloutConfig {
    /// Return the default config file path: ~/.config/rollout-cli/config.toml
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("rollout-cli");
        Ok(config_dir.join("config.toml"))
    }

    fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_config_path(),
        }
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;

        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
            Ok(config)
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Persist the config to the given path, or the default path.
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = Self::resolve_path(path)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config dir: {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(&config_path, toml_str)
            .with_context(|| format!("failed to write config: {}", config_path.display()))?;
        debug!(?config_path, "Config saved");
        Ok(())
    }

    /// Check every value needed for a run and parse the seed date.
    /// All failures are reported before any network call is made.
    pub fn validate(&self) -> Result<NaiveDate> {
        if self.jira_host.is_empty() {
            bail!("tracker host is not set");
        }
        if self.username.is_empty() {
            bail!("username is not set");
        }
        if self.api_token.is_empty() {
            bail!("API token is not set");
        }
        if self.jql_query.is_empty() {
            bail!("JQL query is not set");
        }
        if self.num_teams == 0 {
            bail!("number of teams must be at least 1, got 0");
        }

        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").with_context(|| {
            format!(
                "start date '{}' is not a valid YYYY-MM-DD date",
                self.start_date
            )
        })?;
        if !rollout_core::is_workday(start) {
            bail!("start date {start} falls on a weekend; pick a business day");
        }
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RolloutConfig {
        RolloutConfig {
            jira_host: "https://example.atlassian.net".into(),
            start_date: "2024-01-01".into(), // a Monday
            jql_query: "project = ROLL".into(),
            username: "me@example.com".into(),
            api_token: "token".into(),
            ..RolloutConfig::default()
        }
    }

    #[test]
    fn default_config_has_field_identifiers_and_one_team() {
        let config = RolloutConfig::default();
        assert_eq!(config.start_date_field, "customfield_10015");
        assert_eq!(config.due_date_field, "duedate");
        assert_eq!(config.num_teams, 1);
    }

    #[test]
    fn toml_roundtrip() {
        let config = valid_config();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: RolloutConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.jira_host, config.jira_host);
        assert_eq!(parsed.num_teams, config.num_teams);
        assert_eq!(parsed.start_date, config.start_date);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: RolloutConfig = toml::from_str(r#"jira_host = "https://x.example""#).unwrap();
        assert_eq!(parsed.jira_host, "https://x.example");
        assert_eq!(parsed.due_date_field, "duedate");
        assert_eq!(parsed.num_teams, 1);
    }

    #[test]
    fn validate_accepts_a_business_day_seed() {
        let start = valid_config().validate().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn validate_rejects_zero_teams() {
        let mut config = valid_config();
        config.num_teams = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn validate_rejects_malformed_date() {
        let mut config = valid_config();
        config.start_date = "01/02/2024".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn validate_rejects_weekend_seed() {
        let mut config = valid_config();
        config.start_date = "2024-01-06".into(); // a Saturday
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("weekend"));
    }

    #[test]
    fn validate_rejects_missing_credentials() {
        let mut config = valid_config();
        config.api_token = String::new();
        assert!(config.validate().is_err());
    }
}
