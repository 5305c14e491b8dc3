use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An issue as returned by the tracker query, in query order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. "PROJ-123".
    pub key: String,
    pub summary: String,
    /// Remaining effort estimate in seconds, if the tracker has one.
    pub estimate_seconds: Option<i64>,
}

impl Issue {
    pub fn new(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            estimate_seconds: None,
        }
    }

    pub fn with_estimate(mut self, seconds: i64) -> Self {
        self.estimate_seconds = Some(seconds);
        self
    }
}

/// An issue with its computed rollout window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledIssue {
    pub key: String,
    pub summary: String,
    /// Zero-based team index the issue was assigned to.
    pub team: usize,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// The full rollout: one ordered schedule per team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolloutPlan {
    pub teams: Vec<Vec<ScheduledIssue>>,
}

impl RolloutPlan {
    /// Iterate all scheduled issues, team by team, in write-back order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledIssue> {
        self.teams.iter().flatten()
    }

    /// Total number of scheduled issues across all teams.
    pub fn len(&self) -> usize {
        self.teams.iter().map(|t| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.iter().all(|t| t.is_empty())
    }
}
