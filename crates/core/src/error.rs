use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building a rollout plan.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("number of teams must be at least 1, got {0}")]
    InvalidTeamCount(usize),

    #[error("rollout start date {0} falls on a weekend; pick a business day")]
    WeekendStart(NaiveDate),
}
