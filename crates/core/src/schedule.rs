//! The rollout date sequencer.
//!
//! Each team is scheduled independently from the same seed date: a single
//! date cursor is folded over the team's ordered issue list, so every
//! issue starts exactly one business day after the previous issue's due
//! date.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{add_workdays, is_workday};
use crate::error::ScheduleError;
use crate::issue::{Issue, RolloutPlan, ScheduledIssue};
use crate::partition::partition_round_robin;

/// One workday of effort, in estimate seconds (8-hour day).
pub const SECONDS_PER_WORKDAY: i64 = 8 * 3600;

/// Effort assumed for issues without an estimate: half a workday. Applied
/// before the one-day span adjustment, so a missing estimate schedules as
/// a single-day task.
pub const DEFAULT_ESTIMATE_SECONDS: i64 = 4 * 3600;

/// Convert an effort estimate into the number of business days the issue's
/// date span covers beyond its start day.
///
/// An estimate of up to one workday yields 0 (start date equals due date);
/// two workdays yields 1, and so on. Never negative.
pub fn duration_workdays(estimate_seconds: Option<i64>) -> u32 {
    let seconds = estimate_seconds.unwrap_or(DEFAULT_ESTIMATE_SECONDS);
    let days = (seconds + SECONDS_PER_WORKDAY - 1) / SECONDS_PER_WORKDAY;
    (days - 1).max(0) as u32
}

/// Assign sequential start/due dates to one team's ordered issue list,
/// starting the first issue on `start`.
pub fn schedule_team(issues: &[Issue], team: usize, start: NaiveDate) -> Vec<ScheduledIssue> {
    let mut cursor = start;
    let mut scheduled = Vec::with_capacity(issues.len());

    for issue in issues {
        let duration = duration_workdays(issue.estimate_seconds);
        let start_date = cursor;
        let due_date = add_workdays(start_date, duration);
        debug!(
            key = %issue.key,
            team,
            %start_date,
            %due_date,
            duration,
            "scheduled issue"
        );
        scheduled.push(ScheduledIssue {
            key: issue.key.clone(),
            summary: issue.summary.clone(),
            team,
            start_date,
            due_date,
        });
        cursor = add_workdays(due_date, 1);
    }

    scheduled
}

/// Partition `issues` round-robin across `num_teams` and sequence each
/// team's dates independently from `start`.
///
/// `num_teams` must be at least 1 and `start` must be a business day; the
/// sequencer never auto-corrects a weekend seed.
pub fn build_plan(
    issues: Vec<Issue>,
    num_teams: usize,
    start: NaiveDate,
) -> Result<RolloutPlan, ScheduleError> {
    if !is_workday(start) {
        return Err(ScheduleError::WeekendStart(start));
    }

    let teams = partition_round_robin(issues, num_teams)?;
    let teams = teams
        .iter()
        .enumerate()
        .map(|(team, issues)| schedule_team(issues, team, start))
        .collect();

    Ok(RolloutPlan { teams })
}
