//! Round-robin assignment of issues to teams.

use crate::error::ScheduleError;
use crate::issue::Issue;

/// Split `issues` into `num_teams` ordered lists, assigning the issue at
/// original index `i` to team `i % num_teams`. Order within a team follows
/// the input order.
pub fn partition_round_robin(
    issues: Vec<Issue>,
    num_teams: usize,
) -> Result<Vec<Vec<Issue>>, ScheduleError> {
    if num_teams == 0 {
        return Err(ScheduleError::InvalidTeamCount(num_teams));
    }

    let mut teams: Vec<Vec<Issue>> = (0..num_teams).map(|_| Vec::new()).collect();
    for (i, issue) in issues.into_iter().enumerate() {
        teams[i % num_teams].push(issue);
    }
    Ok(teams)
}
