pub mod calendar;
pub mod error;
pub mod issue;
pub mod partition;
pub mod schedule;

pub use calendar::{add_workdays, is_workday, next_workday};
pub use error::ScheduleError;
pub use issue::{Issue, RolloutPlan, ScheduledIssue};
pub use partition::partition_round_robin;
pub use schedule::{
    build_plan, duration_workdays, schedule_team, DEFAULT_ESTIMATE_SECONDS, SECONDS_PER_WORKDAY,
};
