//! Aggregation of per-task duration estimates into a single bucketed total.

use tracing::debug;

use crate::planner::types::Task;

const HOURS_PER_DAY: u64 = 8;
const HOURS_PER_WEEK: u64 = 40;

/// Sum the task durations into working hours and re-bucket the total.
///
/// A duration contributes hours when it mentions "hour", "day", or "week"
/// (checked in that order) and its first whitespace-delimited token starts
/// with digits. Anything else contributes zero and is skipped.
pub fn estimate_total_time(tasks: &[Task]) -> String {
    let mut total_hours: u64 = 0;

    for task in tasks {
        let duration = task.duration.to_lowercase();

        let hours_per_unit = if duration.contains("hour") {
            1
        } else if duration.contains("day") {
            HOURS_PER_DAY
        } else if duration.contains("week") {
            HOURS_PER_WEEK
        } else {
            debug!(task_id = task.id, duration = %task.duration, "duration has no recognized unit, contributes nothing to the total");
            continue;
        };

        match leading_quantity(&duration) {
            Some(quantity) => total_hours += quantity * hours_per_unit,
            None => {
                debug!(task_id = task.id, duration = %task.duration, "duration has no leading digits, contributes nothing to the total");
            }
        }
    }

    if total_hours < HOURS_PER_DAY {
        format!("{total_hours} hours")
    } else if total_hours < HOURS_PER_WEEK {
        format!("{} days", total_hours / HOURS_PER_DAY)
    } else {
        format!("{} weeks", total_hours / HOURS_PER_WEEK)
    }
}

/// Leading run of digits of the first whitespace-delimited token, e.g.
/// "1.5 days" -> 1, "about a week" -> None.
fn leading_quantity(duration: &str) -> Option<u64> {
    let first_token = duration.split_whitespace().next()?;
    let leading_digits = regex::Regex::new(r"^\d+").unwrap();
    leading_digits
        .find(first_token)
        .and_then(|m| m.as_str().parse().ok())
}
