use crate::planner::types::{RawTask, Task, TaskStatus};

/// Normalize raw records into canonical tasks, assigning sequential ids
/// starting at 1 and filling every absent field with its default. Never fails.
pub fn normalize_tasks(raw_tasks: Vec<RawTask>) -> Vec<Task> {
    raw_tasks
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let id = (i + 1) as u64;
            Task {
                id,
                name: raw.name.unwrap_or_else(|| format!("Task {id}")),
                description: raw.description.unwrap_or_else(|| "No description".to_string()),
                duration: raw.duration.unwrap_or_else(|| "1 day".to_string()),
                dependencies: raw.dependencies.unwrap_or_else(|| "None".to_string()),
                priority: raw.priority.unwrap_or_else(|| "Medium".to_string()),
                deliverables: raw.deliverables.unwrap_or_else(|| "Task completion".to_string()),
                risks: raw.risks.unwrap_or_else(|| "None identified".to_string()),
                status: TaskStatus::Pending,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_gets_all_defaults() {
        let tasks = normalize_tasks(vec![RawTask::default()]);
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.id, 1);
        assert_eq!(task.name, "Task 1");
        assert_eq!(task.description, "No description");
        assert_eq!(task.duration, "1 day");
        assert_eq!(task.dependencies, "None");
        assert_eq!(task.priority, "Medium");
        assert_eq!(task.deliverables, "Task completion");
        assert_eq!(task.risks, "None identified");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn present_fields_are_kept_verbatim() {
        let raw = RawTask {
            name: Some("Ship it".to_string()),
            priority: Some("Urgent-ish".to_string()),
            ..RawTask::default()
        };
        let tasks = normalize_tasks(vec![raw]);
        assert_eq!(tasks[0].name, "Ship it");
        // Any priority string is accepted as-is; only absence defaults.
        assert_eq!(tasks[0].priority, "Urgent-ish");
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let tasks = normalize_tasks(vec![RawTask::default(); 5]);
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize_tasks(Vec::new()).is_empty());
    }
}
