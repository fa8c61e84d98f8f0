use crate::planner::types::{Plan, Task, TaskStatus};

/// Deterministic plan served when reasoning is unavailable or fails: three
/// fixed tasks chained by name, with the requested timeframe passed through
/// as the time estimate. Always succeeds.
pub fn fallback_plan(goal: &str, timeframe: &str) -> Plan {
    let tasks = vec![
        Task {
            id: 1,
            name: "Planning & Research".to_string(),
            description: format!("Research and plan: {goal}"),
            duration: "2 days".to_string(),
            dependencies: "None".to_string(),
            priority: "High".to_string(),
            deliverables: "Project plan".to_string(),
            risks: "Insufficient info".to_string(),
            status: TaskStatus::Pending,
        },
        Task {
            id: 2,
            name: "Setup".to_string(),
            description: "Environment and tools setup".to_string(),
            duration: "1 day".to_string(),
            dependencies: "Planning & Research".to_string(),
            priority: "High".to_string(),
            deliverables: "Ready environment".to_string(),
            risks: "Technical issues".to_string(),
            status: TaskStatus::Pending,
        },
        Task {
            id: 3,
            name: "Implementation".to_string(),
            description: "Core development work".to_string(),
            duration: "1 week".to_string(),
            dependencies: "Setup".to_string(),
            priority: "High".to_string(),
            deliverables: "Working prototype".to_string(),
            risks: "Complexity".to_string(),
            status: TaskStatus::Pending,
        },
    ];

    Plan::new(goal, timeframe, tasks, timeframe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_three_fixed_tasks() {
        let plan = fallback_plan("Launch website", "3 weeks");

        assert_eq!(plan.total_tasks, 3);
        let names: Vec<&str> = plan.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Planning & Research", "Setup", "Implementation"]);
    }

    #[test]
    fn timeframe_is_passed_through_verbatim() {
        let plan = fallback_plan("Launch website", "3 weeks");
        assert_eq!(plan.timeframe, "3 weeks");
        assert_eq!(plan.estimated_total_time, "3 weeks");
    }

    #[test]
    fn tasks_chain_by_name() {
        let plan = fallback_plan("Anything", "1 month");
        assert_eq!(plan.tasks[0].dependencies, "None");
        assert_eq!(plan.tasks[1].dependencies, "Planning & Research");
        assert_eq!(plan.tasks[2].dependencies, "Setup");
    }

    #[test]
    fn first_task_references_the_goal() {
        let plan = fallback_plan("Migrate the billing system", "2 weeks");
        assert!(plan.tasks[0].description.contains("Migrate the billing system"));
    }

    #[test]
    fn all_tasks_start_pending_with_contiguous_ids() {
        let plan = fallback_plan("Goal", "2 weeks");
        for (i, task) in plan.tasks.iter().enumerate() {
            assert_eq!(task.id, (i + 1) as u64);
            assert_eq!(task.status, TaskStatus::Pending);
        }
    }
}
