//! Human-readable rendering of a plan.

use tera::{Context, Tera};

use crate::planner::types::Plan;

const PLAN_TEMPLATE: &str = r#"# 🎯 Task Plan

**ID**: {{ id }}
**Goal**: {{ goal }}
**Timeframe**: {{ timeframe }}
**Tasks**: {{ total_tasks }}

---

"#;

const TASK_TEMPLATE: &str = r#"## {{ id }}. {{ name }} {{ icon }}

{{ description }}

⏱️ **Duration**: {{ duration }}
🔗 **Dependencies**: {{ dependencies }}
📦 **Deliverables**: {{ deliverables }}
⚠️ **Risks**: {{ risks }}

---

"#;

pub struct PlanFormatter {
    tera: Tera,
}

impl Default for PlanFormatter {
    fn default() -> Self {
        let mut tera = Tera::default();
        tera.add_raw_template("plan", PLAN_TEMPLATE).unwrap();
        tera.add_raw_template("task", TASK_TEMPLATE).unwrap();
        Self { tera }
    }
}

impl PlanFormatter {
    /// Render the plan header followed by one section per task.
    pub fn render(&self, plan: &Plan) -> eyre::Result<String> {
        let mut output = self.tera.render("plan", &Context::from_serialize(plan)?)?;

        for task in &plan.tasks {
            let mut context = Context::from_serialize(task)?;
            context.insert("icon", priority_icon(&task.priority));
            output.push_str(&self.tera.render("task", &context)?);
        }

        Ok(output)
    }
}

fn priority_icon(priority: &str) -> &'static str {
    match priority {
        "High" => "🔴",
        "Medium" => "🟡",
        "Low" => "🟢",
        _ => "⚪",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::fallback::fallback_plan;
    use crate::planner::types::{Plan, Task, TaskStatus};

    #[test]
    fn renders_header_and_one_section_per_task() {
        let plan = fallback_plan("Launch website", "3 weeks");
        let rendered = PlanFormatter::default().render(&plan).unwrap();

        assert!(rendered.contains("# 🎯 Task Plan"));
        assert!(rendered.contains("**Goal**: Launch website"));
        assert!(rendered.contains("**Tasks**: 3"));
        assert!(rendered.contains("## 1. Planning & Research"));
        assert!(rendered.contains("## 2. Setup"));
        assert!(rendered.contains("## 3. Implementation"));
    }

    #[test]
    fn known_priorities_get_their_icon() {
        let plan = fallback_plan("Goal", "2 weeks");
        let rendered = PlanFormatter::default().render(&plan).unwrap();
        // Fallback tasks are all High priority.
        assert!(rendered.contains("🔴"));
    }

    #[test]
    fn unrecognized_priority_gets_the_default_icon() {
        let task = Task {
            id: 1,
            name: "Odd one".to_string(),
            description: "No description".to_string(),
            duration: "1 day".to_string(),
            dependencies: "None".to_string(),
            priority: "Critical".to_string(),
            deliverables: "Task completion".to_string(),
            risks: "None identified".to_string(),
            status: TaskStatus::Pending,
        };
        let plan = Plan::new("Goal", "2 weeks", vec![task], "1 days".to_string());
        let rendered = PlanFormatter::default().render(&plan).unwrap();
        assert!(rendered.contains("⚪"));
    }
}
