//! Plan generation: prompt construction, the reasoning call, and the routing
//! of its output through parsing, normalization, and duration aggregation.
//! Every failure along that chain is converted into the deterministic
//! fallback plan; callers always receive a complete plan.

use std::time::Duration;

use rig::message::Message;
use tera::{Context, Tera};
use tracing::{debug, info, warn};

use crate::llm::{Completion, CompletionResponse, ReasoningClientDyn};
use crate::planner::duration::estimate_total_time;
use crate::planner::fallback::fallback_plan;
use crate::planner::history::PlanHistory;
use crate::planner::parser::{self, ParseError};
use crate::planner::types::Plan;
use crate::planner::validate::normalize_tasks;

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";

const SYSTEM_PROMPT: &str = "You are an expert project manager. Create comprehensive task breakdowns with dependencies, timelines, and risk assessment.";

const REQUEST_TEMPLATE: &str = r#"Break down this goal into 6-12 actionable tasks:

GOAL: {{ goal }}
TIMEFRAME: {{ timeframe }}
{% if context %}CONTEXT: {{ context }}
{% endif %}
For each task provide:
- name: Clear task name
- description: What needs to be done
- duration: Time estimate
- dependencies: Prerequisites (or "None")
- priority: High/Medium/Low
- deliverables: Expected outputs
- risks: Potential issues

Return as JSON array."#;

/// Sampling and transport settings for the reasoning call.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u64,
    /// Upper bound on the external call; `None` blocks indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 3000,
            request_timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// Why a reasoning attempt did not produce a plan. Never surfaced to callers
/// of `generate`; inspected for diagnostics and tests.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("failed to render the request prompt: {0}")]
    Template(#[from] tera::Error),

    #[error("reasoning request failed: {0}")]
    Transport(String),

    #[error("reasoning request timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub struct PlanGenerator {
    client: Option<Box<dyn ReasoningClientDyn>>,
    config: PlannerConfig,
    prompts: Tera,
    history: PlanHistory,
}

impl PlanGenerator {
    pub fn new(client: Box<dyn ReasoningClientDyn>, config: PlannerConfig) -> Self {
        Self {
            client: Some(client),
            config,
            prompts: request_templates(),
            history: PlanHistory::new(),
        }
    }

    /// Generator without a reasoning client; every request is served by the
    /// fallback plan.
    pub fn without_client(config: PlannerConfig) -> Self {
        Self {
            client: None,
            config,
            prompts: request_templates(),
            history: PlanHistory::new(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Every plan generated so far, in order, fallback plans included.
    pub fn history(&self) -> &PlanHistory {
        &self.history
    }

    /// Turn a goal into a plan. Infallible: any failure in the reasoning
    /// chain is converted into the fallback plan here, visibly.
    pub async fn generate(&mut self, goal: &str, timeframe: &str, context: &str) -> Plan {
        let plan = match &self.client {
            None => {
                info!("no reasoning client configured, serving the fallback plan");
                fallback_plan(goal, timeframe)
            }
            Some(client) => {
                match self.generate_with_reasoning(client.as_ref(), goal, timeframe, context).await {
                    Ok(plan) => plan,
                    Err(err) => {
                        warn!(error = %err, "plan generation failed, serving the fallback plan");
                        fallback_plan(goal, timeframe)
                    }
                }
            }
        };

        self.history.append(plan.clone());
        plan
    }

    async fn generate_with_reasoning(
        &self,
        client: &dyn ReasoningClientDyn,
        goal: &str,
        timeframe: &str,
        context: &str,
    ) -> Result<Plan, GenerationError> {
        let prompt = self.render_request(goal, timeframe, context)?;

        let completion = Completion::new(self.config.model.clone(), Message::user(prompt))
            .preamble(SYSTEM_PROMPT.to_string())
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens);

        let response = match self.config.request_timeout {
            Some(limit) => tokio::time::timeout(limit, client.completion(completion))
                .await
                .map_err(|_| GenerationError::Timeout(limit))?,
            None => client.completion(completion).await,
        }
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let text = response_text(&response)?;
        let raw_tasks = parser::extract_tasks(&text)?;
        let tasks = normalize_tasks(raw_tasks);
        let estimated_total_time = estimate_total_time(&tasks);
        debug!(task_count = tasks.len(), "reasoning produced a task breakdown");

        Ok(Plan::new(goal, timeframe, tasks, estimated_total_time))
    }

    fn render_request(&self, goal: &str, timeframe: &str, context: &str) -> Result<String, GenerationError> {
        let mut values = Context::new();
        values.insert("goal", goal);
        values.insert("timeframe", timeframe);
        values.insert("context", context);
        Ok(self.prompts.render("request", &values)?)
    }
}

fn request_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template("request", REQUEST_TEMPLATE).unwrap();
    tera
}

fn response_text(response: &CompletionResponse) -> Result<String, GenerationError> {
    response
        .text()
        .ok_or_else(|| GenerationError::Transport("no text content in response".to_string()))
}
