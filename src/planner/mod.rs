/// Goal-to-plan generation pipeline
///
/// This module turns a free-text goal into a structured task breakdown:
/// - Builds prompts and delegates reasoning to an external model
/// - Extracts and parses the model's JSON output
/// - Normalizes raw records into canonical tasks with defaults
/// - Aggregates per-task durations into a total time estimate
/// - Falls back to a deterministic plan when reasoning is unavailable
pub mod duration;
pub mod fallback;
pub mod format;
pub mod generator;
pub mod history;
pub mod parser;
pub mod types;
pub mod validate;

// Re-export the generation entry points
pub use generator::{DEFAULT_MODEL, GenerationError, PlanGenerator, PlannerConfig};

// Re-export entities and the supporting pieces
pub use duration::estimate_total_time;
pub use fallback::fallback_plan;
pub use format::PlanFormatter;
pub use history::PlanHistory;
pub use parser::{ParseError, extract_tasks};
pub use types::{Plan, RawTask, Task, TaskStatus};
pub use validate::normalize_tasks;
