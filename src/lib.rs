pub mod llm;
pub mod planner;

/// Load environment variables for the planner/tests.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
