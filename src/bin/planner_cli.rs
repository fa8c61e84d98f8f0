// Minimal CLI entrypoint for the plan generator

use clap::Parser;
use plansmith::llm::ReasoningClient; // bring `.boxed()` into scope
use plansmith::planner::{DEFAULT_MODEL, PlanFormatter, PlanGenerator, PlannerConfig};
use rig::client::ProviderClient;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Goal to break down into tasks
    #[arg(short, long)]
    goal: String,

    /// Timeframe for the whole plan
    #[arg(short, long, default_value = "2 weeks")]
    timeframe: String,

    /// Optional extra context for the breakdown
    #[arg(short, long, default_value = "")]
    context: String,

    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    plansmith::load_env();

    let cli = Cli::parse();

    let config = PlannerConfig {
        model: std::env::var("PLANNER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        ..PlannerConfig::default()
    };

    let mut generator = if std::env::var("ANTHROPIC_API_KEY").is_ok() {
        let llm = rig::providers::anthropic::Client::from_env();
        PlanGenerator::new(ReasoningClient::boxed(llm), config)
    } else {
        eprintln!("⚠️  ANTHROPIC_API_KEY not set, serving the built-in fallback plan");
        PlanGenerator::without_client(config)
    };

    let plan = generator.generate(&cli.goal, &cli.timeframe, &cli.context).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        let formatter = PlanFormatter::default();
        println!("{}", formatter.render(&plan)?);
    }

    Ok(())
}
