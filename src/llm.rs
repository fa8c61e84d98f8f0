use rig::{completion::AssistantContent, message::Message};

use rig::client::CompletionClient;
use rig::completion::CompletionModel;

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub choice: rig::OneOrMany<AssistantContent>,
}

impl CompletionResponse {
    /// First text block of the response, if any.
    pub fn text(&self) -> Option<String> {
        self.choice.iter().find_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text.clone()),
            _ => None,
        })
    }
}

pub struct Completion {
    pub model: String,
    pub message: Message,
    pub preamble: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u64>,
}

impl Completion {
    pub fn new(model: String, message: Message) -> Self {
        Self { model, message, preamble: None, temperature: None, max_tokens: None }
    }
    pub fn preamble(mut self, p: String) -> Self { self.preamble = Some(p); self }
    pub fn temperature(mut self, t: f64) -> Self { self.temperature = Some(t); self }
    pub fn max_tokens(mut self, m: u64) -> Self { self.max_tokens = Some(m); self }
}

/// Boundary to the external reasoning service. Implementations turn a prompt
/// pair into free text; everything past this trait is opaque to the planner.
pub trait ReasoningClientDyn: Send + Sync {
    fn completion(&self, completion: Completion) -> std::pin::Pin<Box<dyn std::future::Future<Output = eyre::Result<CompletionResponse>> + Send + '_>>;
}

pub trait ReasoningClient: ReasoningClientDyn + 'static {
    fn boxed(self) -> Box<dyn ReasoningClientDyn> where Self: Sized { Box::new(self) }
}

impl<T: ReasoningClientDyn + 'static> ReasoningClient for T {}

impl ReasoningClientDyn for rig::providers::anthropic::Client {
    fn completion(&self, completion: Completion) -> std::pin::Pin<Box<dyn std::future::Future<Output = eyre::Result<CompletionResponse>> + Send + '_>> {
        Box::pin(async move {
            let model = self.completion_model(&completion.model);
            let mut request = model.completion_request(completion.message);
            if let Some(preamble) = completion.preamble {
                request = request.preamble(preamble);
            }
            if let Some(temperature) = completion.temperature {
                request = request.temperature(temperature);
            }
            if let Some(max_tokens) = completion.max_tokens {
                request = request.max_tokens(max_tokens);
            }
            let response = request.send().await?;
            Ok(CompletionResponse { choice: response.choice })
        })
    }
}
