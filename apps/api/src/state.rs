use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// The LLM client carries the read-only upstream credential; nothing here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
