use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Handlers are otherwise stateless; the LLM client carries the injected credential.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
