use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The resume analyzer with its LLM backend injected at startup.
    pub analyzer: ResumeAnalyzer,
    pub config: Config,
}
