use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the read-only NLP context and the pluggable similarity scorer.
    pub analyzer: Analyzer,
    pub config: Config,
}
