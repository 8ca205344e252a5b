use std::sync::Arc;

use crate::parser::TextExtractor;
use crate::screening::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators are trait objects constructed once in `main` and passed
/// down — never reached through globals — so tests can swap in mocks and the
/// LLM backend stays a startup decision.
#[derive(Clone)]
pub struct AppState {
    /// "PDF bytes → text" collaborator.
    pub extractor: Arc<dyn TextExtractor>,
    /// "resume text + JD → structured analysis" collaborator.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
