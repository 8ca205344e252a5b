//! Resume analyzer — the "text pair → structured analysis" collaborator.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, so the orchestrator and the
//! tests never depend on the concrete LLM backend. The production backend
//! returns the model's output as an untyped `serde_json::Value`; typing and
//! range validation happen in the pipeline's structuring step
//! (`CandidateAnalysis::from_raw`), keeping "the model answered" and "the
//! answer is usable" as separate failure stages.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::prompts::{SCREENING_PROMPT_TEMPLATE, SCREENING_SYSTEM};

/// Analyzes one resume against a job description.
///
/// Must be safe for concurrent invocation: the batch orchestrator calls
/// `analyze` once per uploaded resume, all in flight at the same time.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str, job_description: &str)
        -> Result<Value, AppError>;
}

/// Production analyzer backed by the Claude Messages API.
pub struct LlmResumeAnalyzer {
    llm: LlmClient,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Value, AppError> {
        let prompt = SCREENING_PROMPT_TEMPLATE
            .replace("{job_description}", job_description)
            .replace("{resume_text}", resume_text);

        self.llm
            .call_json::<Value>(&prompt, SCREENING_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))
    }
}
