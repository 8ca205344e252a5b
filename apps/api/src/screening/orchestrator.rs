//! Batch orchestration — the core of the screener.
//!
//! Fans one per-resume pipeline (extract → analyze → validate) out per
//! uploaded file, waits on all of them (a full barrier, never
//! first-success-wins), and assembles a deterministically ranked list.
//!
//! Failure policy: anything that goes wrong for ONE resume — unparseable PDF,
//! LLM transport error, schema-invalid analysis — is absorbed into a skip for
//! that resume and logged. It never cancels sibling pipelines and never fails
//! the batch. The only batch-fatal condition is a panicked screening task.

use std::cmp::Reverse;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::parser::TextExtractor;
use crate::screening::analyzer::ResumeAnalyzer;
use crate::screening::models::{CandidateAnalysis, ResumeFile};

/// Pipeline stage that caused a resume to be skipped. Logged for operability.
#[derive(Debug, Clone, Copy)]
enum SkipStage {
    Extraction,
    Analysis,
    Validation,
}

/// Screens every uploaded resume concurrently and returns the ranked result.
///
/// Output ordering is fully determined by (match_score descending, then
/// submission order for ties) — task completion order never leaks into the
/// result. Zero files returns an empty ranking without touching either
/// collaborator; all-resumes-failed returns an empty ranking as a success.
pub async fn screen_resumes(
    extractor: Arc<dyn TextExtractor>,
    analyzer: Arc<dyn ResumeAnalyzer>,
    job_description: &str,
    files: Vec<ResumeFile>,
) -> Result<Vec<CandidateAnalysis>, AppError> {
    let total = files.len();
    // Read-only share of the JD across all pipeline tasks.
    let job_description: Arc<str> = Arc::from(job_description);

    let mut set = JoinSet::new();
    for (index, file) in files.into_iter().enumerate() {
        let extractor = Arc::clone(&extractor);
        let analyzer = Arc::clone(&analyzer);
        let jd = Arc::clone(&job_description);
        set.spawn(async move {
            let outcome =
                screen_single_resume(extractor.as_ref(), analyzer.as_ref(), &jd, file).await;
            (index, outcome)
        });
    }

    // Full barrier: drain the set before assembling any output. Results are
    // re-placed into their submission slot so the later stable sort sees the
    // original upload order, not completion order.
    let mut slots: Vec<Option<CandidateAnalysis>> = vec![None; total];
    while let Some(joined) = set.join_next().await {
        let (index, outcome) =
            joined.map_err(|e| AppError::Internal(anyhow!("screening task panicked: {e}")))?;
        slots[index] = outcome;
    }

    let mut ranked: Vec<CandidateAnalysis> = slots.into_iter().flatten().collect();
    // slice::sort_by_key is stable, so equal scores keep submission order.
    ranked.sort_by_key(|candidate| Reverse(candidate.match_score));

    info!("screened {}/{} resumes successfully", ranked.len(), total);
    Ok(ranked)
}

/// The per-resume pipeline: extraction → analysis → structuring/validation.
/// Yields `None` on any failure; no error crosses this boundary.
async fn screen_single_resume(
    extractor: &dyn TextExtractor,
    analyzer: &dyn ResumeAnalyzer,
    job_description: &str,
    file: ResumeFile,
) -> Option<CandidateAnalysis> {
    let ResumeFile { file_name, data } = file;

    let Some(resume_text) = extractor.extract(data.to_vec()).await else {
        return skip(&file_name, SkipStage::Extraction, "no text extracted");
    };

    let raw = match analyzer.analyze(&resume_text, job_description).await {
        Ok(raw) => raw,
        Err(e) => return skip(&file_name, SkipStage::Analysis, &e.to_string()),
    };

    match CandidateAnalysis::from_raw(&file_name, &raw) {
        Ok(analysis) => Some(analysis),
        Err(reason) => skip(&file_name, SkipStage::Validation, &reason),
    }
}

fn skip(file_name: &str, stage: SkipStage, reason: &str) -> Option<CandidateAnalysis> {
    warn!(file = %file_name, stage = ?stage, "skipping resume: {reason}");
    None
}
