//! Data model for the screening API.
//!
//! `CandidateAnalysis::from_raw` is the structuring/validation step of the
//! per-resume pipeline: the LLM backend hands back an untyped JSON value, and
//! every field is extracted and checked explicitly. A missing key, a
//! wrong-typed field, or an out-of-range score rejects the whole analysis —
//! scores are never clamped or repaired.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

/// An uploaded resume, alive for the duration of one request.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Structured analysis of a single resume against the job description.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateAnalysis {
    /// How well the resume fits the job description, 0–100.
    pub match_score: u32,
    /// Concise explanation of the score.
    pub summary: String,
    /// Skills from the resume that match the JD (the prompt asks for ≤5,
    /// but the count is not enforced here).
    pub matching_skills: Vec<String>,
    pub file_name: String,
}

impl CandidateAnalysis {
    /// Builds a validated analysis from the analyzer's raw JSON output.
    ///
    /// `match_score` must be a JSON integer in [0, 100] — a float like 87.5
    /// is wrong-typed, not rounded. On rejection the reason is returned so
    /// the pipeline can log why the resume was skipped.
    pub fn from_raw(file_name: &str, raw: &Value) -> Result<Self, String> {
        let obj = raw
            .as_object()
            .ok_or_else(|| "analysis is not a JSON object".to_string())?;

        let match_score = obj
            .get("match_score")
            .ok_or_else(|| "missing field 'match_score'".to_string())?
            .as_i64()
            .ok_or_else(|| "'match_score' is not an integer".to_string())?;
        if !(0..=100).contains(&match_score) {
            return Err(format!("'match_score' {match_score} outside [0, 100]"));
        }

        let summary = obj
            .get("summary")
            .ok_or_else(|| "missing field 'summary'".to_string())?
            .as_str()
            .ok_or_else(|| "'summary' is not a string".to_string())?
            .to_string();

        let skills_value = obj
            .get("matching_skills")
            .ok_or_else(|| "missing field 'matching_skills'".to_string())?
            .as_array()
            .ok_or_else(|| "'matching_skills' is not an array".to_string())?;
        let mut matching_skills = Vec::with_capacity(skills_value.len());
        for skill in skills_value {
            let skill = skill
                .as_str()
                .ok_or_else(|| "'matching_skills' contains a non-string entry".to_string())?;
            matching_skills.push(skill.to_string());
        }

        Ok(CandidateAnalysis {
            match_score: match_score as u32,
            summary,
            matching_skills,
            file_name: file_name.to_string(),
        })
    }
}

/// Response body for `POST /api/v1/screening`.
#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub job_description_summary: String,
    /// Candidates ordered by match_score descending; ties keep upload order.
    pub ranked_candidates: Vec<CandidateAnalysis>,
}

/// Maximum length of the echoed job description summary, in characters.
const JD_SUMMARY_MAX_CHARS: usize = 75;

/// Returns the JD verbatim when short, otherwise the first 75 characters plus
/// a truncation marker. Character-based so a multi-byte boundary never splits.
pub fn summarize_job_description(job_description: &str) -> String {
    if job_description.chars().count() <= JD_SUMMARY_MAX_CHARS {
        job_description.to_string()
    } else {
        let head: String = job_description.chars().take(JD_SUMMARY_MAX_CHARS).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_raw() -> Value {
        json!({
            "match_score": 87,
            "summary": "Strong systems background with direct Rust experience.",
            "matching_skills": ["Rust", "tokio", "PostgreSQL"]
        })
    }

    #[test]
    fn test_from_raw_valid_analysis() {
        let analysis = CandidateAnalysis::from_raw("alice.pdf", &valid_raw()).unwrap();
        assert_eq!(analysis.match_score, 87);
        assert_eq!(analysis.file_name, "alice.pdf");
        assert_eq!(analysis.matching_skills.len(), 3);
    }

    #[test]
    fn test_from_raw_accepts_score_boundaries() {
        for score in [0, 100] {
            let mut raw = valid_raw();
            raw["match_score"] = json!(score);
            let analysis = CandidateAnalysis::from_raw("a.pdf", &raw).unwrap();
            assert_eq!(analysis.match_score, score as u32);
        }
    }

    #[test]
    fn test_from_raw_rejects_score_above_100() {
        let mut raw = valid_raw();
        raw["match_score"] = json!(101);
        let err = CandidateAnalysis::from_raw("a.pdf", &raw).unwrap_err();
        assert!(err.contains("outside"), "unexpected reason: {err}");
    }

    #[test]
    fn test_from_raw_rejects_negative_score() {
        let mut raw = valid_raw();
        raw["match_score"] = json!(-5);
        assert!(CandidateAnalysis::from_raw("a.pdf", &raw).is_err());
    }

    #[test]
    fn test_from_raw_rejects_float_score() {
        // "integer in [0,100]" is strict: 87.5 is wrong-typed, not rounded
        let mut raw = valid_raw();
        raw["match_score"] = json!(87.5);
        let err = CandidateAnalysis::from_raw("a.pdf", &raw).unwrap_err();
        assert!(err.contains("not an integer"), "unexpected reason: {err}");
    }

    #[test]
    fn test_from_raw_rejects_string_score() {
        let mut raw = valid_raw();
        raw["match_score"] = json!("87");
        assert!(CandidateAnalysis::from_raw("a.pdf", &raw).is_err());
    }

    #[test]
    fn test_from_raw_rejects_missing_fields() {
        for field in ["match_score", "summary", "matching_skills"] {
            let mut raw = valid_raw();
            raw.as_object_mut().unwrap().remove(field);
            let err = CandidateAnalysis::from_raw("a.pdf", &raw).unwrap_err();
            assert!(err.contains(field), "expected '{field}' in: {err}");
        }
    }

    #[test]
    fn test_from_raw_rejects_non_string_skill() {
        let mut raw = valid_raw();
        raw["matching_skills"] = json!(["Rust", 42]);
        assert!(CandidateAnalysis::from_raw("a.pdf", &raw).is_err());
    }

    #[test]
    fn test_from_raw_rejects_non_object() {
        assert!(CandidateAnalysis::from_raw("a.pdf", &json!([1, 2, 3])).is_err());
        assert!(CandidateAnalysis::from_raw("a.pdf", &json!("text")).is_err());
    }

    #[test]
    fn test_from_raw_ignores_extra_fields() {
        let mut raw = valid_raw();
        raw["confidence"] = json!("high");
        assert!(CandidateAnalysis::from_raw("a.pdf", &raw).is_ok());
    }

    #[test]
    fn test_summary_short_jd_returned_verbatim() {
        let jd = "Senior Rust Engineer";
        assert_eq!(summarize_job_description(jd), jd);
    }

    #[test]
    fn test_summary_exactly_75_chars_is_not_truncated() {
        let jd = "x".repeat(75);
        assert_eq!(summarize_job_description(&jd), jd);
    }

    #[test]
    fn test_summary_long_jd_truncated_with_marker() {
        let jd = "x".repeat(80);
        let summary = summarize_job_description(&jd);
        assert_eq!(summary, format!("{}...", "x".repeat(75)));
    }

    #[test]
    fn test_summary_truncation_counts_characters_not_bytes() {
        // 76 two-byte characters: byte index 75 would split a scalar value
        let jd = "é".repeat(76);
        let summary = summarize_job_description(&jd);
        assert_eq!(summary, format!("{}...", "é".repeat(75)));
    }
}
