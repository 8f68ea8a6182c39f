//! Resume Analyzer — one LLM call per critique, fixed fallback on any failure.
//!
//! `analyze` is total: whatever goes wrong between here and the provider
//! (transport, API status, malformed JSON), the caller still receives a
//! structurally valid report. The fallible step is internal and explicit.

use std::sync::Arc;

use tracing::warn;

use crate::analysis::prompts::{
    ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM, OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM,
};
use crate::llm_client::{strip_json_fences, LlmBackend, LlmError};
use crate::models::analysis::{AnalysisReport, KeywordAnalysis, SectionScores};

/// Output token budget for the structured critique call.
const ANALYZE_MAX_TOKENS: u32 = 2000;
/// Output token budget for the optimized-content call.
const OPTIMIZE_MAX_TOKENS: u32 = 1500;

/// Fixed reply when the optimization call fails.
pub const OPTIMIZE_ERROR_TEXT: &str = "Error generating optimized content. Please try again.";

/// Critiques resume text through the injected LLM backend.
/// Holds no state across calls.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    backend: Arc<dyn LlmBackend>,
}

impl ResumeAnalyzer {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Analyzes resume text. Never fails: any backend or parse failure is
    /// replaced by `fallback_analysis()`.
    pub async fn analyze(&self, resume_text: &str) -> AnalysisReport {
        match self.try_analyze(resume_text).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Resume analysis failed, serving fallback: {e}");
                fallback_analysis()
            }
        }
    }

    async fn try_analyze(&self, resume_text: &str) -> Result<AnalysisReport, LlmError> {
        let prompt = ANALYZE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        let raw = self
            .backend
            .complete(&prompt, ANALYZE_SYSTEM, ANALYZE_MAX_TOKENS)
            .await?;
        let json = strip_json_fences(&raw);
        serde_json::from_str(json).map_err(LlmError::Parse)
    }

    /// Generates optimized resume content from the original text and its
    /// critique. Returns a fixed error string when the call fails.
    pub async fn optimize(&self, original_text: &str, analysis: &AnalysisReport) -> String {
        let prompt = OPTIMIZE_PROMPT_TEMPLATE
            .replace("{original_text}", original_text)
            .replace("{overall_score}", &analysis.overall_score.to_string())
            .replace("{weaknesses}", &analysis.weaknesses.join(", "))
            .replace("{suggestions}", &analysis.suggestions.join(", "))
            .replace(
                "{missing_keywords}",
                &analysis.keyword_analysis.missing_keywords.join(", "),
            );

        match self
            .backend
            .complete(&prompt, OPTIMIZE_SYSTEM, OPTIMIZE_MAX_TOKENS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Optimized-content generation failed: {e}");
                OPTIMIZE_ERROR_TEXT.to_string()
            }
        }
    }
}

/// The fixed zero-score report served when no usable model response exists.
/// A pure function of nothing — independent of why the call failed.
pub fn fallback_analysis() -> AnalysisReport {
    AnalysisReport {
        overall_score: 0,
        section_scores: SectionScores {
            contact_info: 0,
            professional_summary: 0,
            work_experience: 0,
            education: 0,
            skills: 0,
            formatting: 0,
        },
        strengths: vec!["Unable to analyze - please try again".to_string()],
        weaknesses: vec!["Analysis failed - please check your resume format".to_string()],
        suggestions: vec![
            "Please ensure your resume contains readable text and try uploading again".to_string(),
        ],
        missing_elements: vec!["Analysis could not be completed".to_string()],
        keyword_analysis: KeywordAnalysis {
            relevant_keywords_found: vec![],
            missing_keywords: vec!["Analysis failed".to_string()],
            keyword_density_score: 0,
        },
        optimized_summary: "Analysis failed. Please try uploading your resume again.".to_string(),
        ats_score: 0,
        readability_score: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const VALID_REPORT_JSON: &str = r#"{
        "overall_score": 78,
        "section_scores": {
            "contact_info": 90,
            "professional_summary": 70,
            "work_experience": 80,
            "education": 85,
            "skills": 75,
            "formatting": 65
        },
        "strengths": ["Clear chronology", "Quantified impact", "Relevant stack"],
        "weaknesses": ["No summary", "Dense formatting", "Missing links"],
        "suggestions": ["Add a summary", "Tighten bullets", "Add metrics", "Link portfolio", "Name technologies"],
        "missing_elements": ["LinkedIn URL"],
        "keyword_analysis": {
            "relevant_keywords_found": ["Rust", "APIs"],
            "missing_keywords": ["Kubernetes", "gRPC"],
            "keyword_density_score": 60
        },
        "optimized_summary": "Seasoned engineer with a track record of shipping.",
        "ats_score": 72,
        "readability_score": 81
    }"#;

    /// Backend double that always returns the same text.
    struct CannedBackend(String);

    #[async_trait]
    impl LlmBackend for CannedBackend {
        async fn complete(
            &self,
            _prompt: &str,
            _system: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    /// Backend double that always fails.
    struct FailingBackend;

    #[async_trait]
    impl LlmBackend for FailingBackend {
        async fn complete(
            &self,
            _prompt: &str,
            _system: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "provider down".to_string(),
            })
        }
    }

    /// Backend double that records every prompt it receives.
    struct RecordingBackend {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl LlmBackend for RecordingBackend {
        async fn complete(
            &self,
            prompt: &str,
            _system: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn analyzer_with(backend: impl LlmBackend + 'static) -> ResumeAnalyzer {
        ResumeAnalyzer::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn test_analyze_parses_well_formed_response() {
        let analyzer = analyzer_with(CannedBackend(VALID_REPORT_JSON.to_string()));
        let report = analyzer.analyze("resume text").await;

        assert_eq!(report.overall_score, 78);
        assert_eq!(report.section_scores.formatting, 65);
        assert_eq!(report.keyword_analysis.missing_keywords.len(), 2);
    }

    #[tokio::test]
    async fn test_analyze_strips_markdown_fences() {
        let fenced = format!("```json\n{VALID_REPORT_JSON}\n```");
        let analyzer = analyzer_with(CannedBackend(fenced));
        let report = analyzer.analyze("resume text").await;

        assert_eq!(report.overall_score, 78);
    }

    #[tokio::test]
    async fn test_analyze_returns_fallback_when_backend_fails() {
        let analyzer = analyzer_with(FailingBackend);
        let report = analyzer.analyze("resume text").await;

        assert_eq!(report, fallback_analysis());
    }

    #[tokio::test]
    async fn test_analyze_returns_fallback_on_non_json_response() {
        let analyzer = analyzer_with(CannedBackend("Sorry, I cannot help with that.".into()));
        let report = analyzer.analyze("resume text").await;

        assert_eq!(report, fallback_analysis());
    }

    #[tokio::test]
    async fn test_analyze_returns_fallback_on_wrong_json_shape() {
        let analyzer = analyzer_with(CannedBackend(r#"{"overall_score": 50}"#.into()));
        let report = analyzer.analyze("resume text").await;

        assert_eq!(report, fallback_analysis());
    }

    #[tokio::test]
    async fn test_analyze_embeds_resume_text_in_prompt() {
        let backend = RecordingBackend {
            prompts: Mutex::new(vec![]),
            reply: VALID_REPORT_JSON.to_string(),
        };
        let backend = Arc::new(backend);
        let analyzer = ResumeAnalyzer::new(backend.clone());
        analyzer.analyze("Jane Doe, Staff Engineer").await;

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("Jane Doe, Staff Engineer"));
    }

    #[tokio::test]
    async fn test_optimize_returns_error_text_when_backend_fails() {
        let analyzer = analyzer_with(FailingBackend);
        let out = analyzer.optimize("resume text", &fallback_analysis()).await;

        assert_eq!(out, OPTIMIZE_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_optimize_embeds_critique_fields_in_prompt() {
        let backend = Arc::new(RecordingBackend {
            prompts: Mutex::new(vec![]),
            reply: "An improved resume.".to_string(),
        });
        let analyzer = ResumeAnalyzer::new(backend.clone());

        let report: AnalysisReport = serde_json::from_str(VALID_REPORT_JSON).unwrap();
        let out = analyzer.optimize("original resume body", &report).await;
        assert_eq!(out, "An improved resume.");

        let prompts = backend.prompts.lock().unwrap();
        let prompt = &prompts[0];
        assert!(prompt.contains("original resume body"));
        assert!(prompt.contains("78/100"));
        assert!(prompt.contains("No summary, Dense formatting, Missing links"));
        assert!(prompt.contains("Kubernetes, gRPC"));
    }

    #[test]
    fn test_fallback_analysis_has_zero_scores_and_placeholders() {
        let fallback = fallback_analysis();

        assert_eq!(fallback.overall_score, 0);
        assert_eq!(fallback.section_scores.contact_info, 0);
        assert_eq!(fallback.section_scores.formatting, 0);
        assert_eq!(fallback.ats_score, 0);
        assert_eq!(fallback.readability_score, 0);
        assert_eq!(fallback.keyword_analysis.keyword_density_score, 0);
        assert_eq!(
            fallback.strengths,
            vec!["Unable to analyze - please try again"]
        );
        assert_eq!(
            fallback.keyword_analysis.missing_keywords,
            vec!["Analysis failed"]
        );
        assert!(fallback.keyword_analysis.relevant_keywords_found.is_empty());
        assert_eq!(
            fallback.optimized_summary,
            "Analysis failed. Please try uploading your resume again."
        );
    }
}
