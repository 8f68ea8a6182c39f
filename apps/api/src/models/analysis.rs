//! Analysis result models — the wire shape rendered back to the caller.

use serde::{Deserialize, Serialize};

/// Per-section scores. Each field is 1–100 from the model, 0 under fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact_info: u32,
    pub professional_summary: u32,
    pub work_experience: u32,
    pub education: u32,
    pub skills: u32,
    pub formatting: u32,
}

/// Keyword coverage sub-report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub relevant_keywords_found: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_density_score: u32, // 1 – 100, 0 under fallback
}

/// Full critique of one resume. Produced once per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32, // 1 – 100, 0 under fallback
    pub section_scores: SectionScores,
    pub strengths: Vec<String>,    // 3–5 typical
    pub weaknesses: Vec<String>,   // 3–5 typical
    pub suggestions: Vec<String>,  // 5–8 typical
    pub missing_elements: Vec<String>,
    pub keyword_analysis: KeywordAnalysis,
    pub optimized_summary: String,
    pub ats_score: u32,         // 1 – 100, 0 under fallback
    pub readability_score: u32, // 1 – 100, 0 under fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_report_deserializes_full_wire_shape() {
        let json = r#"{
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
                "missing_keywords": ["Kubernetes"],
                "keyword_density_score": 60
            },
            "optimized_summary": "Seasoned engineer with...",
            "ats_score": 72,
            "readability_score": 81
        }"#;

        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.overall_score, 78);
        assert_eq!(report.section_scores.contact_info, 90);
        assert_eq!(report.strengths.len(), 3);
        assert_eq!(report.suggestions.len(), 5);
        assert_eq!(report.keyword_analysis.missing_keywords, vec!["Kubernetes"]);
        assert_eq!(report.ats_score, 72);
    }

    #[test]
    fn test_analysis_report_rejects_missing_sections() {
        // A response without keyword_analysis is not a usable report.
        let json = r#"{
            "overall_score": 50,
            "section_scores": {
                "contact_info": 50, "professional_summary": 50, "work_experience": 50,
                "education": 50, "skills": 50, "formatting": 50
            },
            "strengths": [], "weaknesses": [], "suggestions": [], "missing_elements": [],
            "optimized_summary": "x",
            "ats_score": 50,
            "readability_score": 50
        }"#;

        assert!(serde_json::from_str::<AnalysisReport>(json).is_err());
    }

    #[test]
    fn test_analysis_report_round_trips_through_serde() {
        let report = AnalysisReport {
            overall_score: 1,
            section_scores: SectionScores {
                contact_info: 1,
                professional_summary: 1,
                work_experience: 1,
                education: 1,
                skills: 1,
                formatting: 1,
            },
            strengths: vec!["a".into()],
            weaknesses: vec![],
            suggestions: vec![],
            missing_elements: vec![],
            keyword_analysis: KeywordAnalysis {
                relevant_keywords_found: vec![],
                missing_keywords: vec![],
                keyword_density_score: 1,
            },
            optimized_summary: String::new(),
            ats_score: 1,
            readability_score: 1,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
