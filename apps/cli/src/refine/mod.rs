//! Resume Refinement — one prompt-construction call to the hosted model.
//!
//! Flow: build prompt (resume text + JD + optional user notes) → LLM call
//! with JSON-only system prompt → deserialize into `ResumeData` → validate
//! required fields → retry on incomplete output.
//!
//! The transport-level retry (429/5xx) lives in the LLM client; the retry
//! here only covers structurally valid JSON that fails field validation.

pub mod prompts;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::INTEGRITY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeData;
use self::prompts::{ADDITIONAL_INFO_TEMPLATE, REFINE_PROMPT_TEMPLATE, REFINE_SYSTEM};

/// Max LLM retries when the returned resume fails field validation.
const MAX_REFINE_RETRIES: u32 = 2;

/// Rewrites a resume for a target job description and returns the structured
/// record.
pub async fn refine_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
    additional_info: Option<&str>,
) -> Result<ResumeData, AppError> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "both a resume and a job description are required".to_string(),
        ));
    }

    let prompt = build_refine_prompt(resume_text, job_description, additional_info);

    for attempt in 0..=MAX_REFINE_RETRIES {
        let resume: ResumeData = llm
            .call_json(&prompt, REFINE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Refine call failed: {e}")))?;

        match resume.validate() {
            Ok(()) => {
                info!(
                    "Refined resume for {} ({} experience entries, {} skill groups)",
                    resume.contact.name,
                    resume.experience.len(),
                    resume.skills.len()
                );
                return Ok(resume);
            }
            Err(reason) => {
                warn!(
                    "Refine attempt {}/{}: model returned incomplete resume ({reason}) — retrying",
                    attempt + 1,
                    MAX_REFINE_RETRIES + 1,
                );
            }
        }
    }

    Err(AppError::Llm(format!(
        "Model returned an incomplete resume after {} attempts",
        MAX_REFINE_RETRIES + 1
    )))
}

/// Builds the refinement prompt by filling the template.
pub(crate) fn build_refine_prompt(
    resume_text: &str,
    job_description: &str,
    additional_info: Option<&str>,
) -> String {
    let additional_section = match additional_info {
        Some(info) if !info.trim().is_empty() => {
            ADDITIONAL_INFO_TEMPLATE.replace("{additional_info}", info.trim())
        }
        _ => String::new(),
    };

    REFINE_PROMPT_TEMPLATE
        .replace("{integrity_instruction}", INTEGRITY_INSTRUCTION)
        .replace("{additional_section}", &additional_section)
        .replace("{resume_text}", resume_text)
        .replace("{jd_text}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\njane@example.com\nSenior Engineer at Acme";
    const JD: &str = "We need a Rust engineer who can architect systems.";

    #[test]
    fn test_prompt_contains_resume_and_jd() {
        let prompt = build_refine_prompt(RESUME, JD, None);
        assert!(prompt.contains(RESUME));
        assert!(prompt.contains(JD));
    }

    #[test]
    fn test_prompt_contains_schema_and_integrity_rule() {
        let prompt = build_refine_prompt(RESUME, JD, None);
        assert!(prompt.contains("\"customSections\""));
        assert!(prompt.contains("Do NOT invent new experiences"));
    }

    #[test]
    fn test_no_notes_leaves_no_additional_section() {
        let prompt = build_refine_prompt(RESUME, JD, None);
        assert!(!prompt.contains("ADDITIONAL USER INSTRUCTIONS"));
        // The placeholder itself must be gone too.
        assert!(!prompt.contains("{additional_section}"));
    }

    #[test]
    fn test_blank_notes_treated_as_absent() {
        let prompt = build_refine_prompt(RESUME, JD, Some("   "));
        assert!(!prompt.contains("ADDITIONAL USER INSTRUCTIONS"));
    }

    #[test]
    fn test_notes_injected_with_highest_priority_header() {
        let prompt = build_refine_prompt(RESUME, JD, Some("Add a Certifications section"));
        assert!(prompt.contains("ADDITIONAL USER INSTRUCTIONS (HIGHEST PRIORITY)"));
        assert!(prompt.contains("Add a Certifications section"));
    }

    #[test]
    fn test_all_placeholders_are_filled() {
        let prompt = build_refine_prompt(RESUME, JD, Some("notes"));
        for placeholder in [
            "{integrity_instruction}",
            "{additional_section}",
            "{resume_text}",
            "{jd_text}",
            "{additional_info}",
        ] {
            assert!(
                !prompt.contains(placeholder),
                "unfilled placeholder {placeholder}"
            );
        }
    }
}
