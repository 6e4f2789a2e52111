//! Cover Letter generation — the one streamed model call.
//!
//! Chunks are forwarded to the caller's sink as they arrive and appended to
//! the returned string, so the user watches the letter being written.

pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeData;
use self::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};

/// Streams a tailored cover letter for the refined resume.
///
/// `on_text` receives each chunk as it arrives; the full letter is returned
/// once the stream completes.
pub async fn write_cover_letter<F>(
    llm: &LlmClient,
    resume: &ResumeData,
    job_description: &str,
    on_text: F,
) -> Result<String, AppError>
where
    F: FnMut(&str),
{
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "a job description is required for a cover letter".to_string(),
        ));
    }

    let prompt = build_cover_letter_prompt(resume, job_description)?;

    let letter = llm
        .call_stream(&prompt, COVER_LETTER_SYSTEM, on_text)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter call failed: {e}")))?;

    info!(
        "Cover letter complete: {} chars for {}",
        letter.len(),
        resume.contact.name
    );
    Ok(letter)
}

/// Builds the letter prompt: the full refined resume JSON plus the JD.
pub(crate) fn build_cover_letter_prompt(
    resume: &ResumeData,
    job_description: &str,
) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;

    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{candidate_name}", &resume.contact.name)
        .replace("{resume_json}", &resume_json)
        .replace("{jd_text}", job_description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ContactInfo, ResumeData};

    fn make_resume() -> ResumeData {
        ResumeData {
            contact: ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555".to_string(),
                location: "SF".to_string(),
                linkedin: None,
                portfolio: None,
            },
            summary: "Engineer.".to_string(),
            experience: vec![],
            education: vec![],
            skills: vec![],
            custom_sections: None,
        }
    }

    #[test]
    fn test_prompt_contains_candidate_name_for_signoff() {
        let prompt = build_cover_letter_prompt(&make_resume(), "Rust role").unwrap();
        assert!(prompt.contains("sign off with the candidate's name, Jane Doe"));
    }

    #[test]
    fn test_prompt_embeds_resume_json_and_jd() {
        let prompt = build_cover_letter_prompt(&make_resume(), "We need Rust.").unwrap();
        assert!(prompt.contains("\"jane@example.com\""));
        assert!(prompt.contains("We need Rust."));
    }

    #[test]
    fn test_all_placeholders_are_filled() {
        let prompt = build_cover_letter_prompt(&make_resume(), "jd").unwrap();
        for placeholder in ["{candidate_name}", "{resume_json}", "{jd_text}"] {
            assert!(
                !prompt.contains(placeholder),
                "unfilled placeholder {placeholder}"
            );
        }
    }
}
