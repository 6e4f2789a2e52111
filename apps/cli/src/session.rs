//! Session state wiring.
//!
//! Extracted resume text, the pasted job description, the refined result,
//! and the cover letter all live here. One operation runs at a time, gated
//! by the activity flag; every failure is reduced to a single flat
//! user-facing message while the full error is logged.
#![allow(dead_code)]

use std::path::Path;

use tracing::error;

use crate::cover;
use crate::errors::AppError;
use crate::export;
use crate::ingest;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeData;
use crate::refine;

// Flat user-facing messages, one per failing action.
const MSG_PARSE_FAILED: &str = "Failed to parse the file. Please try another one.";
const MSG_NEED_INPUTS: &str = "Please provide a resume and a job description.";
const MSG_REFINE_FAILED: &str =
    "Failed to refine resume. The AI model may be overloaded or your API key is invalid.";
const MSG_REFINE_FIRST: &str = "Please refine your resume first.";
const MSG_LETTER_FAILED: &str = "Failed to generate cover letter. Please try again later.";
const MSG_EXPORT_FAILED: &str = "Failed to export the document. Please try again.";
const MSG_BUSY: &str = "Another operation is already in progress.";

/// What the session is currently doing. Exactly one operation is in flight
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    ParsingResume,
    Refining,
    WritingCoverLetter,
    Exporting,
}

pub struct Session {
    llm: LlmClient,
    resume_text: String,
    file_name: String,
    job_description: String,
    refined: Option<ResumeData>,
    cover_letter: String,
    last_error: Option<String>,
    activity: Activity,
}

impl Session {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            resume_text: String::new(),
            file_name: String::new(),
            job_description: String::new(),
            refined: None,
            cover_letter: String::new(),
            last_error: None,
            activity: Activity::Idle,
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn refined(&self) -> Option<&ResumeData> {
        self.refined.as_ref()
    }

    pub fn cover_letter(&self) -> &str {
        &self.cover_letter
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    // ── inputs ──────────────────────────────────────────────────────────────

    pub fn set_job_description(&mut self, jd: impl Into<String>) {
        self.job_description = jd.into();
    }

    /// Installs a previously refined resume (loaded from saved JSON) so the
    /// letter and export actions can run without another refine call.
    pub fn restore_refined(&mut self, resume: ResumeData) -> Result<(), AppError> {
        resume
            .validate()
            .map_err(|reason| AppError::Validation(format!("saved resume is invalid: {reason}")))?;
        self.refined = Some(resume);
        Ok(())
    }

    /// Extracts text from an uploaded resume file. A new upload always clears
    /// the previous refined output, letter, and error.
    pub fn load_resume(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.begin(Activity::ParsingResume)?;
        self.refined = None;
        self.cover_letter.clear();
        self.last_error = None;

        let result = ingest::extract_text(file_name, bytes);
        self.finish();

        match result {
            Ok(text) => {
                self.resume_text = text;
                self.file_name = file_name.to_string();
                Ok(())
            }
            Err(e) => {
                error!("Resume parsing failed: {e}");
                self.last_error = Some(MSG_PARSE_FAILED.to_string());
                Err(e)
            }
        }
    }

    // ── operations ──────────────────────────────────────────────────────────

    /// Runs the refine call against the loaded resume text and JD.
    pub async fn refine(&mut self, additional_info: Option<&str>) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() || self.job_description.trim().is_empty() {
            self.last_error = Some(MSG_NEED_INPUTS.to_string());
            return Err(AppError::Validation(MSG_NEED_INPUTS.to_string()));
        }

        self.begin(Activity::Refining)?;
        self.refined = None;
        self.cover_letter.clear();
        self.last_error = None;

        let result = refine::refine_resume(
            &self.llm,
            &self.resume_text,
            &self.job_description,
            additional_info,
        )
        .await;
        self.finish();

        match result {
            Ok(resume) => {
                self.refined = Some(resume);
                Ok(())
            }
            Err(e) => {
                error!("Refinement failed: {e}");
                self.last_error = Some(MSG_REFINE_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Streams a cover letter for the refined resume, forwarding chunks to
    /// `on_text` and accumulating the full letter in the session.
    pub async fn write_cover_letter<F>(&mut self, on_text: F) -> Result<(), AppError>
    where
        F: FnMut(&str),
    {
        let Some(resume) = self.refined.clone() else {
            self.last_error = Some(MSG_REFINE_FIRST.to_string());
            return Err(AppError::Validation(MSG_REFINE_FIRST.to_string()));
        };

        self.begin(Activity::WritingCoverLetter)?;
        self.cover_letter.clear();
        self.last_error = None;

        let result =
            cover::write_cover_letter(&self.llm, &resume, &self.job_description, on_text).await;
        self.finish();

        match result {
            Ok(letter) => {
                self.cover_letter = letter;
                Ok(())
            }
            Err(e) => {
                error!("Cover letter generation failed: {e}");
                self.last_error = Some(MSG_LETTER_FAILED.to_string());
                Err(e)
            }
        }
    }

    pub fn export_pdf(&mut self, path: &Path) -> Result<(), AppError> {
        self.export_with(path, export::write_pdf)
    }

    pub fn export_docx(&mut self, path: &Path) -> Result<(), AppError> {
        self.export_with(path, export::write_docx)
    }

    fn export_with(
        &mut self,
        path: &Path,
        writer: fn(&ResumeData, &Path) -> Result<(), AppError>,
    ) -> Result<(), AppError> {
        let Some(resume) = self.refined.clone() else {
            self.last_error = Some(MSG_REFINE_FIRST.to_string());
            return Err(AppError::Validation(MSG_REFINE_FIRST.to_string()));
        };

        self.begin(Activity::Exporting)?;
        self.last_error = None;

        let result = writer(&resume, path);
        self.finish();

        if let Err(e) = &result {
            error!("Export failed: {e}");
            self.last_error = Some(MSG_EXPORT_FAILED.to_string());
        }
        result
    }

    // ── gating ──────────────────────────────────────────────────────────────

    fn begin(&mut self, activity: Activity) -> Result<(), AppError> {
        if self.is_busy() {
            return Err(AppError::Validation(MSG_BUSY.to_string()));
        }
        self.activity = activity;
        Ok(())
    }

    fn finish(&mut self) {
        self.activity = Activity::Idle;
    }

    #[cfg(test)]
    fn force_activity(&mut self, activity: Activity) {
        self.activity = activity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::docx::tests::build_docx_bytes;
    use crate::models::resume::{ContactInfo, ResumeData};

    fn make_session() -> Session {
        Session::new(LlmClient::new("test-key".to_string()))
    }

    fn refined_fixture() -> ResumeData {
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
    fn test_new_session_is_idle_and_empty() {
        let session = make_session();
        assert_eq!(session.activity(), Activity::Idle);
        assert!(session.resume_text().is_empty());
        assert!(session.refined().is_none());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_load_resume_stores_text_and_clears_outputs() {
        let mut session = make_session();
        session.refined = Some(refined_fixture());
        session.cover_letter = "old letter".to_string();
        session.last_error = Some("old error".to_string());

        let bytes = build_docx_bytes("<w:p><w:r><w:t>Jane Doe, Engineer</w:t></w:r></w:p>");
        session.load_resume("resume.docx", &bytes).unwrap();

        assert!(session.resume_text().contains("Jane Doe, Engineer"));
        assert_eq!(session.file_name(), "resume.docx");
        assert!(session.refined().is_none(), "stale refine result must not survive");
        assert!(session.cover_letter().is_empty());
        assert!(session.last_error().is_none());
        assert_eq!(session.activity(), Activity::Idle);
    }

    #[test]
    fn test_load_resume_failure_sets_flat_message() {
        let mut session = make_session();
        let result = session.load_resume("resume.xlsx", b"whatever");

        assert!(result.is_err());
        assert_eq!(session.last_error(), Some(MSG_PARSE_FAILED));
        assert_eq!(session.activity(), Activity::Idle, "session must return to idle");
    }

    #[tokio::test]
    async fn test_refine_without_inputs_is_rejected() {
        let mut session = make_session();
        let result = session.refine(None).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.last_error(), Some(MSG_NEED_INPUTS));
    }

    #[tokio::test]
    async fn test_refine_requires_job_description_too() {
        let mut session = make_session();
        let bytes = build_docx_bytes("<w:p><w:r><w:t>resume text</w:t></w:r></w:p>");
        session.load_resume("resume.docx", &bytes).unwrap();

        let result = session.refine(None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_cover_letter_requires_refined_resume() {
        let mut session = make_session();
        session.set_job_description("a job");

        let result = session.write_cover_letter(|_| {}).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.last_error(), Some(MSG_REFINE_FIRST));
    }

    #[test]
    fn test_export_requires_refined_resume() {
        let mut session = make_session();
        let dir = tempfile::tempdir().unwrap();

        let result = session.export_pdf(&dir.path().join("out.pdf"));
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.last_error(), Some(MSG_REFINE_FIRST));
    }

    #[test]
    fn test_export_pdf_after_restore() {
        let mut session = make_session();
        session.restore_refined(refined_fixture()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        session.export_pdf(&path).unwrap();

        assert!(path.exists());
        assert!(session.last_error().is_none());
        assert_eq!(session.activity(), Activity::Idle);
    }

    #[test]
    fn test_restore_refined_rejects_invalid_record() {
        let mut session = make_session();
        let mut resume = refined_fixture();
        resume.contact.name = String::new();

        assert!(matches!(
            session.restore_refined(resume),
            Err(AppError::Validation(_))
        ));
        assert!(session.refined().is_none());
    }

    #[test]
    fn test_busy_session_rejects_new_operation() {
        let mut session = make_session();
        session.force_activity(Activity::Refining);

        let bytes = build_docx_bytes("<w:p><w:r><w:t>text</w:t></w:r></w:p>");
        let result = session.load_resume("resume.docx", &bytes);

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.activity(), Activity::Refining, "activity untouched");
    }
}
