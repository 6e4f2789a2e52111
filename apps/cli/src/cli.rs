//! Command surface. `refine` and `cover-letter` call the hosted model and
//! need `ANTHROPIC_API_KEY`; `export` and `extract` run fully offline.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::export;
use crate::ingest;
use crate::llm_client::{self, LlmClient};
use crate::models::resume::ResumeData;
use crate::preview;
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "tailor",
    version,
    about = "Tailor a resume to a job description with a hosted AI model"
)]
pub struct Cli {
    /// Raise the log level to debug.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the resume, refine it against the job description, and preview
    Refine {
        /// Resume file (.pdf or .docx)
        #[arg(long)]
        resume: PathBuf,
        /// Job description text file
        #[arg(long)]
        jd: PathBuf,
        /// Extra instructions forwarded to the model with highest priority
        #[arg(long)]
        notes: Option<String>,
        /// Save the refined resume as JSON for later export or cover letters
        #[arg(long)]
        json: Option<PathBuf>,
        /// Also export the refined resume as PDF
        #[arg(long)]
        pdf: Option<PathBuf>,
        /// Also export the refined resume as DOCX
        #[arg(long)]
        docx: Option<PathBuf>,
    },
    /// Stream a tailored cover letter from a saved refine result
    CoverLetter {
        /// Refined resume JSON produced by `refine --json`
        #[arg(long)]
        refined: PathBuf,
        /// Job description text file
        #[arg(long)]
        jd: PathBuf,
        /// Save the letter to a file as well
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Re-export a saved refine result without calling the model
    Export {
        /// Refined resume JSON produced by `refine --json`
        #[arg(long)]
        refined: PathBuf,
        /// PDF output path; bare --pdf derives `<Name>_Resume.pdf`
        #[arg(long, num_args = 0..=1)]
        pdf: Option<Option<PathBuf>>,
        /// DOCX output path; bare --docx derives `<Name>_Resume.docx`
        #[arg(long, num_args = 0..=1)]
        docx: Option<Option<PathBuf>>,
    },
    /// Print the text extracted from a resume file
    Extract {
        /// Resume file (.pdf or .docx)
        #[arg(long)]
        resume: PathBuf,
    },
}

/// Dispatches the parsed command. Returns the flat message to show the user
/// on failure via `AppError`'s `Display`.
pub async fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Refine {
            resume,
            jd,
            notes,
            json,
            pdf,
            docx,
        } => run_refine(&resume, &jd, notes.as_deref(), json, pdf, docx).await,
        Command::CoverLetter { refined, jd, out } => run_cover_letter(&refined, &jd, out).await,
        Command::Export { refined, pdf, docx } => run_export(&refined, pdf, docx),
        Command::Extract { resume } => run_extract(&resume),
    }
}

async fn run_refine(
    resume_path: &Path,
    jd_path: &Path,
    notes: Option<&str>,
    json_out: Option<PathBuf>,
    pdf_out: Option<PathBuf>,
    docx_out: Option<PathBuf>,
) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let mut session = Session::new(LlmClient::new(config.anthropic_api_key));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let file_name = file_name_of(resume_path);
    let bytes = std::fs::read(resume_path)?;
    session.load_resume(&file_name, &bytes)?;
    info!(
        "Parsed {} ({} chars of text)",
        session.file_name(),
        session.resume_text().len()
    );
    session.set_job_description(std::fs::read_to_string(jd_path)?);

    println!("Optimizing your resume...");
    session.refine(notes).await?;

    let refined = session
        .refined()
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("refine succeeded without a result")))?;

    println!("{}", preview::render_resume_text(&refined));

    if let Some(path) = json_out {
        let json = serde_json::to_string_pretty(&refined)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
        std::fs::write(&path, json)?;
        info!("Saved refined resume to {}", path.display());
        println!("Saved refined resume to {}", path.display());
    }
    if let Some(path) = pdf_out {
        session.export_pdf(&path)?;
        println!("Exported PDF to {}", path.display());
    }
    if let Some(path) = docx_out {
        session.export_docx(&path)?;
        println!("Exported DOCX to {}", path.display());
    }

    Ok(())
}

async fn run_cover_letter(
    refined_path: &Path,
    jd_path: &Path,
    out: Option<PathBuf>,
) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let mut session = Session::new(LlmClient::new(config.anthropic_api_key));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    session.restore_refined(load_refined(refined_path)?)?;
    session.set_job_description(std::fs::read_to_string(jd_path)?);

    println!("Crafting your cover letter...\n");
    session
        .write_cover_letter(|chunk| {
            print!("{chunk}");
            let _ = std::io::stdout().flush();
        })
        .await?;
    println!();

    if let Some(path) = out {
        std::fs::write(&path, session.cover_letter())?;
        println!("Saved cover letter to {}", path.display());
    }

    Ok(())
}

fn run_export(
    refined_path: &Path,
    pdf_out: Option<Option<PathBuf>>,
    docx_out: Option<Option<PathBuf>>,
) -> Result<(), AppError> {
    if pdf_out.is_none() && docx_out.is_none() {
        return Err(AppError::Validation(
            "choose at least one of --pdf or --docx".to_string(),
        ));
    }

    let resume = load_refined(refined_path)?;

    if let Some(given) = pdf_out {
        let path = given
            .unwrap_or_else(|| PathBuf::from(format!("{}_Resume.pdf", resume.export_file_stem())));
        export::write_pdf(&resume, &path)?;
        println!("Exported PDF to {}", path.display());
    }
    if let Some(given) = docx_out {
        let path = given
            .unwrap_or_else(|| PathBuf::from(format!("{}_Resume.docx", resume.export_file_stem())));
        export::write_docx(&resume, &path)?;
        println!("Exported DOCX to {}", path.display());
    }

    Ok(())
}

fn run_extract(resume_path: &Path) -> Result<(), AppError> {
    let file_name = file_name_of(resume_path);
    let bytes = std::fs::read(resume_path)?;
    let text = ingest::extract_text(&file_name, &bytes)?;
    println!("{text}");
    Ok(())
}

/// Loads and validates a saved refine result.
fn load_refined(path: &Path) -> Result<ResumeData, AppError> {
    let json = std::fs::read_to_string(path)?;
    let resume: ResumeData = serde_json::from_str(&json)
        .map_err(|e| AppError::Validation(format!("invalid refined resume JSON: {e}")))?;
    resume
        .validate()
        .map_err(|reason| AppError::Validation(format!("saved resume is invalid: {reason}")))?;
    Ok(resume)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
