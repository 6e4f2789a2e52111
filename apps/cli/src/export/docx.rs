//! DOCX export — replays the fixed resume layout onto the `docx-rs` builder.
//!
//! Word owns wrapping and pagination, so this writer only emits structure:
//! centered header with hyperlinks, bold section headings, bulleted
//! experience entries, and the same section order as the PDF export.

use std::fs::File;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, Hyperlink, HyperlinkType, IndentLevel, Level,
    LevelJc, LevelText, NumberFormat, Numbering, NumberingId, Paragraph, Run, Start,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ContactInfo, ResumeData};

/// Numbering definition id used for resume bullets.
const BULLET_NUMBERING: usize = 2;

const LINK_COLOR: &str = "2563EB";

/// Writes the refined resume to `path` as a DOCX.
pub fn write_docx(resume: &ResumeData, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;

    build_document(resume)
        .build()
        .pack(file)
        .map_err(|e| AppError::Export(format!("failed to write DOCX: {e}")))?;

    info!("Wrote DOCX resume to {}", path.display());
    Ok(())
}

/// Assembles the full document. Split from `write_docx` so tests can build
/// without touching the filesystem.
fn build_document(resume: &ResumeData) -> Docx {
    let mut doc = Docx::new()
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("\u{2022}"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    // Header
    doc = doc
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(resume.contact.name.as_str()).bold().size(48)),
        )
        .add_paragraph(contact_paragraph(&resume.contact));

    // Summary
    doc = doc
        .add_paragraph(heading("Summary"))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(resume.summary.as_str())))
        .add_paragraph(spacer());

    // Experience
    doc = doc.add_paragraph(heading("Experience"));
    for exp in &resume.experience {
        doc = doc
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(exp.role.as_str()).bold())
                    .add_run(Run::new().add_tab())
                    .add_run(Run::new().add_text(exp.date.as_str())),
            )
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(exp.company.as_str()).italic())
                    .add_run(Run::new().add_tab())
                    .add_run(Run::new().add_text(exp.location.as_str()).italic()),
            );
        for bullet in &exp.description {
            doc = doc.add_paragraph(
                Paragraph::new()
                    .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
                    .add_run(Run::new().add_text(bullet.as_str())),
            );
        }
        doc = doc.add_paragraph(spacer());
    }

    // Skills
    doc = doc.add_paragraph(heading("Skills"));
    for group in &resume.skills {
        doc = doc.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(format!("{}: ", group.category)).bold())
                .add_run(Run::new().add_text(group.items.join(", "))),
        );
    }
    doc = doc.add_paragraph(spacer());

    // Custom sections
    for section in resume.extra_sections() {
        doc = doc.add_paragraph(heading(&section.title));
        for line in section.content.lines() {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
        doc = doc.add_paragraph(spacer());
    }

    // Education
    doc = doc.add_paragraph(heading("Education"));
    for edu in &resume.education {
        doc = doc
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(edu.degree.as_str()).bold())
                    .add_run(Run::new().add_tab())
                    .add_run(Run::new().add_text(edu.date.as_str())),
            )
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(edu.institution.as_str()).italic()),
            );
    }

    doc
}

/// Section heading: bold 13pt.
fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(26))
}

/// Blank paragraph between sections.
fn spacer() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(" "))
}

/// Centered contact line: `location | phone | email`, then optional LinkedIn
/// and portfolio hyperlinks.
fn contact_paragraph(contact: &ContactInfo) -> Paragraph {
    let mut p = Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(contact.location.as_str()))
        .add_run(Run::new().add_text(" | "))
        .add_run(Run::new().add_text(contact.phone.as_str()))
        .add_run(Run::new().add_text(" | "))
        .add_hyperlink(
            Hyperlink::new(format!("mailto:{}", contact.email), HyperlinkType::External).add_run(
                Run::new()
                    .add_text(contact.email.as_str())
                    .color(LINK_COLOR)
                    .underline("single"),
            ),
        );

    if let Some(linkedin) = &contact.linkedin {
        p = p.add_run(Run::new().add_text(" | ")).add_hyperlink(
            Hyperlink::new(linkedin, HyperlinkType::External).add_run(
                Run::new()
                    .add_text("LinkedIn")
                    .color(LINK_COLOR)
                    .underline("single"),
            ),
        );
    }

    if let Some(portfolio) = &contact.portfolio {
        p = p.add_run(Run::new().add_text(" | ")).add_hyperlink(
            Hyperlink::new(portfolio, HyperlinkType::External).add_run(
                Run::new()
                    .add_text("Portfolio")
                    .color(LINK_COLOR)
                    .underline("single"),
            ),
        );
    }

    p
}
