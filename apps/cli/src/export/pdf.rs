//! PDF export — replays the fixed resume layout onto the `printpdf` builder.
//!
//! A4 portrait, 40pt margins, builtin Helvetica. The library places text but
//! does not wrap or paginate, so this module wraps with the static metric
//! tables and tracks a top-down cursor; any block that would cross the
//! bottom margin starts a new page.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rgb,
};
use tracing::info;

use crate::errors::AppError;
use crate::export::metrics::{get_metrics, Face};
use crate::models::resume::ResumeData;

// A4 in points.
const PAGE_W_PT: f32 = 595.0;
const PAGE_H_PT: f32 = 842.0;
const MARGIN_PT: f32 = 40.0;
const MAX_W_PT: f32 = PAGE_W_PT - 2.0 * MARGIN_PT;

const BODY_SIZE: f32 = 10.0;
const LINE_H: f32 = 12.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

// Palette carried over from the preview theme.
const INK_HEADER: (u8, u8, u8) = (0x1e, 0x29, 0x3b);
const INK_MUTED: (u8, u8, u8) = (0x47, 0x55, 0x69);
const INK_BODY: (u8, u8, u8) = (0x33, 0x41, 0x55);
const INK_ACCENT: (u8, u8, u8) = (0x1d, 0x4e, 0xd8);
const INK_LINK: (u8, u8, u8) = (0x25, 0x63, 0xeb);
const RULE_GRAY: (u8, u8, u8) = (0xe2, 0xe8, 0xf0);

/// Writes the refined resume to `path` as a PDF.
pub fn write_pdf(resume: &ResumeData, path: &Path) -> Result<(), AppError> {
    let mut cursor = PdfCursor::new(&format!("{} Resume", resume.contact.name))?;

    render_header(&mut cursor, resume);

    render_section(&mut cursor, "Summary", |c| {
        render_paragraph(c, &resume.summary, MARGIN_PT, MAX_W_PT);
        c.advance(10.0);
    });

    render_section(&mut cursor, "Experience", |c| {
        for exp in &resume.experience {
            c.ensure_room(60.0);

            c.set_color(INK_HEADER);
            c.text_left(&exp.role, 11.0, MARGIN_PT, Face::Bold);
            c.set_color(INK_MUTED);
            c.text_right(&exp.date, 9.0, Face::Regular);
            c.advance(LINE_H);

            c.set_color(INK_BODY);
            c.text_left(&exp.company, BODY_SIZE, MARGIN_PT, Face::Regular);
            c.set_color(INK_MUTED);
            c.text_right(&exp.location, 9.0, Face::Regular);
            c.advance(15.0);

            c.set_color(INK_BODY);
            for bullet in &exp.description {
                let lines =
                    get_metrics(Face::Regular).wrap_pt(bullet, MAX_W_PT - 20.0, BODY_SIZE);
                c.ensure_room(lines.len() as f32 * LINE_H);
                c.text_left("\u{2022}", BODY_SIZE, MARGIN_PT + 5.0, Face::Regular);
                for line in &lines {
                    c.text_left(line, BODY_SIZE, MARGIN_PT + 20.0, Face::Regular);
                    c.advance(LINE_H);
                }
            }
            c.advance(10.0);
        }
    });

    render_section(&mut cursor, "Skills", |c| {
        for group in &resume.skills {
            c.ensure_room(15.0);
            c.text_left(
                &format!("{}:", group.category),
                BODY_SIZE,
                MARGIN_PT,
                Face::Bold,
            );
            let items = group.items.join(", ");
            let lines = get_metrics(Face::Regular).wrap_pt(&items, MAX_W_PT - 100.0, BODY_SIZE);
            for line in &lines {
                c.text_left(line, BODY_SIZE, MARGIN_PT + 100.0, Face::Regular);
                c.advance(LINE_H);
            }
            c.advance(5.0);
        }
        c.advance(10.0);
    });

    for section in resume.extra_sections() {
        render_section(&mut cursor, &section.title, |c| {
            render_paragraph(c, &section.content, MARGIN_PT, MAX_W_PT);
            c.advance(10.0);
        });
    }

    render_section(&mut cursor, "Education", |c| {
        for edu in &resume.education {
            c.ensure_room(30.0);
            c.set_color(INK_HEADER);
            c.text_left(&edu.degree, 11.0, MARGIN_PT, Face::Bold);
            c.set_color(INK_MUTED);
            c.text_right(&edu.date, 9.0, Face::Regular);
            c.advance(LINE_H);

            c.set_color(INK_BODY);
            c.text_left(&edu.institution, BODY_SIZE, MARGIN_PT, Face::Regular);
            c.advance(15.0);
        }
    });

    let file = File::create(path)?;
    cursor
        .doc
        .save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Export(format!("failed to write PDF: {e}")))?;

    info!("Wrote PDF resume to {}", path.display());
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Layout pieces
// ────────────────────────────────────────────────────────────────────────────

fn render_header(c: &mut PdfCursor, resume: &ResumeData) {
    c.set_color(INK_HEADER);
    c.text_center(&resume.contact.name, 24.0, Face::Bold);
    c.advance(25.0);

    let contact_line = format!(
        "{} \u{2022} {} \u{2022} {}",
        resume.contact.location, resume.contact.phone, resume.contact.email
    );
    c.set_color(INK_MUTED);
    c.text_center(&contact_line, 9.0, Face::Regular);
    c.advance(10.0);

    let links: Vec<&str> = [
        resume.contact.linkedin.as_deref(),
        resume.contact.portfolio.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !links.is_empty() {
        c.set_color(INK_LINK);
        c.text_center(&links.join(" \u{2022} "), 9.0, Face::Regular);
    }
    c.advance(30.0);
}

/// Uppercase accent heading, rule, then the section body at body size.
fn render_section(c: &mut PdfCursor, title: &str, body: impl FnOnce(&mut PdfCursor)) {
    c.ensure_room(40.0);
    c.set_color(INK_ACCENT);
    c.text_left(&title.to_uppercase(), 11.0, MARGIN_PT, Face::Bold);
    c.advance(8.0);
    c.rule();
    c.advance(15.0);
    c.set_color(INK_BODY);
    body(c);
}

/// Wrapped body text. Hard newlines in the source are respected; each
/// resulting line is wrapped at the width budget.
fn render_paragraph(c: &mut PdfCursor, text: &str, x_pt: f32, max_w_pt: f32) {
    let metrics = get_metrics(Face::Regular);
    for source_line in text.lines() {
        let wrapped = metrics.wrap_pt(source_line, max_w_pt, BODY_SIZE);
        if wrapped.is_empty() {
            c.advance(LINE_H); // blank source line keeps its vertical space
            continue;
        }
        c.ensure_room(wrapped.len() as f32 * LINE_H);
        for line in &wrapped {
            c.text_left(line, BODY_SIZE, x_pt, Face::Regular);
            c.advance(LINE_H);
        }
    }
}

/// True when a block of `needed_pt` starting at `y_pt` would cross the
/// bottom margin.
fn breaks_page(y_pt: f32, needed_pt: f32) -> bool {
    y_pt + needed_pt > PAGE_H_PT - MARGIN_PT
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor over the printpdf document
// ────────────────────────────────────────────────────────────────────────────

struct PdfCursor {
    doc: PdfDocumentReference,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Current baseline, in points from the top of the page.
    y: f32,
}

impl PdfCursor {
    fn new(title: &str) -> Result<Self, AppError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(PAGE_W_PT * PT_TO_MM),
            Mm(PAGE_H_PT * PT_TO_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Export(format!("failed to load Helvetica: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Export(format!("failed to load Helvetica-Bold: {e}")))?;

        Ok(Self {
            doc,
            page,
            layer,
            regular,
            bold,
            y: MARGIN_PT,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        self.doc.get_page(self.page).get_layer(self.layer)
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
        }
    }

    fn advance(&mut self, dy_pt: f32) {
        self.y += dy_pt;
    }

    /// Starts a new page if a block of `needed_pt` would not fit.
    fn ensure_room(&mut self, needed_pt: f32) {
        if breaks_page(self.y, needed_pt) {
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_W_PT * PT_TO_MM),
                Mm(PAGE_H_PT * PT_TO_MM),
                "Layer 1",
            );
            self.page = page;
            self.layer = layer;
            self.y = MARGIN_PT;
        }
    }

    fn set_color(&self, (r, g, b): (u8, u8, u8)) {
        self.layer().set_fill_color(Color::Rgb(Rgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            None,
        )));
    }

    fn text_left(&self, text: &str, size_pt: f32, x_pt: f32, face: Face) {
        self.layer().use_text(
            text,
            size_pt,
            Mm(x_pt * PT_TO_MM),
            Mm((PAGE_H_PT - self.y) * PT_TO_MM),
            self.font(face),
        );
    }

    fn text_right(&self, text: &str, size_pt: f32, face: Face) {
        let table = get_metrics(face);
        let x_pt = PAGE_W_PT - MARGIN_PT - table.width_pt(text, size_pt);
        self.text_left(text, size_pt, x_pt, face);
    }

    fn text_center(&self, text: &str, size_pt: f32, face: Face) {
        let table = get_metrics(face);
        let x_pt = (PAGE_W_PT - table.width_pt(text, size_pt)) / 2.0;
        self.text_left(text, size_pt, x_pt, face);
    }

    /// Horizontal rule under a section heading, margin to margin.
    fn rule(&self) {
        let layer = self.layer();
        let (r, g, b) = RULE_GRAY;
        layer.set_outline_color(Color::Rgb(Rgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            None,
        )));
        layer.set_outline_thickness(0.5);
        layer.add_line(Line {
            points: vec![
                (
                    Point::new(
                        Mm(MARGIN_PT * PT_TO_MM),
                        Mm((PAGE_H_PT - self.y) * PT_TO_MM),
                    ),
                    false,
                ),
                (
                    Point::new(
                        Mm((PAGE_W_PT - MARGIN_PT) * PT_TO_MM),
                        Mm((PAGE_H_PT - self.y) * PT_TO_MM),
                    ),
                    false,
                ),
            ],
            is_closed: false,
        });
    }
}
