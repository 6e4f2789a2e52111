//! Plain-text preview of the refined resume, printed after refinement so the
//! user can review the result before exporting. Pure rendering, no I/O.

use crate::models::resume::ResumeData;

const WIDTH: usize = 72;

/// Renders the refined resume as fixed-width plain text.
pub fn render_resume_text(resume: &ResumeData) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(WIDTH);

    // Header
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&center(&resume.contact.name.to_uppercase()));
    out.push('\n');
    out.push_str(&center(&format!(
        "{} \u{2022} {} \u{2022} {}",
        resume.contact.location, resume.contact.phone, resume.contact.email
    )));
    out.push('\n');

    let links: Vec<String> = [
        resume.contact.linkedin.as_deref().map(|l| format!("LinkedIn: {l}")),
        resume
            .contact
            .portfolio
            .as_deref()
            .map(|p| format!("Portfolio: {p}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !links.is_empty() {
        out.push_str(&center(&links.join(" \u{2022} ")));
        out.push('\n');
    }
    out.push_str(&heavy);
    out.push_str("\n\n");

    // Summary
    push_section(&mut out, "SUMMARY");
    out.push_str(&resume.summary);
    out.push_str("\n\n");

    // Experience
    push_section(&mut out, "EXPERIENCE");
    for exp in &resume.experience {
        out.push_str(&spread(&exp.role, &exp.date));
        out.push('\n');
        out.push_str(&format!("{} - {}\n", exp.company, exp.location));
        for bullet in &exp.description {
            out.push_str(&format!("  \u{2022} {bullet}\n"));
        }
        out.push('\n');
    }

    // Skills
    push_section(&mut out, "SKILLS");
    for group in &resume.skills {
        out.push_str(&format!("{}: {}\n", group.category, group.items.join(", ")));
    }
    out.push('\n');

    // Custom sections
    for section in resume.extra_sections() {
        push_section(&mut out, &section.title.to_uppercase());
        out.push_str(&section.content);
        out.push_str("\n\n");
    }

    // Education
    push_section(&mut out, "EDUCATION");
    for edu in &resume.education {
        out.push_str(&spread(&edu.degree, &edu.date));
        out.push('\n');
        out.push_str(&edu.institution);
        out.push_str("\n\n");
    }

    out
}

fn push_section(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((WIDTH - len) / 2), text)
}

/// Left text and right text pushed to opposite edges of the line.
fn spread(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    if used + 1 >= WIDTH {
        return format!("{left}  {right}");
    }
    format!("{left}{}{right}", " ".repeat(WIDTH - used))
}
