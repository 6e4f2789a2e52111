//! DOCX text extraction.
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`.
//! Text is the concatenation of `<w:t>` runs. Paragraph ends become
//! newlines, explicit tabs and breaks become `\t` / `\n`. No other OOXML
//! semantics are interpreted.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

/// Extracts plain text from DOCX bytes.
pub fn extract(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extract(format!("not a DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::Extract(format!("DOCX has no document body: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extract(format!("DOCX body is not readable: {e}")))?;

    Ok(document_xml_to_text(&xml))
}

/// Walks the document XML and collects run text.
fn document_xml_to_text(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_run_text = true;
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => out.push('\t'),
                b"br" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if in_run_text {
                    out.push_str(&t.unescape().unwrap_or_default());
                }
            }
            Ok(Event::Eof) => break,
            // Malformed XML past this point: keep what was collected.
            Err(_) => break,
            _ => {}
        }
    }

    out
}
