//! Plain-text extraction from uploaded document bytes.
//!
//! Format is decided by the filename extension alone. Each decoding strategy
//! swallows its own failures into an empty string; the extractor fails only
//! when no strategy produced any text at all.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::errors::ParseError;

pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ParseError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => {
            let primary = pdf_text_paged(bytes);
            if primary.is_empty() {
                debug!(filename, "primary PDF strategy produced no text; trying fallback");
                pdf_text_whole(bytes)
            } else {
                primary
            }
        }
        "docx" | "doc" => docx_text(bytes),
        _ => return Err(ParseError::UnsupportedFormat { extension }),
    };

    if text.is_empty() {
        return Err(ParseError::ExtractionFailed);
    }
    Ok(text)
}

/// Primary PDF strategy: page-by-page extraction via lopdf.
fn pdf_text_paged(bytes: &[u8]) -> String {
    let doc = match lopdf::Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(error = %err, "lopdf failed to load PDF");
            return String::new();
        }
    };

    let mut text = String::new();
    for (page_num, _object_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(err) => warn!(page = page_num, error = %err, "page extraction failed"),
        }
    }
    text
}

/// Fallback PDF strategy: whole-document extraction via pdf-extract.
fn pdf_text_whole(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "pdf-extract fallback failed");
            String::new()
        }
    }
}

/// DOCX extraction: read `word/document.xml` from the zip container and
/// concatenate paragraph texts in document order, one newline per paragraph.
fn docx_text(bytes: &[u8]) -> String {
    let xml = match read_document_xml(bytes) {
        Some(xml) => xml,
        None => return String::new(),
    };

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                if let Ok(unescaped) = t.unescape() {
                    current.push_str(&unescaped);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                warn!(error = %err, "DOCX XML parsing failed");
                return String::new();
            }
            _ => {}
        }
    }

    paragraphs.join("\n")
}

fn read_document_xml(bytes: &[u8]) -> Option<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = match zip::ZipArchive::new(cursor) {
        Ok(archive) => archive,
        Err(err) => {
            warn!(error = %err, "DOCX is not a readable zip container");
            return None;
        }
    };

    let mut file = match archive.by_name("word/document.xml") {
        Ok(file) => file,
        Err(err) => {
            warn!(error = %err, "DOCX has no word/document.xml");
            return None;
        }
    };

    let mut xml = String::new();
    if let Err(err) = file.read_to_string(&mut xml) {
        warn!(error = %err, "failed to read word/document.xml");
        return None;
    }
    Some(xml)
}
