//! PPTX extractor built on zip + quick-xml.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{IngestError, Result};
use crate::models::DocumentKind;
use crate::processing::ContentExtractor;

use super::ExtractedContent;

pub struct PptxExtractor;

impl PptxExtractor {
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor)
            .map_err(|e| IngestError::CorruptFile(format!("PPTX archive error: {e}")))?;

        let mut slides: Vec<(usize, String)> = archive
            .file_names()
            .filter_map(|name| Some((Self::slide_number(name)?, name.to_string())))
            .collect();
        slides.sort();

        let mut text = String::new();
        let mut title = None;

        for (number, path) in &slides {
            let slide_xml = Self::read_archive_file(&mut archive, path)?;
            let slide_text = Self::text_runs(&slide_xml);

            if !text.is_empty() {
                text.push_str("\n\n");
            }
            // Synthetic marker so slide structure survives into title
            // extraction and segmentation.
            text.push_str(&format!("# Slide {number}\n\n"));
            text.push_str(&slide_text);

            if title.is_none() {
                title = slide_text
                    .lines()
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .map(String::from);
            }

            let notes_path = format!("ppt/notesSlides/notesSlide{number}.xml");
            if let Ok(notes_xml) = Self::read_archive_file(&mut archive, &notes_path) {
                let notes = Self::text_runs(&notes_xml);
                if !notes.trim().is_empty() {
                    text.push_str("\n\n[Notes]: ");
                    text.push_str(&notes);
                }
            }
        }

        Ok(ContentExtractor::content(text, title, DocumentKind::Pptx))
    }

    /// `ppt/slides/slide7.xml` -> `Some(7)`. Slide parts are numbered in
    /// document order.
    fn slide_number(name: &str) -> Option<usize> {
        name.strip_prefix("ppt/slides/slide")?
            .strip_suffix(".xml")?
            .parse()
            .ok()
    }

    /// Collect `a:t` run text, one paragraph (`a:p`) per line.
    fn text_runs(xml: &str) -> String {
        // Whitespace between markup stays untrimmed so multi-run paragraphs
        // keep their inner spacing; only `a:t` content is collected anyway.
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text_run = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.name().as_ref() == b"a:t" => in_text_run = true,
                Ok(Event::Text(e)) if in_text_run => {
                    if let Ok(run) = std::str::from_utf8(e.as_ref()) {
                        current.push_str(run);
                    }
                }
                // Escaped characters arrive as separate reference events.
                Ok(Event::GeneralRef(e)) if in_text_run => {
                    if let Some(c) = Self::resolve_reference(e.as_ref()) {
                        current.push(c);
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"a:t" => in_text_run = false,
                    b"a:p" => {
                        let trimmed = current.trim();
                        if !trimmed.is_empty() {
                            paragraphs.push(trimmed.to_string());
                        }
                        current.clear();
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(_) => break,
                _ => {}
            }
            buf.clear();
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            paragraphs.push(trimmed.to_string());
        }

        paragraphs.join("\n")
    }

    /// The five predefined XML entities plus numeric character references.
    fn resolve_reference(name: &[u8]) -> Option<char> {
        match name {
            b"lt" => Some('<'),
            b"gt" => Some('>'),
            b"amp" => Some('&'),
            b"apos" => Some('\''),
            b"quot" => Some('"'),
            _ => {
                let name = std::str::from_utf8(name).ok()?;
                let digits = name.strip_prefix('#')?;
                let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                    None => digits.parse().ok()?,
                };
                char::from_u32(code)
            }
        }
    }

    fn read_archive_file(archive: &mut ZipArchive<Cursor<&[u8]>>, path: &str) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| IngestError::CorruptFile(format!("Failed to open {path}: {e}")))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| IngestError::CorruptFile(format!("Failed to read {path}: {e}")))?;

        Ok(content)
    }
}
