use crate::error::{IngestError, Result};
use crate::models::DocumentKind;
use crate::processing::ContentExtractor;

use super::ExtractedContent;

pub struct DocxExtractor;

impl DocxExtractor {
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| IngestError::CorruptFile(format!("DOCX parse error: {e}")))?;

        let mut lines: Vec<String> = Vec::new();
        let mut title = None;

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => {
                    let text = Self::paragraph_text(paragraph);
                    if text.trim().is_empty() {
                        continue;
                    }

                    // The first Title/Heading1 paragraph doubles as the
                    // document title.
                    if title.is_none() && Self::is_title_style(paragraph) {
                        title = Some(text.trim().to_string());
                    }

                    lines.push(Self::with_heading_marker(paragraph, text));
                }
                docx_rs::DocumentChild::Table(table) => {
                    lines.extend(Self::table_rows(table));
                }
                _ => {}
            }
        }

        let text = lines.join("\n");
        Ok(ContentExtractor::content(text, title, DocumentKind::Docx))
    }

    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut text = String::new();
        for child in &paragraph.children {
            if let docx_rs::ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    if let docx_rs::RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
        }
        text
    }

    fn is_title_style(paragraph: &docx_rs::Paragraph) -> bool {
        paragraph
            .property
            .style
            .as_ref()
            .is_some_and(|s| s.val == "Title" || s.val == "Heading1")
    }

    /// Heading styles become Markdown heading lines so downstream title and
    /// segmentation heuristics see document structure.
    fn with_heading_marker(paragraph: &docx_rs::Paragraph, text: String) -> String {
        let Some(style) = paragraph.property.style.as_ref() else {
            return text;
        };

        if style.val == "Title" {
            return format!("# {text}");
        }
        if let Some(level) = style
            .val
            .strip_prefix("Heading")
            .and_then(|l| l.parse::<usize>().ok())
        {
            if (1..=6).contains(&level) {
                return format!("{} {text}", "#".repeat(level));
            }
        }
        text
    }

    /// Tables flatten to one `cell | cell | cell` line per row.
    fn table_rows(table: &docx_rs::Table) -> Vec<String> {
        let mut rows = Vec::new();
        for table_child in &table.rows {
            let docx_rs::TableChild::TableRow(row) = table_child;
            let mut cells = Vec::new();
            for row_child in &row.cells {
                let docx_rs::TableRowChild::TableCell(cell) = row_child;
                let mut cell_text = String::new();
                for content in &cell.children {
                    if let docx_rs::TableCellContent::Paragraph(para) = content {
                        if !cell_text.is_empty() {
                            cell_text.push(' ');
                        }
                        cell_text.push_str(&Self::paragraph_text(para));
                    }
                }
                cells.push(cell_text.trim().to_string());
            }
            if cells.iter().any(|c| !c.is_empty()) {
                rows.push(cells.join(" | "));
            }
        }
        rows
    }
}
