//! Word (DOCX) text extraction.
//!
//! Top-level paragraphs come first in document order, then tables: cell text
//! space-separated within a row, one row per line.

use std::path::Path;

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, TableCell, TableCellContent,
    TableChild, TableRowChild,
};

use super::ExtractError;

pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut text = String::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            let para = paragraph_text(p);
            if !para.trim().is_empty() {
                text.push_str(&para);
                text.push('\n');
            }
        }
    }

    for child in &docx.document.children {
        if let DocumentChild::Table(table) = child {
            for row in &table.rows {
                let TableChild::TableRow(row) = row;
                for cell in &row.cells {
                    let TableRowChild::TableCell(cell) = cell;
                    let content = cell_text(cell);
                    if !content.trim().is_empty() {
                        text.push_str(&content);
                        text.push(' ');
                    }
                }
                text.push('\n');
            }
        }
    }

    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text.trim().to_string())
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    out.push_str(&t.text);
                }
            }
        }
    }
    out
}

fn cell_text(cell: &TableCell) -> String {
    let paragraphs: Vec<String> = cell
        .children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();
    paragraphs.join("\n")
}
