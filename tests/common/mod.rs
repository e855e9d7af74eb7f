/*!
 * Common test utilities for the prevod test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use prevod::document::{
    CellValue, Document, Paragraph, Shape, Sheet, Slide, SlideDeck, TextBody, TextDocument,
    Workbook,
};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a text document whose body holds one paragraph per entry
pub fn text_document(paragraphs: &[&str]) -> Document {
    Document::Text(TextDocument {
        body: paragraphs.iter().map(|t| Paragraph::from_text(*t)).collect(),
        ..TextDocument::default()
    })
}

/// Builds a one-sheet workbook from the given rows
pub fn workbook(rows: Vec<Vec<CellValue>>) -> Document {
    Document::Spreadsheet(Workbook {
        sheets: vec![Sheet {
            name: "Sheet1".to_string(),
            rows,
        }],
    })
}

/// Builds a one-slide deck with one text shape per entry
pub fn slide_deck(shape_texts: &[&str]) -> Document {
    Document::Presentation(SlideDeck {
        slides: vec![Slide {
            shapes: shape_texts
                .iter()
                .map(|t| Shape {
                    name: None,
                    text_body: Some(TextBody {
                        paragraphs: vec![Paragraph::from_text(*t)],
                    }),
                })
                .collect(),
        }],
    })
}

/// Writes a document as interchange JSON and returns its path
pub fn write_document(dir: &Path, filename: &str, document: &Document) -> Result<PathBuf> {
    let path = dir.join(filename);
    prevod::document::store::save(document, &path)?;
    Ok(path)
}
