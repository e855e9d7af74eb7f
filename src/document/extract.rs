/*!
 * Text unit extraction.
 *
 * Walks a document's structural tree in traversal order and yields the
 * translatable text units: one per paragraph with non-whitespace content,
 * one per string-valued spreadsheet cell, one per shape with a non-empty
 * text body. Each unit carries the formatting snapshot to reapply after
 * translation.
 */

use crate::document::model::{
    Document, FormattingSnapshot, Paragraph, SlideDeck, TextBody, TextDocument, TextUnit,
    UnitKind, UnitLocation, Workbook,
};
use crate::document::model::CellValue;

/// Extract every translatable text unit from a document, in traversal
/// order: body paragraphs, then tables (row-major, cell-paragraph order),
/// then headers, then footers for word-processing documents; row-major
/// cells for spreadsheets; shape order per slide for presentations.
pub fn extract_units(document: &Document) -> Vec<TextUnit> {
    match document {
        Document::Text(text_doc) => extract_text_document(text_doc),
        Document::Spreadsheet(workbook) => extract_workbook(workbook),
        Document::Presentation(deck) => extract_slide_deck(deck),
    }
}

fn extract_text_document(doc: &TextDocument) -> Vec<TextUnit> {
    let mut units = Vec::new();

    for (index, paragraph) in doc.body.iter().enumerate() {
        if let Some(unit) = paragraph_unit(paragraph, UnitLocation::BodyParagraph { index }) {
            units.push(unit);
        }
    }

    for (t, table) in doc.tables.iter().enumerate() {
        for (r, row) in table.rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                for (p, paragraph) in cell.paragraphs.iter().enumerate() {
                    let location = UnitLocation::TableCellParagraph {
                        table: t,
                        row: r,
                        cell: c,
                        paragraph: p,
                    };
                    if let Some(unit) = paragraph_unit(paragraph, location) {
                        units.push(unit);
                    }
                }
            }
        }
    }

    for (index, paragraph) in doc.headers.iter().enumerate() {
        if let Some(unit) = paragraph_unit(paragraph, UnitLocation::HeaderParagraph { index }) {
            units.push(unit);
        }
    }

    for (index, paragraph) in doc.footers.iter().enumerate() {
        if let Some(unit) = paragraph_unit(paragraph, UnitLocation::FooterParagraph { index }) {
            units.push(unit);
        }
    }

    units
}

/// Build a paragraph unit by accumulating the text of every run whose
/// trimmed text is non-empty. Whitespace-only runs are not part of the
/// unit; the rewriter re-emits them unchanged. A paragraph with no
/// non-whitespace runs yields no unit.
fn paragraph_unit(paragraph: &Paragraph, location: UnitLocation) -> Option<TextUnit> {
    let mut accumulated = String::new();
    for run in &paragraph.runs {
        if !run.text.trim().is_empty() {
            accumulated.push_str(&run.text);
        }
    }

    if accumulated.trim().is_empty() {
        return None;
    }

    Some(TextUnit {
        location,
        kind: UnitKind::Paragraph,
        source_text: accumulated,
        snapshot: capture_paragraph_snapshot(paragraph),
    })
}

/// Snapshot policy: the first run found with non-whitespace text is
/// treated as representative for the whole unit, even when later runs
/// carry different formatting.
fn capture_paragraph_snapshot(paragraph: &Paragraph) -> FormattingSnapshot {
    paragraph
        .runs
        .iter()
        .find(|run| !run.text.trim().is_empty())
        .map(|run| run.formatting.clone())
        .unwrap_or_else(FormattingSnapshot::none)
}

fn extract_workbook(workbook: &Workbook) -> Vec<TextUnit> {
    let mut units = Vec::new();

    for (s, sheet) in workbook.sheets.iter().enumerate() {
        for (r, row) in sheet.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                // Only string cells are translatable; numbers, booleans,
                // formulas, and empty cells stay untouched.
                if let CellValue::Text(text) = cell {
                    if text.trim().is_empty() {
                        continue;
                    }
                    units.push(TextUnit {
                        location: UnitLocation::SheetCell {
                            sheet: s,
                            row: r,
                            column: c,
                        },
                        kind: UnitKind::Cell,
                        source_text: text.clone(),
                        snapshot: FormattingSnapshot::none(),
                    });
                }
            }
        }
    }

    units
}

fn extract_slide_deck(deck: &SlideDeck) -> Vec<TextUnit> {
    let mut units = Vec::new();

    for (s, slide) in deck.slides.iter().enumerate() {
        for (sh, shape) in slide.shapes.iter().enumerate() {
            let Some(body) = &shape.text_body else {
                continue;
            };
            let text = body.text();
            if text.trim().is_empty() {
                continue;
            }
            units.push(TextUnit {
                location: UnitLocation::SlideShape { slide: s, shape: sh },
                kind: UnitKind::Shape,
                source_text: text,
                snapshot: capture_shape_snapshot(body),
            });
        }
    }

    units
}

/// Shapes only preserve the font size, read from the first run found in
/// the text body.
fn capture_shape_snapshot(body: &TextBody) -> FormattingSnapshot {
    let font_size = body
        .paragraphs
        .iter()
        .flat_map(|p| p.runs.iter())
        .next()
        .and_then(|run| run.formatting.font_size_pt);

    FormattingSnapshot::font_size_only(font_size)
}
