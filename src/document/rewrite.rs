/*!
 * In-place rewriting of translated text units.
 *
 * Given a unit's location, its formatting snapshot, and the translated
 * text, the rewriter clears the unit's translatable content, inserts one
 * run (or value) carrying the translation, and reapplies every attribute
 * present in the snapshot. All mutation is in memory; persistence happens
 * once at the end of the pipeline.
 */

use crate::document::model::{
    CellValue, Document, FormattingSnapshot, Paragraph, Run, TextBody, TextUnit, UnitKind,
    UnitLocation,
};

/// Rewrite one unit in place with its translated text.
///
/// Paragraph units keep their whitespace-only runs (line-break and spacing
/// carriers) in their original relative order and get the translated run
/// appended after them, with a trailing space when the translation lacks
/// one. Cell and shape units receive the translated text verbatim.
pub fn apply_translation(document: &mut Document, unit: &TextUnit, translated: &str) {
    match unit.kind {
        UnitKind::Paragraph => {
            if let Some(paragraph) = paragraph_at_mut(document, unit.location) {
                rewrite_paragraph(paragraph, translated, &unit.snapshot);
            }
        }
        UnitKind::Cell => {
            if let Some(cell) = cell_at_mut(document, unit.location) {
                *cell = CellValue::Text(translated.to_string());
            }
        }
        UnitKind::Shape => {
            if let Some(body) = shape_body_at_mut(document, unit.location) {
                rewrite_shape_body(body, translated, &unit.snapshot);
            }
        }
    }
}

/// Trailing-space shim for word-processing paragraphs only: downstream
/// run-concatenation rendering expects a separator after the rewritten
/// run. Cells and shapes must never get this.
fn with_trailing_space(translated: &str) -> String {
    if translated.is_empty() || translated.ends_with(' ') {
        translated.to_string()
    } else {
        format!("{} ", translated)
    }
}

fn rewrite_paragraph(paragraph: &mut Paragraph, translated: &str, snapshot: &FormattingSnapshot) {
    paragraph.runs.retain(|run| run.text.trim().is_empty());
    paragraph.runs.push(Run::with_formatting(
        with_trailing_space(translated),
        snapshot.clone(),
    ));
}

fn rewrite_shape_body(body: &mut TextBody, translated: &str, snapshot: &FormattingSnapshot) {
    body.paragraphs.clear();
    body.paragraphs.push(Paragraph {
        runs: vec![Run::with_formatting(translated, snapshot.clone())],
    });
}

fn paragraph_at_mut(document: &mut Document, location: UnitLocation) -> Option<&mut Paragraph> {
    let Document::Text(doc) = document else {
        return None;
    };

    match location {
        UnitLocation::BodyParagraph { index } => doc.body.get_mut(index),
        UnitLocation::TableCellParagraph {
            table,
            row,
            cell,
            paragraph,
        } => doc
            .tables
            .get_mut(table)?
            .rows
            .get_mut(row)?
            .cells
            .get_mut(cell)?
            .paragraphs
            .get_mut(paragraph),
        UnitLocation::HeaderParagraph { index } => doc.headers.get_mut(index),
        UnitLocation::FooterParagraph { index } => doc.footers.get_mut(index),
        _ => None,
    }
}

fn cell_at_mut(document: &mut Document, location: UnitLocation) -> Option<&mut CellValue> {
    let Document::Spreadsheet(workbook) = document else {
        return None;
    };
    let UnitLocation::SheetCell { sheet, row, column } = location else {
        return None;
    };

    workbook
        .sheets
        .get_mut(sheet)?
        .rows
        .get_mut(row)?
        .get_mut(column)
}

fn shape_body_at_mut(document: &mut Document, location: UnitLocation) -> Option<&mut TextBody> {
    let Document::Presentation(deck) = document else {
        return None;
    };
    let UnitLocation::SlideShape { slide, shape } = location else {
        return None;
    };

    deck.slides
        .get_mut(slide)?
        .shapes
        .get_mut(shape)?
        .text_body
        .as_mut()
}
