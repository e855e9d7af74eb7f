/*!
 * Tests for document unit extraction and formatting-preserving rewrite
 */

use prevod::document::{
    apply_translation, extract_units, CellValue, Document, FormattingSnapshot, Paragraph, Run,
    Table, TableCell, TableRow, TextDocument, UnitKind, UnitLocation,
};

use crate::common::{slide_deck, text_document, workbook};

#[test]
fn test_extractUnits_textDocument_shouldWalkBodyTablesHeadersFooters() {
    let doc = Document::Text(TextDocument {
        body: vec![Paragraph::from_text("Body")],
        tables: vec![Table {
            rows: vec![TableRow {
                cells: vec![TableCell {
                    paragraphs: vec![Paragraph::from_text("Cell")],
                }],
            }],
        }],
        headers: vec![Paragraph::from_text("Header")],
        footers: vec![Paragraph::from_text("Footer")],
    });

    let units = extract_units(&doc);
    let texts: Vec<&str> = units.iter().map(|u| u.source_text.as_str()).collect();
    assert_eq!(texts, vec!["Body", "Cell", "Header", "Footer"]);
    assert!(units.iter().all(|u| u.kind == UnitKind::Paragraph));
}

#[test]
fn test_extractUnits_whitespaceOnlyParagraphs_shouldBeSkipped() {
    let doc = text_document(&["Hello", "   ", "", "\n", "World"]);

    let units = extract_units(&doc);
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].location, UnitLocation::BodyParagraph { index: 0 });
    assert_eq!(units[1].location, UnitLocation::BodyParagraph { index: 4 });
}

#[test]
fn test_extractUnits_workbook_shouldOnlyYieldTextCells() {
    let doc = workbook(vec![vec![
        CellValue::Text("Name".to_string()),
        CellValue::Number(42.0),
        CellValue::Bool(true),
        CellValue::Formula("=A1*2".to_string()),
        CellValue::Empty,
    ]]);

    let units = extract_units(&doc);
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].source_text, "Name");
    assert_eq!(units[0].kind, UnitKind::Cell);
    assert_eq!(
        units[0].location,
        UnitLocation::SheetCell { sheet: 0, row: 0, column: 0 }
    );
}

#[test]
fn test_extractUnits_slideDeck_shouldYieldOneUnitPerTextShape() {
    let doc = slide_deck(&["Title", "Subtitle"]);

    let units = extract_units(&doc);
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].kind, UnitKind::Shape);
    assert_eq!(units[1].location, UnitLocation::SlideShape { slide: 0, shape: 1 });
}

#[test]
fn test_applyTranslation_paragraph_shouldReapplySnapshotAndTrailingSpace() {
    let snapshot = FormattingSnapshot {
        bold: Some(true),
        font_name: Some("Arial".to_string()),
        ..FormattingSnapshot::none()
    };
    let mut doc = Document::Text(TextDocument {
        body: vec![Paragraph {
            runs: vec![Run::with_formatting("Hello", snapshot.clone())],
        }],
        ..TextDocument::default()
    });

    let units = extract_units(&doc);
    apply_translation(&mut doc, &units[0], "Bonjour");

    let Document::Text(text_doc) = &doc else { unreachable!() };
    let run = &text_doc.body[0].runs[0];
    assert_eq!(run.text, "Bonjour ");
    assert_eq!(run.formatting, snapshot);
}

#[test]
fn test_applyTranslation_unformattedParagraph_shouldStayUnformatted() {
    let mut doc = text_document(&["Hello"]);
    let units = extract_units(&doc);

    apply_translation(&mut doc, &units[0], "Bonjour");

    let Document::Text(text_doc) = &doc else { unreachable!() };
    assert!(text_doc.body[0].runs[0].formatting.is_none());
}

#[test]
fn test_applyTranslation_sheetCell_shouldReplaceWithoutTrailingSpace() {
    let mut doc = workbook(vec![vec![CellValue::Text("Total".to_string())]]);
    let units = extract_units(&doc);

    apply_translation(&mut doc, &units[0], "Ukupno");

    let Document::Spreadsheet(wb) = &doc else { unreachable!() };
    assert_eq!(wb.sheets[0].rows[0][0], CellValue::Text("Ukupno".to_string()));
}

#[test]
fn test_applyTranslation_shape_shouldCollapseToSingleParagraph() {
    let mut doc = slide_deck(&["Quarterly results"]);
    let units = extract_units(&doc);

    apply_translation(&mut doc, &units[0], "Résultats trimestriels");

    let Document::Presentation(deck) = &doc else { unreachable!() };
    let body = deck.slides[0].shapes[0].text_body.as_ref().unwrap();
    assert_eq!(body.paragraphs.len(), 1);
    assert_eq!(body.text(), "Résultats trimestriels");
}
