/*!
 * End-to-end document translation pipeline tests, running against mock
 * providers only.
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

use prevod::document::store;
use prevod::document::{CellValue, Document, FormattingSnapshot, Paragraph, Run, TextDocument};
use prevod::providers::mock::MockProvider;
use prevod::translation::DocumentTranslationPipeline;

use crate::common::{create_temp_dir, slide_deck, text_document, workbook, write_document};

fn pipeline(provider: MockProvider, target: &str) -> DocumentTranslationPipeline {
    DocumentTranslationPipeline::new(Arc::new(provider), target, 4, Duration::from_secs(5))
}

#[tokio::test]
async fn test_pipeline_textDocument_shouldTranslateEveryParagraph() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(dir.path(), "in.json", &text_document(&["Hello", "World"])).unwrap();
    let output = dir.path().join("out.json");

    let outcome = pipeline(MockProvider::working(), "fr")
        .run(&input, &output, |_| {})
        .await
        .unwrap();

    assert_eq!(outcome.total, 2);
    assert_eq!(outcome.translated, 2);
    assert_eq!(outcome.failed, 0);

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "[fr] Hello ");
    assert_eq!(doc.body[1].text(), "[fr] World ");
}

#[tokio::test]
async fn test_pipeline_progress_shouldBeMonotonicAndEndAtHundred() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(
        dir.path(),
        "in.json",
        &text_document(&["One", "Two", "Three", "Four", "Five"]),
    )
    .unwrap();
    let output = dir.path().join("out.json");

    let reported = Mutex::new(Vec::new());
    pipeline(MockProvider::working(), "fr")
        .run(&input, &output, |p| reported.lock().unwrap().push(p))
        .await
        .unwrap();

    let reported = reported.lock().unwrap();
    assert!(reported.windows(2).all(|w| w[0] <= w[1]), "progress went backwards: {:?}", *reported);
    assert_eq!(reported.last(), Some(&100));
}

#[tokio::test]
async fn test_pipeline_spreadsheet_shouldNeverSendNonStringCells() {
    let dir = create_temp_dir().unwrap();
    let doc = workbook(vec![vec![
        CellValue::Text("Name".to_string()),
        CellValue::Number(42.0),
        CellValue::Bool(false),
        CellValue::Formula("=A1*2".to_string()),
    ]]);
    let input = write_document(dir.path(), "in.json", &doc).unwrap();
    let output = dir.path().join("out.json");

    let provider = MockProvider::working();
    let counter = provider.clone();
    pipeline(provider, "fr").run(&input, &output, |_| {}).await.unwrap();

    // Only the one string cell ever reached the provider
    assert_eq!(counter.request_count(), 1);

    let Document::Spreadsheet(wb) = store::open(&output).unwrap() else { panic!("Expected workbook") };
    let row = &wb.sheets[0].rows[0];
    assert_eq!(row[0], CellValue::Text("[fr] Name".to_string()));
    assert_eq!(row[1], CellValue::Number(42.0));
    assert_eq!(row[2], CellValue::Bool(false));
    assert_eq!(row[3], CellValue::Formula("=A1*2".to_string()));
}

#[tokio::test]
async fn test_pipeline_failedUnit_shouldKeepOriginalAndStillFinish() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(
        dir.path(),
        "in.json",
        &text_document(&["First", "Second", "Third"]),
    )
    .unwrap();
    let output = dir.path().join("out.json");

    let reported = Mutex::new(Vec::new());
    // Concurrency 1 keeps the failure on the second unit deterministic
    let pipeline = DocumentTranslationPipeline::new(
        Arc::new(MockProvider::intermittent(2)),
        "fr",
        1,
        Duration::from_secs(5),
    );
    let outcome = pipeline
        .run(&input, &output, |p| reported.lock().unwrap().push(p))
        .await
        .unwrap();

    assert_eq!(outcome.translated, 2);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(reported.lock().unwrap().last(), Some(&100));

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "[fr] First ");
    // The failed unit keeps its source text verbatim
    assert_eq!(doc.body[1].text(), "Second");
    assert_eq!(doc.body[2].text(), "[fr] Third ");
}

#[tokio::test]
async fn test_pipeline_identityTranslation_shouldRoundTripWithAtMostTrailingSpace() {
    let dir = create_temp_dir().unwrap();

    // Paragraphs pick up at most one trailing space on the way through
    let input = write_document(dir.path(), "text.json", &text_document(&["Hello", "World "])).unwrap();
    let output = dir.path().join("text.out.json");
    pipeline(MockProvider::identity(), "fr").run(&input, &output, |_| {}).await.unwrap();

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "Hello ");
    assert_eq!(doc.body[1].text(), "World ");

    // Cells come back verbatim
    let input = write_document(
        dir.path(),
        "sheet.json",
        &workbook(vec![vec![CellValue::Text("Name".to_string())]]),
    )
    .unwrap();
    let output = dir.path().join("sheet.out.json");
    pipeline(MockProvider::identity(), "fr").run(&input, &output, |_| {}).await.unwrap();

    let Document::Spreadsheet(wb) = store::open(&output).unwrap() else { panic!("Expected workbook") };
    assert_eq!(wb.sheets[0].rows[0][0], CellValue::Text("Name".to_string()));

    // Shapes too
    let input = write_document(dir.path(), "deck.json", &slide_deck(&["Title"])).unwrap();
    let output = dir.path().join("deck.out.json");
    pipeline(MockProvider::identity(), "fr").run(&input, &output, |_| {}).await.unwrap();

    let Document::Presentation(deck) = store::open(&output).unwrap() else { panic!("Expected deck") };
    let body = deck.slides[0].shapes[0].text_body.as_ref().unwrap();
    assert_eq!(body.text(), "Title");
}

#[tokio::test]
async fn test_pipeline_serbianLatinTarget_shouldTransliterateProviderOutput() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(dir.path(), "in.json", &text_document(&["Good morning"])).unwrap();
    let output = dir.path().join("out.json");

    let provider = MockProvider::working().with_custom_response(|_| "Добро јутро".to_string());
    pipeline(provider, "sr-Latn").run(&input, &output, |_| {}).await.unwrap();

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "Dobro jutro ");
}

#[tokio::test]
async fn test_pipeline_plainSerbianTarget_shouldKeepCyrillic() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(dir.path(), "in.json", &text_document(&["Good morning"])).unwrap();
    let output = dir.path().join("out.json");

    let provider = MockProvider::working().with_custom_response(|_| "Добро јутро".to_string());
    pipeline(provider, "sr").run(&input, &output, |_| {}).await.unwrap();

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "Добро јутро ");
}

#[tokio::test]
async fn test_pipeline_emptyParagraphBetweenUnits_shouldPassThroughUntouched() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(dir.path(), "in.json", &text_document(&["Hello", "", "World"])).unwrap();
    let output = dir.path().join("out.json");

    let provider = MockProvider::working().with_custom_response(|req| match req.text.as_str() {
        "Hello" => "Bonjour".to_string(),
        "World" => "Monde".to_string(),
        other => other.to_string(),
    });
    let outcome = pipeline(provider, "fr").run(&input, &output, |_| {}).await.unwrap();

    // The empty paragraph never became a unit
    assert_eq!(outcome.total, 2);

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "Bonjour ");
    assert_eq!(doc.body[1].text(), "");
    assert_eq!(doc.body[2].text(), "Monde ");
}

#[tokio::test]
async fn test_pipeline_formatting_shouldSurviveSaveAndReload() {
    let dir = create_temp_dir().unwrap();
    let doc = Document::Text(TextDocument {
        body: vec![
            Paragraph {
                runs: vec![Run::with_formatting(
                    "Styled",
                    FormattingSnapshot {
                        bold: Some(true),
                        italic: Some(true),
                        font_size_pt: Some(14.0),
                        color_rgb: Some("336699".to_string()),
                        ..FormattingSnapshot::none()
                    },
                )],
            },
            Paragraph::from_text("Plain"),
        ],
        ..TextDocument::default()
    });
    let input = write_document(dir.path(), "in.json", &doc).unwrap();
    let output = dir.path().join("out.json");

    pipeline(MockProvider::working(), "de").run(&input, &output, |_| {}).await.unwrap();

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };

    let styled = &doc.body[0].runs[0];
    assert_eq!(styled.formatting.bold, Some(true));
    assert_eq!(styled.formatting.italic, Some(true));
    assert_eq!(styled.formatting.font_size_pt, Some(14.0));
    assert_eq!(styled.formatting.color_rgb.as_deref(), Some("336699"));

    // The unformatted paragraph picks up no attributes on the way through
    assert!(doc.body[1].runs[0].formatting.is_none());
}

#[tokio::test]
async fn test_pipeline_presentation_shouldTranslateShapes() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(dir.path(), "in.json", &slide_deck(&["Title", "Notes"])).unwrap();
    let output = dir.path().join("out.json");

    let outcome = pipeline(MockProvider::working(), "fr")
        .run(&input, &output, |_| {})
        .await
        .unwrap();
    assert_eq!(outcome.translated, 2);

    let Document::Presentation(deck) = store::open(&output).unwrap() else { panic!("Expected deck") };
    let body = deck.slides[0].shapes[0].text_body.as_ref().unwrap();
    assert_eq!(body.text(), "[fr] Title");
}

#[tokio::test]
async fn test_pipeline_allProviderCallsFail_shouldSaveOriginalContent() {
    let dir = create_temp_dir().unwrap();
    let input = write_document(dir.path(), "in.json", &text_document(&["Keep me"])).unwrap();
    let output = dir.path().join("out.json");

    let outcome = pipeline(MockProvider::failing(), "fr")
        .run(&input, &output, |_| {})
        .await
        .unwrap();

    assert_eq!(outcome.translated, 0);
    assert_eq!(outcome.failed, 1);

    let Document::Text(doc) = store::open(&output).unwrap() else { panic!("Expected text document") };
    assert_eq!(doc.body[0].text(), "Keep me");
}
