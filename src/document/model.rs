/*!
 * Core document model types for office document translation.
 *
 * These types provide a JSON-serializable representation of the structured
 * content of word-processing documents, spreadsheets, and presentations.
 * The concrete container formats are handled by external adapters; the
 * pipeline only ever sees this interchange model.
 */

use serde::{Deserialize, Serialize};

/// The three supported document families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Word-processing document (paragraphs, tables, headers, footers)
    Text,
    /// Spreadsheet workbook (sheets of typed cells)
    Spreadsheet,
    /// Presentation (slides of shapes)
    Presentation,
}

/// A structured document: the root the pipeline owns for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Document {
    /// Word-processing document
    Text(TextDocument),
    /// Spreadsheet workbook
    Spreadsheet(Workbook),
    /// Presentation slide deck
    Presentation(SlideDeck),
}

impl Document {
    /// The kind of this document.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Text(_) => DocumentKind::Text,
            Document::Spreadsheet(_) => DocumentKind::Spreadsheet,
            Document::Presentation(_) => DocumentKind::Presentation,
        }
    }
}

/// Word-processing document regions in traversal order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDocument {
    /// Body paragraphs
    #[serde(default)]
    pub body: Vec<Paragraph>,

    /// Tables in the body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,

    /// Header paragraphs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Paragraph>,

    /// Footer paragraphs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footers: Vec<Paragraph>,
}

/// A table: rows of cells, each cell holding its own paragraphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
}

/// A single table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
}

/// A single table cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Paragraphs in this cell
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph: an ordered list of formatted runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in this paragraph
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a paragraph from plain text as a single unformatted run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A run: a span of text sharing one set of character formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// Text carried by this run
    pub text: String,

    /// Character formatting for this run
    #[serde(default, skip_serializing_if = "FormattingSnapshot::is_none")]
    pub formatting: FormattingSnapshot,
}

impl Run {
    /// Create an unformatted run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: FormattingSnapshot::none(),
        }
    }

    /// Create a run carrying the given formatting.
    pub fn with_formatting(text: impl Into<String>, formatting: FormattingSnapshot) -> Self {
        Self {
            text: text.into(),
            formatting,
        }
    }
}

/// Immutable record of the style attributes reapplied after translation.
///
/// Each field is independently optional; an absent field is never written
/// back to the rewritten run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattingSnapshot {
    /// Bold toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Italic toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Underline toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<f32>,

    /// Font color as an RGB hex string (e.g. "FF0000")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_rgb: Option<String>,

    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    /// Highlight color name (e.g. "yellow")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
}

impl FormattingSnapshot {
    /// A snapshot with every attribute absent.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no attribute is present.
    pub fn is_none(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.font_size_pt.is_none()
            && self.color_rgb.is_none()
            && self.font_name.is_none()
            && self.highlight_color.is_none()
    }

    /// A snapshot keeping only the font size, the sole attribute shapes preserve.
    pub fn font_size_only(font_size_pt: Option<f32>) -> Self {
        Self {
            font_size_pt,
            ..Self::default()
        }
    }
}

/// Spreadsheet workbook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    /// Sheets in workbook order
    pub sheets: Vec<Sheet>,
}

/// A single worksheet: a rectangular-ish grid of typed cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name
    #[serde(default)]
    pub name: String,

    /// Rows of cells, row-major
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

/// Typed cell value. Only `Text` cells are ever translated; every other
/// variant passes through the pipeline untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// String cell
    Text(String),
    /// Numeric cell
    Number(f64),
    /// Boolean cell
    Bool(bool),
    /// Formula cell (stored as the formula source)
    Formula(String),
    /// Empty cell
    Empty,
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

/// Presentation slide deck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

/// A single slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Shapes in z-order
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// A shape on a slide. Only shapes exposing a text body participate in
/// translation; picture/connector shapes carry `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Shape name from the source container, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The shape's text body, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_body: Option<TextBody>,
}

/// The text body of a shape: paragraphs of runs, like a tiny text document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBody {
    /// Paragraphs in this text body
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Full text of the body, paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What kind of span a text unit covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// One paragraph's accumulated run text
    Paragraph,
    /// One spreadsheet cell
    Cell,
    /// One presentation shape's text body
    Shape,
}

/// Non-owning handle back into the document tree. Index paths stay valid
/// for the whole pipeline run because rewriting never inserts or removes
/// paragraphs, cells, or shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLocation {
    /// Paragraph in the document body
    BodyParagraph { index: usize },
    /// Paragraph inside a table cell
    TableCellParagraph {
        table: usize,
        row: usize,
        cell: usize,
        paragraph: usize,
    },
    /// Paragraph in a header
    HeaderParagraph { index: usize },
    /// Paragraph in a footer
    FooterParagraph { index: usize },
    /// Cell in a worksheet
    SheetCell {
        sheet: usize,
        row: usize,
        column: usize,
    },
    /// Shape on a slide
    SlideShape { slide: usize, shape: usize },
}

impl std::fmt::Display for UnitLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitLocation::BodyParagraph { index } => write!(f, "body paragraph {}", index),
            UnitLocation::TableCellParagraph {
                table,
                row,
                cell,
                paragraph,
            } => write!(
                f,
                "table {} row {} cell {} paragraph {}",
                table, row, cell, paragraph
            ),
            UnitLocation::HeaderParagraph { index } => write!(f, "header paragraph {}", index),
            UnitLocation::FooterParagraph { index } => write!(f, "footer paragraph {}", index),
            UnitLocation::SheetCell { sheet, row, column } => {
                write!(f, "sheet {} cell ({}, {})", sheet, row, column)
            }
            UnitLocation::SlideShape { slide, shape } => {
                write!(f, "slide {} shape {}", slide, shape)
            }
        }
    }
}

/// The atomic translatable span: accumulated source text, a handle back to
/// its place in the document, and the formatting to reapply afterwards.
///
/// Invariant: a unit is only created for content whose trimmed text is
/// non-empty.
#[derive(Debug, Clone)]
pub struct TextUnit {
    /// Where this unit lives in the document
    pub location: UnitLocation,

    /// What kind of span this is
    pub kind: UnitKind,

    /// Accumulated source text (non-empty after trimming)
    pub source_text: String,

    /// Formatting captured before translation
    pub snapshot: FormattingSnapshot,
}
