/*!
 * Document handling: interchange model, persistence, unit extraction,
 * and in-place rewriting of translated units.
 */

pub mod extract;
pub mod model;
pub mod rewrite;
pub mod store;

pub use extract::extract_units;
pub use model::{
    CellValue, Document, DocumentKind, FormattingSnapshot, Paragraph, Run, Shape, Sheet, Slide,
    SlideDeck, Table, TableCell, TableRow, TextBody, TextDocument, TextUnit, UnitKind,
    UnitLocation, Workbook,
};
pub use rewrite::apply_translation;
