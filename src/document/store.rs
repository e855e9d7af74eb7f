/*!
 * Document persistence over the JSON interchange representation.
 *
 * Container-format adapters (OOXML, ODF, ...) produce and consume this
 * interchange form; the pipeline itself only reads and writes it here.
 * Load and save failures are fatal to a pipeline run.
 */

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::document::model::Document;
use crate::errors::DocumentError;

/// Open a document from the given path.
///
/// Fails with [`DocumentError::Load`] when the file is missing or the
/// content is not a valid interchange document.
pub fn open(path: &Path) -> Result<Document, DocumentError> {
    let file = File::open(path)
        .map_err(|e| DocumentError::Load(format!("{}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| DocumentError::Load(format!("{}: {}", path.display(), e)))
}

/// Persist a document to the given path.
///
/// Fails with [`DocumentError::Save`] on permission, disk-full, or locked
/// file errors.
pub fn save(document: &Document, path: &Path) -> Result<(), DocumentError> {
    let file = File::create(path)
        .map_err(|e| DocumentError::Save(format!("{}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| DocumentError::Save(format!("{}: {}", path.display(), e)))?;

    // Buffered bytes dropped without a flush would discard write errors
    writer
        .flush()
        .map_err(|e| DocumentError::Save(format!("{}: {}", path.display(), e)))
}
