/*!
 * Tests for file and folder utilities
 */

use std::fs;
use std::path::PathBuf;

use prevod::document::DocumentKind;
use prevod::file_utils::FileManager;

use crate::common::create_temp_dir;

#[test]
fn test_fileExists_andDirExists_shouldDistinguishKinds() {
    let dir = create_temp_dir().unwrap();
    let file = dir.path().join("doc.json");
    fs::write(&file, "{}").unwrap();

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(dir.path()));
    assert!(FileManager::dir_exists(dir.path()));
    assert!(!FileManager::dir_exists(&file));
}

#[test]
fn test_ensureDir_nestedPath_shouldCreateAllParents() {
    let dir = create_temp_dir().unwrap();
    let nested = dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());

    // Calling again on an existing directory is fine
    FileManager::ensure_dir(&nested).unwrap();
}

#[test]
fn test_generateOutputPath_shouldInsertLanguageCode() {
    let path = FileManager::generate_output_path("/in/report.json", "/out", "sr-Latn");
    assert_eq!(path, PathBuf::from("/out/report.sr-Latn.json"));

    // Extension-less inputs get the interchange extension
    let path = FileManager::generate_output_path("/in/report", "/out", "fr");
    assert_eq!(path, PathBuf::from("/out/report.fr.json"));
}

#[test]
fn test_findFiles_shouldRecurseIntoSubdirectories() {
    let dir = create_temp_dir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("a.json"), "{}").unwrap();
    fs::write(sub.join("b.json"), "{}").unwrap();
    fs::write(sub.join("c.txt"), "").unwrap();

    let files = FileManager::find_files(dir.path(), "json").unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn test_detectDocumentKind_byExtension_shouldMapContainerFormats() {
    let dir = create_temp_dir().unwrap();
    for (name, expected) in [
        ("a.docx", DocumentKind::Text),
        ("b.odt", DocumentKind::Text),
        ("c.xlsx", DocumentKind::Spreadsheet),
        ("d.pptx", DocumentKind::Presentation),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        assert_eq!(FileManager::detect_document_kind(&path).unwrap(), Some(expected));
    }
}

#[test]
fn test_detectDocumentKind_interchangeJson_shouldProbeKindTag() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("deck.json");
    fs::write(&path, r#"{"kind":"presentation","slides":[]}"#).unwrap();

    assert_eq!(
        FileManager::detect_document_kind(&path).unwrap(),
        Some(DocumentKind::Presentation)
    );
}

#[test]
fn test_detectDocumentKind_missingFile_shouldFail() {
    assert!(FileManager::detect_document_kind("/does/not/exist.json").is_err());
}
