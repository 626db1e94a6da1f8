use super::*;
use tempfile::tempdir;

#[test]
fn missing_file_loads_as_none() {
    let dir = tempdir().unwrap();
    let loaded = DocumentFile::load(&dir.path().join("nope.quire")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chapter.quire");
    let file = DocumentFile {
        version: FORMAT_VERSION,
        properties: DocumentProperties {
            title: "Chapter One".to_string(),
            ..DocumentProperties::default()
        },
        sessions: Vec::new(),
        body: vec!["It was a dark night.".to_string(), String::new()],
    };
    file.save(&path).unwrap();

    assert!(!tmp_path(&path).exists());
    let loaded = DocumentFile::load(&path).unwrap().unwrap();
    assert_eq!(loaded, file);
}

#[test]
fn garbage_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chapter.quire");
    std::fs::write(&path, "plain text, not json").unwrap();
    assert!(matches!(
        DocumentFile::load(&path),
        Err(DocumentFileError::Parse { .. })
    ));
}

#[test]
fn newer_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chapter.quire");
    std::fs::write(&path, r#"{ "version": 99 }"#).unwrap();
    let err = DocumentFile::load(&path).unwrap_err();
    assert!(matches!(err, DocumentFileError::Version { found: 99, .. }));
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("chapter.quire");
    let err = DocumentFile::default().save(&path).unwrap_err();
    assert!(matches!(err, DocumentFileError::Io { .. }));
}
