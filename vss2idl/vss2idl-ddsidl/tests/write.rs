
use std::fs;

use test_helpers::*;
use vss2idl_ddsidl::{ExportError, IdlExporter, Layout};

#[test]
fn write_stores_the_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vss.idl");
    let root = cabin_tree();

    let exporter = IdlExporter::builder()
        .with_layout(Layout::Consolidated)
        .build();
    let doc = exporter.write(&root, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), doc.text());
    assert_eq!(doc.text(), exporter.export(&root).text());
}

#[test]
fn write_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vss.idl");
    fs::write(&path, "stale").unwrap();

    IdlExporter::default().write(&cabin_tree(), &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("module Vehicle\n{\n"));
}

#[test]
fn unwritable_destination_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("vss.idl");

    let err = IdlExporter::default()
        .write(&cabin_tree(), &path)
        .unwrap_err();
    match err {
        ExportError::Write { path: reported, .. } => {
            assert!(reported.ends_with("vss.idl"));
        }
    }
    assert!(!path.exists());
}
