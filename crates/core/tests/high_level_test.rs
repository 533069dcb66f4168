//! Tests for the high-level document API and storage gate.

use std::fs;
use std::path::Path;

use gridpage_core::api::{
    DocumentOptions, generate_document, generate_document_with, layout_records,
};
use gridpage_core::model::{Column, ColumnSpec, Field, sample_records};
use gridpage_core::storage::{AllowAll, FsAccess, StorageAccess, persist};
use gridpage_core::{GroupOrder, ReportError, Result};

struct DenyAll;

impl StorageAccess for DenyAll {
    fn check(&self, path: &Path) -> Result<()> {
        Err(ReportError::PermissionDenied {
            path: path.to_path_buf(),
        })
    }
}

#[test]
fn test_generate_document_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GFG.pdf");

    let written = generate_document(
        &sample_records(),
        &ColumnSpec::default(),
        &path,
        &DocumentOptions::default(),
    )
    .unwrap();

    assert_eq!(written, path);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    // Only the finished document is left in the directory.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_generate_document_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.pdf");
    fs::write(&path, b"stale").unwrap();

    generate_document_with(
        &sample_records(),
        &ColumnSpec::default(),
        &path,
        &DocumentOptions::default(),
        &AllowAll,
    )
    .unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_permission_denied_skips_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("denied.pdf");

    let err = generate_document_with(
        &sample_records(),
        &ColumnSpec::default(),
        &path,
        &DocumentOptions::default(),
        &DenyAll,
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::PermissionDenied { .. }));
    assert!(!path.exists());
}

#[test]
fn test_missing_directory_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let err = generate_document(
        &sample_records(),
        &ColumnSpec::default(),
        &path,
        &DocumentOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::Io(_)), "got {err:?}");
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_is_permission_denied() {
    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&locked, perms.clone()).unwrap();

    let result = FsAccess.check(&locked.join("out.pdf"));

    #[allow(clippy::permissions_set_readonly_false)]
    perms.set_readonly(false);
    fs::set_permissions(&locked, perms).unwrap();

    assert!(matches!(result, Err(ReportError::PermissionDenied { .. })));
}

#[test]
fn test_invalid_options_are_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.pdf");
    let mut options = DocumentOptions::default();
    options.params.row_height = 0.0;

    let err = generate_document(&sample_records(), &ColumnSpec::default(), &path, &options)
        .unwrap_err();
    assert!(matches!(err, ReportError::InvalidConfig(_)));
    assert!(!path.exists());
}

#[test]
fn test_layout_records_sorted_groups() {
    let options = DocumentOptions {
        group_order: GroupOrder::Sorted,
        ..DocumentOptions::default()
    };
    let table = layout_records(&sample_records(), &ColumnSpec::default(), &options).unwrap();
    assert_eq!(table.groups.keys().next(), Some("Beijing"));
    assert_eq!(table.extent, 640.0);
    assert_eq!(table.cells[4].text, "Beijing");
    assert_eq!(table.cells[4].height, 80.0);
}

#[test]
fn test_custom_columns() {
    let columns = ColumnSpec::new(vec![
        Column::new("City", 120.0, Field::GroupKey),
        Column::new("Id", 60.0, Field::UserId),
    ])
    .unwrap();
    let table = layout_records(&sample_records(), &columns, &DocumentOptions::default()).unwrap();
    assert_eq!(table.cells.len(), 2 + 9 + 15);
    assert_eq!(table.cells[3].text, "001");
    assert_eq!(table.cells[3].x, 176.0);
}

#[test]
fn test_options_from_partial_json() {
    let options: DocumentOptions =
        serde_json::from_str(r#"{"params": {"row_height": 30}, "group_order": "sorted"}"#)
            .unwrap();
    assert_eq!(options.params.row_height, 30.0);
    assert_eq!(options.params.header_height, 40.0);
    assert_eq!(options.group_order, GroupOrder::Sorted);
    assert!(options.compress);
    assert!(options.validate().is_ok());
}

#[test]
fn test_persist_replaces_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    persist(&path, b"first").unwrap();
    persist(&path, b"second").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"second");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn test_generated_file_gets_default_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    fs::write(&plain, b"x").unwrap();
    let path = dir.path().join("table.pdf");

    generate_document(
        &sample_records(),
        &ColumnSpec::default(),
        &path,
        &DocumentOptions::default(),
    )
    .unwrap();

    let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&plain));
}

#[cfg(unix)]
#[test]
fn test_replaced_file_keeps_its_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.pdf");
    fs::write(&path, b"stale").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    persist(&path, b"fresh").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"fresh");
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o640);
}
