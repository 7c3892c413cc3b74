#![allow(missing_docs)]

use std::io::Write;

use rips_standards::{CatalogRegistry, CatalogSource, StandardsError, load_catalog_csv, names};

#[test]
fn loaded_catalogs_override_builtin() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "catalog,code,description").unwrap();
    writeln!(file, "CUPS,890201,Consulta de primera vez").unwrap();
    writeln!(file, "CUPS,890301,Consulta de control").unwrap();
    file.flush().unwrap();

    let loaded = load_catalog_csv(file.path()).expect("load catalogs");
    let mut registry = CatalogRegistry::builtin();
    registry.merge(loaded);

    assert!(registry.contains(names::CUPS, "890201"));
    assert!(registry.contains(names::CUPS, "890301"));
    assert!(!registry.contains(names::CUPS, "890501"));
    // Untouched catalogs keep their built-in codes.
    assert!(registry.contains(names::CIE10, "E119"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let err = load_catalog_csv(&path).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}
