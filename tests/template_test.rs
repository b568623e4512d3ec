use chisel::error::Error;
use chisel::template::{TemplateKind, TemplateStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_builtin_store_holds_both_templates() {
    let store = TemplateStore::builtin();

    let declaration = store.get(TemplateKind::Declaration);
    assert!(declaration.contains("${name}"));
    assert!(declaration.contains("${NAME}"));
    assert!(declaration.contains("${virtual }"));

    let definition = store.get(TemplateKind::Definition);
    assert!(definition.contains("${name}"));
    assert!(!definition.contains("${NAME}"));
    assert!(!definition.contains("${virtual }"));
}

#[test]
fn test_store_returns_same_text_every_call() {
    let store = TemplateStore::builtin();
    assert_eq!(
        store.get(TemplateKind::Declaration),
        store.get(TemplateKind::Declaration)
    );
}

#[test]
fn test_load_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("subsystem.h.tmpl"), "class ${name};\n").unwrap();
    fs::write(temp_dir.path().join("subsystem.cpp.tmpl"), "// ${name}\n").unwrap();

    let store = TemplateStore::load_from(temp_dir.path()).unwrap();
    assert_eq!(store.get(TemplateKind::Declaration), "class ${name};\n");
    assert_eq!(store.get(TemplateKind::Definition), "// ${name}\n");
}

#[test]
fn test_load_from_missing_template_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("subsystem.h.tmpl"), "class ${name};\n").unwrap();

    match TemplateStore::load_from(temp_dir.path()) {
        Err(Error::TemplateLoadError { name, .. }) => {
            assert_eq!(name, "subsystem.cpp.tmpl")
        }
        _ => panic!("Expected TemplateLoadError"),
    }
}
