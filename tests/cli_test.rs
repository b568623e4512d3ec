use chisel::cli::Args;
use chisel::error::Error;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_args_from_positionals() {
    let args =
        Args::try_parse_from(["chisel", "src/engine", "Engine", "--definition"]).unwrap();

    let request = args.to_request().unwrap();
    assert_eq!(request.container, "src/engine");
    assert_eq!(request.name, "Engine");
    assert!(request.include_definition);
    assert!(!request.non_overrideable);
}

#[test]
fn test_args_require_name_without_request_file() {
    assert!(Args::try_parse_from(["chisel", "src/engine"]).is_err());
}

#[test]
fn test_request_file_conflicts_with_positionals() {
    assert!(Args::try_parse_from(["chisel", "--request", "req.json", "src", "Engine"])
        .is_err());
}

#[test]
fn test_request_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let request_file = temp_dir.path().join("req.json");
    fs::write(
        &request_file,
        r#"{"container": "src/engine", "name": "Engine", "include_definition": true}"#,
    )
    .unwrap();

    let args =
        Args::try_parse_from(["chisel", "--request", request_file.to_str().unwrap()])
            .unwrap();
    let request = args.to_request().unwrap();

    assert_eq!(request.container, "src/engine");
    assert_eq!(request.name, "Engine");
    assert!(request.include_definition);
    assert!(!request.non_overrideable);
}

#[test]
fn test_invalid_request_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let request_file = temp_dir.path().join("req.json");
    fs::write(&request_file, "not json").unwrap();

    let args =
        Args::try_parse_from(["chisel", "--request", request_file.to_str().unwrap()])
            .unwrap();

    match args.to_request() {
        Err(Error::RequestError(_)) => {}
        _ => panic!("Expected RequestError"),
    }
}

#[test]
fn test_missing_request_file_is_rejected() {
    let args = Args::try_parse_from(["chisel", "--request", "does-not-exist.json"])
        .unwrap();

    match args.to_request() {
        Err(Error::RequestError(_)) => {}
        _ => panic!("Expected RequestError"),
    }
}
