//! Tests for workspace configuration loading.
use pipeforge::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = WorkspaceConfig::default();
    assert_eq!(config.store_name, "workspace-storage");
    assert_eq!(config.store_version, 1);
    assert_eq!(config.storage_format, StorageFormat::Json);
    assert_eq!(config.endpoint, "http://127.0.0.1:8080/api/generate-code");
    assert_eq!(config.timeout().as_secs(), 10);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config(r#"{ "store_version": 2, "storage_format": "binary", "timeout_secs": 3 }"#);
    let config = WorkspaceConfig::from_file(file.path()).unwrap();

    assert_eq!(config.store_version, 2);
    assert_eq!(config.storage_format, StorageFormat::Binary);
    assert_eq!(config.timeout().as_secs(), 3);
    assert_eq!(config.store_name, "workspace-storage");

    let store = config.open_store();
    assert_eq!(store.version(), 2);
    assert_eq!(store.format(), StorageFormat::Binary);

    let generator = config.code_generator();
    assert_eq!(generator.transport().endpoint(), config.endpoint);
}

#[test]
fn test_missing_file_is_read_error() {
    let err = WorkspaceConfig::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_invalid_file_is_parse_error() {
    let file = write_config(r#"{ "storage_format": "yaml" }"#);
    let err = WorkspaceConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_workspace_error_messages() {
    assert_eq!(
        WorkspaceError::SelectWithoutOptions {
            label: "mode".to_string()
        }
        .to_string(),
        "Parameter 'mode' is a select but no options were given"
    );
    assert_eq!(
        WorkspaceError::NotSupported {
            node_id: "step-1".to_string(),
            action: "deletion"
        }
        .to_string(),
        "Node 'step-1' does not support deletion"
    );
}
