use std::io::Write;

use gvm_core::config::{Config, GeneralConfig, OutputConfig};
use gvm_core::{BufferSink, Gvm, GvmError, Status};
use tempfile::NamedTempFile;

use crate::common::harness::TestContext;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(config.general.collect_stats);
    assert!(!config.output.to_stderr);
}

#[test]
fn test_empty_document_matches_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_document_fills_missing_fields() {
    let config = Config::from_json(r#"{ "general": { "collect_stats": false } }"#).unwrap();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                collect_stats: false,
            },
            output: OutputConfig { to_stderr: false },
        }
    );

    let config = Config::from_json(r#"{ "output": { "to_stderr": true } }"#).unwrap();
    assert!(config.output.to_stderr);
    assert!(config.general.collect_stats);
}

#[test]
fn test_wrong_type_is_rejected() {
    assert!(Config::from_json(r#"{ "general": { "collect_stats": "yes" } }"#).is_err());
    assert!(Config::from_json("[1, 2]").is_err());
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "trace_instructions": true } }"#)
        .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.trace_instructions);
}

#[test]
fn test_from_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("gvm.json")).unwrap_err();
    assert!(matches!(err, GvmError::Io { .. }));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, GvmError::Json { ref path, .. } if path == file.path()));
}

#[test]
fn test_machine_keeps_its_config() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let vm = Gvm::with_output(config.clone(), BufferSink::new());
    assert_eq!(vm.config(), &config);
}

#[test]
fn test_tracing_does_not_change_results() {
    let source = "AT 0\nMULMEM 0\nOUTPUT\n";

    let mut plain = TestContext::new().load_source(source, &[6]);
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut traced = TestContext::with_config(config).load_source(source, &[6]);

    assert_eq!(plain.run(), Status::Halted);
    assert_eq!(traced.run(), Status::Halted);
    assert_eq!(plain.outputs(), traced.outputs());
    assert_eq!(traced.outputs(), &[36]);
}
