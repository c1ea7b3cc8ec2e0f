//! Configuration defaults and loading.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use rv32sc_core::common::{ConfigError, SimError};
use rv32sc_core::config::Config;
use rv32sc_core::sim::Simulator;

#[test]
fn defaults_describe_the_reference_system() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_cycles, 1000);
    assert_eq!(config.memory.imem_words, 64);
    assert_eq!(config.memory.dmem_words, 64);
    assert_eq!(config.testbench.success_addr, 100);
    assert_eq!(config.testbench.success_value, 25);
    assert_eq!(config.testbench.allowed_store_addrs, vec![96]);
}

#[test]
fn empty_object_is_the_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(
        r#"{ "testbench": { "allowed_store_addrs": [] }, "general": { "trace_instructions": true } }"#,
    )
    .unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_cycles, 1000);
    assert!(config.testbench.allowed_store_addrs.is_empty());
    assert_eq!(config.testbench.success_value, 25);
}

#[rstest]
#[case(r#"{ "memory": { "imem_words": 48 } }"#, "imem_words", 48)]
#[case(r#"{ "memory": { "dmem_words": 0 } }"#, "dmem_words", 0)]
fn memory_sizes_are_validated(#[case] json: &str, #[case] field: &str, #[case] size: usize) {
    match Config::from_json(json) {
        Err(ConfigError::InvalidMemorySize { name, words }) => {
            assert_eq!(name, field);
            assert_eq!(words, size);
        }
        other => panic!("expected InvalidMemorySize, got {other:?}"),
    }
}

#[test]
fn malformed_json() {
    assert!(matches!(Config::from_json("{ general: 1 }"), Err(ConfigError::Json(_))));
    assert!(matches!(
        Config::from_json(r#"{ "general": { "max_cycles": -1 } }"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn from_file_and_into_simulator() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "memory": {{ "imem_words": 32, "dmem_words": 128 }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let sim = Simulator::new(&config).unwrap();
    assert_eq!(sim.imem.len(), 32);
    assert_eq!(sim.dmem.len(), 128);
    assert_eq!(sim.config(), &config);
}

#[test]
fn missing_file() {
    let err = Config::from_file("/nonexistent/rv32sc.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(matches!(SimError::from(err), SimError::Config(ConfigError::Io { .. })));
}
