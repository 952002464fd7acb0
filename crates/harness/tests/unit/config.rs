//! Configuration defaults, JSON loading and derived values.

use std::io::Write;

use amocheck_core::common::{DEFAULT_NUM_CASES, DEFAULT_SEED, HarnessError};
use amocheck_core::config::{Config, TargetConfig, TargetKind};
use amocheck_core::core::Hart;
use amocheck_core::core::arch::csr::MISA_DEFAULT_RV32IMACU;
use amocheck_core::sim::harness;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

#[test]
fn default_general_matches_firmware_constants() {
    let config = Config::default();
    assert_eq!(config.general.num_cases, DEFAULT_NUM_CASES);
    assert_eq!(config.general.num_cases, 10_000);
    assert_eq!(config.general.seed, DEFAULT_SEED);
    assert_eq!(config.general.seed, 314_159_265);
    assert!(config.general.silent_mode);
    assert!(config.general.color);
}

#[test]
fn default_target_is_simulated_hart() {
    let target = TargetConfig::default();
    assert_eq!(target.kind, TargetKind::Simulated);
    assert_eq!(target.misa_override, None);
    assert_eq!(target.ram_base, 0x8000_0000);
    assert_eq!(target.cell_addr(), Some(0x8000_0100));
    assert!(!target.aq);
    assert!(!target.rl);
    assert!(!target.same_address_ordering);
}

#[test]
fn empty_document_equals_default() {
    let parsed = Config::from_json("{}").unwrap();
    let default = Config::default();
    assert_eq!(parsed.general.num_cases, default.general.num_cases);
    assert_eq!(parsed.general.seed, default.general.seed);
    assert_eq!(parsed.target.ram_size, default.target.ram_size);
    assert_eq!(parsed.target.cell_offset, default.target.cell_offset);
    assert_eq!(
        parsed.target.store_buffer_depth,
        default.target.store_buffer_depth
    );
}

// ══════════════════════════════════════════════════════════
// 2. JSON loading
// ══════════════════════════════════════════════════════════

#[test]
fn partial_document_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "general": { "num_cases": 12 } }"#).unwrap();
    assert_eq!(config.general.num_cases, 12);
    assert_eq!(config.general.seed, DEFAULT_SEED);
    assert!(config.general.silent_mode);
}

#[rstest]
#[case(r#""Simulated""#, TargetKind::Simulated)]
#[case(r#""simulated""#, TargetKind::Simulated)]
#[case(r#""Host""#, TargetKind::Host)]
#[case(r#""host""#, TargetKind::Host)]
fn target_kind_accepts_both_spellings(#[case] raw: &str, #[case] expected: TargetKind) {
    let json = format!(r#"{{ "target": {{ "kind": {raw} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().target.kind, expected);
}

#[test]
fn malformed_document_is_config_error() {
    let err = Config::from_json(r#"{ "general": { "num_cases": "many" } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "general": {{ "seed": 99, "silent_mode": false }}, "target": {{ "aq": true }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.seed, 99);
    assert!(!config.general.silent_mode);
    assert!(config.target.aq);
}

#[test]
fn from_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Config::from_file(&path) {
        Err(HarnessError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// 3. misa override
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(None, MISA_DEFAULT_RV32IMACU)]
#[case(Some("0x40101104"), 0x4010_1104)]
#[case(Some("0X40101105"), 0x4010_1105)]
#[case(Some("40101104"), 0x4010_1104)]
fn misa_parses_hex(#[case] raw: Option<&str>, #[case] expected: u32) {
    let target = TargetConfig {
        misa_override: raw.map(str::to_string),
        ..TargetConfig::default()
    };
    assert_eq!(target.misa().unwrap(), expected);
}

#[test]
fn misa_rejects_non_hex() {
    let target = TargetConfig {
        misa_override: Some("rv32imac".to_string()),
        ..TargetConfig::default()
    };
    match target.misa() {
        Err(HarnessError::InvalidMisa(raw)) => assert_eq!(raw, "rv32imac"),
        other => panic!("expected InvalidMisa, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// 4. Layout validation
// ══════════════════════════════════════════════════════════

const WRAPPING_LAYOUT: &str =
    r#"{ "target": { "ram_base": 18446744073709547520, "cell_offset": 8192 } }"#;

#[test]
fn cell_addr_overflow_is_none() {
    let config = Config::from_json(WRAPPING_LAYOUT).unwrap();
    assert_eq!(config.target.cell_addr(), None);
}

#[test]
fn wrapping_cell_address_is_rejected_at_build() {
    let config = Config::from_json(WRAPPING_LAYOUT).unwrap();
    match Hart::from_config(&config.target) {
        Err(HarnessError::CellOutOfRange { offset, size }) => {
            assert_eq!(offset, 8192);
            assert_eq!(size, 4096);
        }
        other => panic!("expected CellOutOfRange, got {other:?}"),
    }
}

#[test]
fn wrapping_cell_address_fails_the_run_before_any_output() {
    let config = Config::from_json(WRAPPING_LAYOUT).unwrap();
    let mut out = Vec::new();
    assert!(matches!(
        harness::run(&config, &mut out),
        Err(HarnessError::CellOutOfRange { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn ram_above_4gib_is_rejected_at_build() {
    let config = Config::from_json(r#"{ "target": { "ram_base": 4294967296 } }"#).unwrap();
    match Hart::from_config(&config.target) {
        Err(HarnessError::CellNotAddressable { addr }) => assert_eq!(addr, 0x1_0000_0100),
        other => panic!("expected CellNotAddressable, got {other:?}"),
    }
}

#[test]
fn ram_above_4gib_is_a_configuration_error_not_failed_cases() {
    let config = Config::from_json(
        r#"{ "general": { "num_cases": 3 }, "target": { "ram_base": 4294967296 } }"#,
    )
    .unwrap();
    let mut out = Vec::new();
    assert!(matches!(
        harness::run(&config, &mut out),
        Err(HarnessError::CellNotAddressable { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn last_word_below_4gib_is_accepted() {
    let target = TargetConfig {
        ram_base: 0xFFFF_F000,
        cell_offset: 0xFFC,
        ..TargetConfig::default()
    };
    let hart = Hart::from_config(&target).unwrap();
    assert_eq!(hart.peek_memory(0xFFFF_FFFC), Some(0));
}

#[test]
fn word_straddling_4gib_is_rejected() {
    let target = TargetConfig {
        ram_base: 0xFFFF_F000,
        ram_size: 0x2000,
        cell_offset: 0xFFE,
        ..TargetConfig::default()
    };
    assert!(matches!(
        Hart::from_config(&target),
        Err(HarnessError::CellNotAddressable { addr: 0xFFFF_FFFE })
    ));
}
