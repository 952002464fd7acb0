use amocheck_core::common::HarnessError;
use amocheck_core::config::{TargetConfig, TargetKind};
use amocheck_core::soc::build_target;

#[test]
fn simulated_kind_builds_hart() {
    let target = build_target(&TargetConfig::default()).unwrap();
    assert_eq!(target.name(), "sim-hart");
    assert!(target.has_atomics());
    assert_eq!(target.cell_addr(), 0x8000_0100);
}

#[test]
fn host_kind_builds_host_target() {
    let config = TargetConfig {
        kind: TargetKind::Host,
        ..TargetConfig::default()
    };
    let target = build_target(&config).unwrap();
    assert_eq!(target.name(), "host");
    assert_eq!(target.cell_addr() % 4, 0);
}

#[test]
fn bad_misa_fails_build() {
    let config = TargetConfig {
        misa_override: Some("0xnope".to_string()),
        ..TargetConfig::default()
    };
    assert!(matches!(
        build_target(&config).err(),
        Some(HarnessError::InvalidMisa(_))
    ));
}

#[test]
fn host_ignores_simulated_layout() {
    let config = TargetConfig {
        kind: TargetKind::Host,
        cell_offset: 0x10_0000,
        ..TargetConfig::default()
    };
    assert!(build_target(&config).is_ok());
}
