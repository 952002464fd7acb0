//! Disassembler output.

use amocheck_core::AmoOp;
use amocheck_core::core::units::lsu::ordering::Fence;
use amocheck_core::isa::disasm::disassemble;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x08b5262f, "amoswap.w a2, a1, (a0)")]
#[case(0x00b5262f, "amoadd.w a2, a1, (a0)")]
#[case(0x06b5262f, "amoadd.w.aqrl a2, a1, (a0)")]
#[case(0xe4b5262f, "amomaxu.w.aq a2, a1, (a0)")]
#[case(0x82b5262f, "amomin.w.rl a2, a1, (a0)")]
fn word_amos(#[case] inst: u32, #[case] text: &str) {
    assert_eq!(disassemble(inst), text);
}

#[test]
fn lr_has_no_rs2() {
    // lr.w a2, (a0)
    assert_eq!(disassemble(0x1005262f), "lr.w a2, (a0)");
}

#[test]
fn double_width_suffix() {
    // amoor.d a2, a1, (a0)
    assert_eq!(disassemble(0x40b5362f), "amoor.d a2, a1, (a0)");
}

#[rstest]
#[case(0x0ff0000f, "fence")]
#[case(0x0330000f, "fence rw, rw")]
#[case(0x0120000f, "fence w, r")]
#[case(0x0000100f, "fence.i")]
fn fences(#[case] inst: u32, #[case] text: &str) {
    assert_eq!(disassemble(inst), text);
}

#[test]
fn full_fence_encoding_disassembles_as_fence() {
    assert_eq!(disassemble(Fence::FULL.encode()), "fence");
}

#[test]
fn unknown_encoding() {
    assert_eq!(disassemble(0x0000_0013), "unknown (0x00000013)");
}

#[test]
fn every_kind_disassembles_to_its_mnemonic() {
    for op in AmoOp::ALL {
        let text = disassemble(op.encode(12, 10, 11, false, false));
        assert!(text.starts_with(op.mnemonic()), "{text}");
    }
}
