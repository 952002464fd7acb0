//! Host-CPU target: the nine AMOs on `std::sync::atomic::AtomicU32`.

use std::sync::atomic::Ordering;

use amocheck_core::AmoOp;
use amocheck_core::common::Trap;
use amocheck_core::soc::{AtomicTarget, HostTarget, SharedCell};
use rstest::rstest;

use crate::common::harness::TestContext;

#[rstest]
#[case(AmoOp::Swap, 3)]
#[case(AmoOp::Add, 8)]
#[case(AmoOp::And, 1)]
#[case(AmoOp::Or, 7)]
#[case(AmoOp::Xor, 6)]
#[case(AmoOp::Max, 5)]
#[case(AmoOp::Maxu, 5)]
#[case(AmoOp::Min, 3)]
#[case(AmoOp::Minu, 3)]
fn host_amo_small_operands(#[case] op: AmoOp, #[case] expected: u32) {
    let mut host = HostTarget::default();
    let mut cell = SharedCell::new(&mut host);
    cell.store(5).unwrap();
    cell.fence();
    assert_eq!(cell.amo(op, 3), Ok(5));
    cell.fence();
    assert_eq!(cell.load(), Ok(expected));
}

#[test]
fn host_signed_ops_use_twos_complement() {
    let mut host = HostTarget::default();
    let addr = host.cell_addr();
    host.store_word(addr, 0x8000_0000).unwrap();
    assert_eq!(host.amomax_w(addr, i32::MAX), Ok(0x8000_0000));
    assert_eq!(host.load_word(addr), Ok(0x7FFF_FFFF));
    host.store_word(addr, 0x8000_0000).unwrap();
    assert_eq!(host.amomin_w(addr, i32::MAX), Ok(0x8000_0000));
    assert_eq!(host.load_word(addr), Ok(0x8000_0000));
}

#[test]
fn host_counts_fences() {
    let mut host = HostTarget::default();
    host.fence();
    host.fence();
    assert_eq!(host.fences(), 2);
}

#[rstest]
#[case(false, false, Ordering::Relaxed)]
#[case(true, false, Ordering::Acquire)]
#[case(false, true, Ordering::Release)]
#[case(true, true, Ordering::SeqCst)]
fn aq_rl_select_ordering(#[case] aq: bool, #[case] rl: bool, #[case] expected: Ordering) {
    assert_eq!(HostTarget::new(aq, rl).ordering(), expected);
}

#[test]
fn host_rejects_misaligned_and_foreign_addresses() {
    let mut host = HostTarget::default();
    let base = host.cell_addr();
    assert_eq!(
        host.amo_w(AmoOp::Add, base + 1, 1),
        Err(Trap::StoreAddressMisaligned(base + 1))
    );
    assert_eq!(
        host.load_word(base + 2),
        Err(Trap::LoadAddressMisaligned(base + 2))
    );
    let past_window = base + 64;
    assert_eq!(
        host.store_word(past_window, 1),
        Err(Trap::StoreAccessFault(past_window))
    );
    if base >= 4 {
        assert_eq!(
            host.amo_w(AmoOp::Swap, base - 4, 1),
            Err(Trap::StoreAccessFault(base - 4))
        );
    }
}

#[test]
fn harness_passes_on_host() {
    let ctx = TestContext::new().with_cases(500);
    let mut host = HostTarget::new(true, true);
    let (summary, _) = ctx.run_on(&mut host);
    assert!(summary.is_green(), "{summary:?}");
    assert_eq!(summary.cases_executed(), 9 * 500);
    assert_eq!(host.fences(), 2 * 9 * 500);
}
