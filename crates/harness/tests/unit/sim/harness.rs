//! Harness state machine and end-to-end runs.
//!
//! Runs the full nine-kind loop against the simulated hart, the mock target
//! and a few deliberately broken targets, and checks the per-kind reports,
//! the run status and the exit code.

use amocheck_core::common::HarnessError;
use amocheck_core::config::Config;
use amocheck_core::sim::harness::{self, HarnessState};
use amocheck_core::sim::reference;
use amocheck_core::stats::RunStatus;
use amocheck_core::{AmoOp, Harness};
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;
use crate::common::mocks::sink::FailingSink;
use crate::common::mocks::target::{FencelessTarget, MockTarget, SwapReportsOperand};

const NO_A: &str = "0x40101104";

fn faulty_swap(op: AmoOp, old: u32, update: u32) -> u32 {
    if op == AmoOp::Swap {
        old
    } else {
        reference(op, old, update)
    }
}

// ══════════════════════════════════════════════════════════
// 1. Capability absent
// ══════════════════════════════════════════════════════════

#[test]
fn missing_extension_skips_every_kind() {
    let ctx = TestContext::new().with_cases(1000).with_misa(NO_A);
    let (summary, text, hart) = ctx.run_hart();

    assert_eq!(summary.status, RunStatus::ConfigurationUnavailable);
    assert_eq!(summary.exit_code(), 2);
    assert!(summary.reports.is_empty());
    assert_eq!(summary.cases_executed(), 0);
    assert_eq!(summary.total_errors(), 0);
    assert_eq!(hart.stats.stores, 0);
    assert_eq!(hart.stats.amos, 0);
    assert!(text.contains("A ISA extension not implemented"));
    assert!(!text.contains("Errors:"));
}

#[test]
fn missing_extension_on_mock_makes_no_other_call() {
    let mut mock = MockTarget::new();
    mock.expect_has_atomics().times(1).return_const(false);
    mock.expect_name().return_const("mock");

    let ctx = TestContext::new();
    let mut h = ctx.harness();
    let summary = h.run(&mut mock, Vec::new());
    assert_eq!(summary.status, RunStatus::ConfigurationUnavailable);
    assert_eq!(
        h.history(),
        [
            HarnessState::NotStarted,
            HarnessState::CapabilityChecked { available: false },
        ]
    );
}

#[test]
fn top_level_run_reports_configuration_unavailable() {
    let ctx = TestContext::new().with_misa(NO_A);
    match harness::run(&ctx.config, Vec::new()) {
        Err(HarnessError::ConfigurationUnavailable { target }) => assert_eq!(target, "sim-hart"),
        other => panic!("expected ConfigurationUnavailable, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// 2. Correct target
// ══════════════════════════════════════════════════════════

#[test]
fn correct_hart_passes_all_kinds() {
    let ctx = TestContext::new().with_cases(1000);
    let (summary, text, hart) = ctx.run_hart();

    assert!(summary.is_green());
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(summary.reports.len(), 9);
    for (report, op) in summary.reports.iter().zip(AmoOp::ALL) {
        assert_eq!(report.op, op);
        assert_eq!((report.errors, report.total), (0, 1000));
        assert!(text.contains(&format!("{op}: Errors: 0/1000 [ok]")));
    }
    assert_eq!(hart.stats.fences, 2 * 9 * 1000);
    assert_eq!(hart.stats.amos, 9 * 1000);
    assert_eq!(hart.stats.traps, 0);
}

#[test]
fn top_level_run_builds_target_from_config() {
    let ctx = TestContext::new().with_cases(16);
    let summary = harness::run(&ctx.config, Vec::new()).unwrap();
    assert!(summary.is_green());
    assert_eq!(summary.cases_executed(), 9 * 16);
}

#[test]
fn default_config_runs_ten_thousand_cases_per_kind() {
    let mut config = Config::default();
    config.general.color = false;
    let summary = harness::run(&config, Vec::new()).unwrap();
    assert!(summary.is_green());
    assert!(summary.reports.iter().all(|r| r.total == 10_000));
}

// ══════════════════════════════════════════════════════════
// 3. Faulty reference / faulty target
// ══════════════════════════════════════════════════════════

#[test]
fn faulty_swap_reference_fails_only_swap() {
    let ctx = TestContext::new().with_cases(1000);
    let mut hart = ctx.hart();
    let (summary, _) = ctx.run_with_reference(&mut hart, faulty_swap);

    assert_eq!(summary.status, RunStatus::Failed);
    assert_eq!(summary.exit_code(), 1);
    let swap = summary.report(AmoOp::Swap).unwrap();
    assert_eq!((swap.errors, swap.total), (1000, 1000));
    for op in &AmoOp::ALL[1..] {
        let report = summary.report(*op).unwrap();
        assert_eq!((report.errors, report.total), (0, 1000), "{op}");
    }
}

#[test]
fn wrong_reported_pre_value_is_caught() {
    let ctx = TestContext::new().with_cases(200);
    let mut target = SwapReportsOperand { inner: ctx.hart() };
    let (summary, text) = ctx.run_on(&mut target);

    assert_eq!(summary.report(AmoOp::Swap).unwrap().errors, 200);
    assert_eq!(summary.total_errors(), 200);
    assert!(text.contains("amoswap.w: Errors: 200/200 [FAILED]"));
}

#[test]
fn missing_fences_are_detected() {
    let ctx = TestContext::new().with_cases(64);
    let mut target = FencelessTarget::new(ctx.hart());
    let (summary, _) = ctx.run_on(&mut target);

    assert_eq!(summary.status, RunStatus::Failed);
    assert_eq!(summary.total_errors(), summary.cases_executed());
    assert_eq!(target.dropped_fences, 2 * 9 * 64);
}

#[test]
fn release_bit_orders_the_seeding_store() {
    let mut ctx = TestContext::new().with_cases(64);
    ctx.config.target.rl = true;
    let mut target = FencelessTarget::new(ctx.hart());
    let (summary, _) = ctx.run_on(&mut target);
    assert!(summary.is_green());
}

#[test]
fn same_address_ordering_masks_missing_fences() {
    let mut ctx = TestContext::new().with_cases(64);
    ctx.config.target.same_address_ordering = true;
    let mut target = FencelessTarget::new(ctx.hart());
    let (summary, _) = ctx.run_on(&mut target);
    assert!(summary.is_green());
    assert_eq!(target.dropped_fences, 2 * 9 * 64);
}

#[test]
fn misaligned_cell_fails_every_case_with_trap() {
    let mut ctx = TestContext::new().with_cases(4);
    ctx.config.target.cell_offset = 0x102;
    let (summary, text, hart) = ctx.run_hart();

    assert_eq!(summary.status, RunStatus::Failed);
    assert!(summary.reports.iter().all(|r| r.errors == 4 && r.total == 4));
    assert!(text.contains("trap StoreAddressMisaligned(0x80000102)"));
    assert_eq!(hart.stats.amos, 0);
    assert_eq!(hart.stats.traps, 9 * 4);
}

// ══════════════════════════════════════════════════════════
// 4. Determinism and state machine
// ══════════════════════════════════════════════════════════

#[test]
fn same_seed_gives_identical_reports_and_text() {
    let ctx = TestContext::new().with_cases(32).with_seed(1234).verbose();
    let (first, first_text, _) = ctx.run_hart();
    let (second, second_text, _) = ctx.run_hart();
    assert_eq!(first, second);
    assert_eq!(first_text, second_text);
}

#[test]
fn same_seed_reproduces_failure_counts() {
    let ctx = TestContext::new().with_cases(50).with_seed(99);
    let (a, _) = ctx.run_with_reference(&mut ctx.hart(), faulty_swap);
    let (b, _) = ctx.run_with_reference(&mut ctx.hart(), faulty_swap);
    assert_eq!(a.reports, b.reports);
}

#[test]
fn zero_seed_matches_default_seed() {
    let base = TestContext::new().with_cases(8).verbose();
    let (_, zero, _) = TestContext { config: base.config.clone() }
        .with_seed(0)
        .run_hart();
    let (_, default, _) = base.run_hart();
    assert_eq!(zero, default);
}

#[test]
fn different_seeds_give_different_cases() {
    let a = TestContext::new().with_cases(4).with_seed(1).verbose().run_hart().1;
    let b = TestContext::new().with_cases(4).with_seed(2).verbose().run_hart().1;
    assert_ne!(a, b);
}

#[test]
fn states_visit_every_kind_once_in_order() {
    let ctx = TestContext::new().with_cases(1);
    let mut hart = ctx.hart();
    let mut h = ctx.harness();
    assert_eq!(h.state(), HarnessState::NotStarted);
    let _ = h.run(&mut hart, Vec::new());

    let mut expected = vec![
        HarnessState::NotStarted,
        HarnessState::CapabilityChecked { available: true },
    ];
    expected.extend(AmoOp::ALL.map(HarnessState::Running));
    expected.push(HarnessState::Completed);
    assert_eq!(h.history(), expected.as_slice());
    assert_eq!(h.state(), HarnessState::Completed);
}

#[test]
fn completed_harness_does_not_run_again() {
    let ctx = TestContext::new().with_cases(2);
    let mut hart = ctx.hart();
    let mut h = ctx.harness();
    let _ = h.run(&mut hart, Vec::new());
    let amos = hart.stats.amos;

    let mut out = Vec::new();
    let again = h.run(&mut hart, &mut out);
    assert!(again.reports.is_empty());
    assert!(out.is_empty());
    assert_eq!(again.status, RunStatus::Passed);
    assert_eq!(hart.stats.amos, amos);
    assert_eq!(h.history().len(), 12);
}

#[test]
fn completed_harness_repeats_failed_status() {
    let ctx = TestContext::new().with_cases(4);
    let mut hart = ctx.hart();
    let mut h = ctx.harness().with_reference(faulty_swap);
    let first = h.run(&mut hart, Vec::new());
    assert_eq!(first.status, RunStatus::Failed);

    let again = h.run(&mut hart, Vec::new());
    assert!(again.reports.is_empty());
    assert_eq!(again.status, RunStatus::Failed);
    assert_eq!(again.exit_code(), 1);
}

#[test]
fn harness_without_extension_repeats_unavailable_status() {
    let ctx = TestContext::new().with_misa(NO_A);
    let mut hart = ctx.hart();
    let mut h = ctx.harness();
    let _ = h.run(&mut hart, Vec::new());

    let again = h.run(&mut hart, Vec::new());
    assert_eq!(again.status, RunStatus::ConfigurationUnavailable);
    assert_eq!(again.exit_code(), 2);
}

#[test]
fn harness_new_reads_general_config() {
    let mut config = Config::default();
    config.general.num_cases = 3;
    let mut h = Harness::new(&config.general);
    let mut hart = TestContext::new().hart();
    let summary = h.run(&mut hart, Vec::new());
    assert_eq!(summary.cases_executed(), 27);
}

// ══════════════════════════════════════════════════════════
// 5. Report sink failures
// ══════════════════════════════════════════════════════════

#[test]
fn failing_sink_leaves_counters_intact() {
    let ctx = TestContext::new().with_cases(10);
    let mut hart = ctx.hart();
    let mut sink = FailingSink::default();
    let summary = ctx.harness().run(&mut hart, &mut sink);

    assert!(summary.is_green());
    assert_eq!(summary.cases_executed(), 90);
    assert!(summary.sink_failures > 0);
    assert!(sink.attempts > 0);
}
