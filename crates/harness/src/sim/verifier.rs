//! AMO test case execution and comparison.
//!
//! One case is the fixed sequence
//! `store old; fence; pre = amo(update); fence; post = load`, issued through a
//! [`SharedCell`] that exclusively borrows the target for the duration of the
//! case. A case passes when the reported pre-value equals `old` and the
//! post-value equals the reference model's result.

use tracing::trace;

use crate::common::Trap;
use crate::isa::rv32a::AmoOp;
use crate::sim::prng::Xorshift32;
use crate::sim::reference::{ReferenceFn, reference};
use crate::soc::cell::SharedCell;
use crate::soc::traits::AtomicTarget;
use crate::stats::OperationReport;

/// Inputs of one test case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Operation under test.
    pub op: AmoOp,
    /// Word stored into the cell before the AMO.
    pub old: u32,
    /// AMO operand.
    pub update: u32,
}

/// Values read back from the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observed {
    /// Pre-operation word the AMO returned.
    pub reported_pre: u32,
    /// Word loaded from the cell after the AMO.
    pub actual_post: u32,
}

/// Result of one test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The case that ran.
    pub case: TestCase,
    /// Reference model result.
    pub expected_post: u32,
    /// What the target produced, or the trap it raised.
    pub observed: Result<Observed, Trap>,
}

impl Outcome {
    /// The pre-value the AMO must report: the word that was stored.
    pub const fn expected_pre(&self) -> u32 {
        self.case.old
    }

    /// Returns true if both the pre- and post-value match. A trapped case
    /// never passes.
    pub const fn passed(&self) -> bool {
        match self.observed {
            Ok(ref seen) => {
                seen.reported_pre == self.case.old && seen.actual_post == self.expected_post
            }
            Err(_) => false,
        }
    }
}

/// Runs test cases against a target.
#[derive(Clone, Debug)]
pub struct Verifier {
    rng: Xorshift32,
    num_cases: u32,
    reference: ReferenceFn,
}

impl Verifier {
    /// Creates a verifier drawing operands from `seed`.
    pub const fn new(seed: u32, num_cases: u32) -> Self {
        Self {
            rng: Xorshift32::new(seed),
            num_cases,
            reference,
        }
    }

    /// Replaces the reference model (used to check the checker).
    #[must_use]
    pub const fn with_reference(mut self, reference: ReferenceFn) -> Self {
        self.reference = reference;
        self
    }

    /// Cases run per kind.
    pub const fn num_cases(&self) -> u32 {
        self.num_cases
    }

    /// Draws the next case: first `old`, then `update`.
    pub const fn next_case(&mut self, op: AmoOp) -> TestCase {
        let old = self.rng.next_u32();
        let update = self.rng.next_u32();
        TestCase { op, old, update }
    }

    /// Runs one case on the target's shared cell.
    pub fn run_case<T: AtomicTarget + ?Sized>(&self, target: &mut T, case: TestCase) -> Outcome {
        let mut cell = SharedCell::new(target);
        let observed = issue(&mut cell, case);
        Outcome {
            case,
            expected_post: (self.reference)(case.op, case.old, case.update),
            observed,
        }
    }

    /// Runs all cases of one kind, calling `on_case` with the index and
    /// outcome of each.
    pub fn run_kind<T, F>(&mut self, target: &mut T, op: AmoOp, mut on_case: F) -> OperationReport
    where
        T: AtomicTarget + ?Sized,
        F: FnMut(u32, &Outcome),
    {
        let mut report = OperationReport::new(op);
        for index in 0..self.num_cases {
            let case = self.next_case(op);
            let outcome = self.run_case(target, case);
            trace!(
                %op,
                index,
                old = case.old,
                update = case.update,
                passed = outcome.passed(),
                "case"
            );
            report.record(outcome.passed());
            on_case(index, &outcome);
        }
        report
    }
}

fn issue<T: AtomicTarget + ?Sized>(
    cell: &mut SharedCell<'_, T>,
    case: TestCase,
) -> Result<Observed, Trap> {
    cell.store(case.old)?;
    cell.fence();
    let reported_pre = cell.amo(case.op, case.update)?;
    cell.fence();
    let actual_post = cell.load()?;
    Ok(Observed {
        reported_pre,
        actual_post,
    })
}
