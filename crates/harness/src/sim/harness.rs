//! Harness state machine.
//!
//! A run moves through
//! `NotStarted -> CapabilityChecked -> Running(op)* -> Completed`, visiting
//! every AMO kind once in [`AmoOp::ALL`] order. If the capability check
//! finds no A extension the run ends right after `CapabilityChecked` with no
//! case executed. No state is ever re-entered.

use std::io::Write;

use tracing::{debug, info};

use crate::common::HarnessError;
use crate::config::{Config, GeneralConfig};
use crate::isa::rv32a::AmoOp;
use crate::sim::reference::ReferenceFn;
use crate::sim::verifier::Verifier;
use crate::soc::builder::build_target;
use crate::soc::traits::AtomicTarget;
use crate::stats::{Reporter, RunStatus, Summary};

/// Phase of a harness run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarnessState {
    /// Nothing has happened yet.
    NotStarted,
    /// The capability probe ran.
    CapabilityChecked {
        /// Whether the A extension is present.
        available: bool,
    },
    /// Cases of one kind are executing.
    Running(AmoOp),
    /// All kinds ran.
    Completed,
}

/// Drives one target through all nine AMO kinds.
#[derive(Debug)]
pub struct Harness {
    verifier: Verifier,
    silent: bool,
    color: bool,
    state: HarnessState,
    history: Vec<HarnessState>,
    finished: Option<RunStatus>,
}

impl Harness {
    /// Creates a harness from the run parameters.
    pub fn new(general: &GeneralConfig) -> Self {
        Self {
            verifier: Verifier::new(general.seed, general.num_cases),
            silent: general.silent_mode,
            color: general.color,
            state: HarnessState::NotStarted,
            history: vec![HarnessState::NotStarted],
            finished: None,
        }
    }

    /// Replaces the reference model the verifier compares against.
    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceFn) -> Self {
        self.verifier = self.verifier.with_reference(reference);
        self
    }

    /// Current state.
    pub const fn state(&self) -> HarnessState {
        self.state
    }

    /// Every state entered so far, in order.
    pub fn history(&self) -> &[HarnessState] {
        &self.history
    }

    /// Runs the harness against `target`, writing the report to `sink`.
    ///
    /// A harness runs once; calling this again after completion returns an
    /// empty summary with the status of the finished run.
    pub fn run<T, W>(&mut self, target: &mut T, sink: W) -> Summary
    where
        T: AtomicTarget + ?Sized,
        W: Write,
    {
        let mut reporter = Reporter::new(sink, self.silent, self.color);
        if let Some(status) = self.finished {
            debug!(state = ?self.state, %status, "harness already ran");
            let mut summary = reporter.finalize();
            summary.status = status;
            return summary;
        }

        reporter.banner();
        let available = target.has_atomics();
        self.enter(HarnessState::CapabilityChecked { available });
        info!(target_name = target.name(), available, "capability probe");
        if !available {
            reporter.capability_missing(target.name());
            return self.finish(reporter.finalize());
        }

        reporter.intro(self.verifier.num_cases());
        for op in AmoOp::ALL {
            self.enter(HarnessState::Running(op));
            debug!(%op, cases = self.verifier.num_cases(), "starting kind");
            reporter.kind_heading(op);
            let report = self
                .verifier
                .run_kind(target, op, |index, outcome| reporter.case(index, outcome));
            reporter.record(report);
        }
        reporter.completed();
        self.enter(HarnessState::Completed);

        let summary = self.finish(reporter.finalize());
        info!(
            status = %summary.status,
            errors = summary.total_errors(),
            cases = summary.cases_executed(),
            "run finished"
        );
        summary
    }

    fn enter(&mut self, next: HarnessState) {
        self.state = next;
        self.history.push(next);
    }

    const fn finish(&mut self, summary: Summary) -> Summary {
        self.finished = Some(summary.status);
        summary
    }
}

/// Builds the configured target and runs the harness against it.
///
/// # Errors
///
/// Returns [`HarnessError::ConfigurationUnavailable`] if the target lacks the
/// A extension, or the builder's error if the target cannot be constructed.
/// Mismatching cases are not errors; they are reported in the [`Summary`].
pub fn run<W: Write>(config: &Config, sink: W) -> Result<Summary, HarnessError> {
    let mut target = build_target(&config.target)?;
    let mut harness = Harness::new(&config.general);
    let summary = harness.run(target.as_mut(), sink);
    if summary.status == RunStatus::ConfigurationUnavailable {
        return Err(HarnessError::ConfigurationUnavailable {
            target: target.name().to_string(),
        });
    }
    Ok(summary)
}
