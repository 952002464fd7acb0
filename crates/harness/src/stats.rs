//! Per-operation reports and run summary.
//!
//! This module turns verified test cases into console output and a final
//! verdict. It provides:
//! 1. **Reports:** One [`OperationReport`] (errors / total) per AMO kind.
//! 2. **Reporter:** Line-oriented output to any `io::Write` sink: banner,
//!    per-kind heading, per-case detail lines, and per-kind result lines.
//! 3. **Summary:** The overall [`RunStatus`] and the process exit code.
//!
//! A sink that rejects output is logged and counted; it never changes the
//! error counters or the verdict.

use std::fmt;
use std::io::Write;

use tracing::warn;

use crate::common::HarnessError;
use crate::common::constants::{ANSI_BOLD, ANSI_RESET};
use crate::isa::rv32a::AmoOp;
use crate::sim::verifier::Outcome;

/// Error count of one AMO kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationReport {
    /// Operation the cases exercised.
    pub op: AmoOp,
    /// Cases that failed.
    pub errors: u32,
    /// Cases executed.
    pub total: u32,
}

impl OperationReport {
    /// Creates an empty report for `op`.
    pub const fn new(op: AmoOp) -> Self {
        Self {
            op,
            errors: 0,
            total: 0,
        }
    }

    /// Counts one executed case.
    pub const fn record(&mut self, passed: bool) {
        self.total += 1;
        if !passed {
            self.errors += 1;
        }
    }

    /// Returns true if no case of this kind failed.
    pub const fn is_pass(&self) -> bool {
        self.errors == 0
    }
}

/// Overall verdict of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Every kind ran without errors.
    Passed,
    /// At least one case of at least one kind failed.
    Failed,
    /// The target lacks the A extension; nothing ran.
    ConfigurationUnavailable,
}

impl RunStatus {
    /// Process exit code for this verdict.
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
            Self::ConfigurationUnavailable => 2,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::ConfigurationUnavailable => "configuration unavailable",
        })
    }
}

/// Final result of a harness run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// One report per kind, in run order. Empty if nothing ran.
    pub reports: Vec<OperationReport>,
    /// Overall verdict.
    pub status: RunStatus,
    /// Writes the sink rejected.
    pub sink_failures: u64,
}

impl Summary {
    /// Returns true if the run passed.
    pub fn is_green(&self) -> bool {
        self.status == RunStatus::Passed
    }

    /// Failed cases over all kinds.
    pub fn total_errors(&self) -> u64 {
        self.reports.iter().map(|r| u64::from(r.errors)).sum()
    }

    /// Executed cases over all kinds.
    pub fn cases_executed(&self) -> u64 {
        self.reports.iter().map(|r| u64::from(r.total)).sum()
    }

    /// Report of one kind, if it ran.
    pub fn report(&self, op: AmoOp) -> Option<&OperationReport> {
        self.reports.iter().find(|r| r.op == op)
    }

    /// Process exit code.
    pub const fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}

/// Writes the run's console output and collects the per-kind reports.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    sink: W,
    silent: bool,
    color: bool,
    reports: Vec<OperationReport>,
    capability_missing: bool,
    sink_failures: u64,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter.
    ///
    /// # Arguments
    ///
    /// * `sink`   - Destination of the report text.
    /// * `silent` - Only print detail lines for failing cases.
    /// * `color`  - Wrap the `[ok]` / `[FAILED]` markers in ANSI bold.
    pub const fn new(sink: W, silent: bool, color: bool) -> Self {
        Self {
            sink,
            silent,
            color,
            reports: Vec::new(),
            capability_missing: false,
            sink_failures: 0,
        }
    }

    /// Title line.
    pub fn banner(&mut self) {
        self.emit(format_args!(
            "<<< RISC-V AMO Operations (atomic read-modify-write) Test >>>\n\n"
        ));
    }

    /// Silent-mode notice and the case count.
    pub fn intro(&mut self, num_cases: u32) {
        if self.silent {
            self.emit(format_args!(
                "SILENT_MODE enabled (only showing actual errors)\n"
            ));
        }
        self.emit(format_args!(
            "Starting tests ({num_cases} test case(s) per instruction)...\n\n"
        ));
    }

    /// Heading printed before the cases of `op`.
    pub fn kind_heading(&mut self, op: AmoOp) {
        self.emit(format_args!("\n{op}:\n"));
    }

    /// Detail line of one case; suppressed for passing cases in silent mode.
    pub fn case(&mut self, index: u32, outcome: &Outcome) {
        let passed = outcome.passed();
        if passed && self.silent {
            return;
        }
        let marker = self.marker(passed);
        let old = outcome.expected_pre();
        let expected = outcome.expected_post;
        match outcome.observed {
            Ok(ref seen) => self.emit(format_args!(
                "{index}: MEM_INITIAL[addr] = {old:#x} vs. MEM_PRE[addr] = {:#x}  |  \
                 MEM_NEW_ref[addr] = {expected:#x} vs. MEM_NEW[addr] = {:#x}, {marker}\n",
                seen.reported_pre, seen.actual_post
            )),
            Err(ref trap) => self.emit(format_args!(
                "{index}: MEM_INITIAL[addr] = {old:#x}  |  MEM_NEW_ref[addr] = {expected:#x}  |  \
                 trap {trap}, {marker}\n"
            )),
        }
    }

    /// Result line of one kind: `"<mnemonic>: Errors: <err>/<total> [ok]"`.
    pub fn record(&mut self, report: OperationReport) {
        let marker = self.marker(report.is_pass());
        self.emit(format_args!(
            "{}: Errors: {}/{} {marker}\n",
            report.op, report.errors, report.total
        ));
        self.reports.push(report);
    }

    /// Reports that the target lacks the A extension.
    pub fn capability_missing(&mut self, target: &str) {
        self.capability_missing = true;
        self.emit(format_args!(
            "Error! A ISA extension not implemented on target `{target}`!\n"
        ));
    }

    /// Closing line.
    pub fn completed(&mut self) {
        self.emit(format_args!("\n\nTests completed.\n"));
    }

    /// Reports recorded so far.
    pub fn reports(&self) -> &[OperationReport] {
        &self.reports
    }

    /// Flushes the sink and computes the verdict.
    pub fn finalize(mut self) -> Summary {
        if let Err(e) = self.sink.flush() {
            self.sink_failed(e);
        }
        let status = if self.capability_missing {
            RunStatus::ConfigurationUnavailable
        } else if self.reports.iter().all(OperationReport::is_pass) {
            RunStatus::Passed
        } else {
            RunStatus::Failed
        };
        Summary {
            reports: self.reports,
            status,
            sink_failures: self.sink_failures,
        }
    }

    fn marker(&self, passed: bool) -> String {
        let text = if passed { "[ok]" } else { "[FAILED]" };
        if self.color {
            format!("{ANSI_BOLD}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.sink.write_fmt(args) {
            self.sink_failed(e);
        }
    }

    fn sink_failed(&mut self, e: std::io::Error) {
        self.sink_failures += 1;
        let err = HarnessError::SinkFailure(e);
        warn!(failures = self.sink_failures, "{err}");
    }
}
