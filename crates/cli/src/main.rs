//! RISC-V AMO conformance harness CLI.
//!
//! This binary is the entry point for a harness run. It performs:
//! 1. **Run (default):** Load the configuration, apply flag overrides, build
//!    the target and run all nine AMO kinds, printing the report on stdout.
//! 2. **Kinds:** List the nine operations with their encodings.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.
//!
//! Exit status: 0 all kinds passed, 1 at least one case failed, 2 the target
//! lacks the A extension, 3 the command line or configuration is invalid.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use amocheck_core::common::HarnessError;
use amocheck_core::config::{Config, TargetKind};
use amocheck_core::isa::abi::{REG_A0, REG_A1, REG_A2};
use amocheck_core::isa::disasm::disassemble;
use amocheck_core::stats::{RunStatus, Summary};
use amocheck_core::{AmoOp, sim};

/// Exit code for command line and configuration errors.
const EXIT_USAGE: i32 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "amocheck",
    author,
    version,
    about = "RISC-V atomic memory operation conformance harness",
    long_about = "Runs every 32-bit AMO of the RISC-V A extension against a target and checks \
                  the pre- and post-operation values against a reference model.\n\n\
                  Examples:\n  amocheck\n  amocheck run --cases 1000 --seed 7\n  \
                  amocheck run --target host --verbose\n  amocheck run --misa 0x40101104\n  \
                  amocheck kinds"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the harness (default when no subcommand is given).
    Run(RunArgs),

    /// List the nine AMO kinds with their funct5 encodings.
    Kinds,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Test cases per AMO kind.
    #[arg(short = 'n', long)]
    cases: Option<u32>,

    /// Operand generator seed (0 selects the default seed).
    #[arg(short, long)]
    seed: Option<u32>,

    /// Target to test.
    #[arg(short, long, value_enum)]
    target: Option<TargetArg>,

    /// `misa` value of the simulated hart, in hex.
    #[arg(long)]
    misa: Option<String>,

    /// Print every case, not only failures.
    #[arg(short, long)]
    verbose: bool,

    /// Plain `[ok]` / `[FAILED]` markers without ANSI bold.
    #[arg(long)]
    no_color: bool,

    /// Issue AMOs with the acquire bit set.
    #[arg(long)]
    aq: bool,

    /// Issue AMOs with the release bit set.
    #[arg(long)]
    rl: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TargetArg {
    /// Software RV32 hart.
    Simulated,
    /// The CPU running this program.
    Host,
}

impl From<TargetArg> for TargetKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Simulated => Self::Simulated,
            TargetArg::Host => Self::Host,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Some(Commands::Kinds) => cmd_kinds(),
        Some(Commands::Run(args)) => cmd_run(&args),
        None => cmd_run(&RunArgs::default()),
    };
    process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the configuration and applies the command line overrides.
fn load_config(args: &RunArgs) -> Result<Config, HarnessError> {
    let mut config = match args.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(cases) = args.cases {
        config.general.num_cases = cases;
    }
    if let Some(seed) = args.seed {
        config.general.seed = seed;
    }
    if let Some(target) = args.target {
        config.target.kind = target.into();
    }
    if let Some(ref misa) = args.misa {
        config.target.misa_override = Some(misa.clone());
    }
    if args.verbose {
        config.general.silent_mode = false;
    }
    if args.no_color {
        config.general.color = false;
    }
    config.target.aq |= args.aq;
    config.target.rl |= args.rl;
    Ok(config)
}

/// Runs the harness; returns the process exit code.
fn cmd_run(args: &RunArgs) -> i32 {
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            return EXIT_USAGE;
        }
    };
    debug!(?config, "effective configuration");

    exit_code(&sim::harness::run(&config, io::stdout().lock()))
}

/// Maps the outcome of a run to the process exit code.
fn exit_code(result: &Result<Summary, HarnessError>) -> i32 {
    match result {
        Ok(summary) => summary.exit_code(),
        Err(e @ HarnessError::ConfigurationUnavailable { .. }) => {
            error!("{e}");
            RunStatus::ConfigurationUnavailable.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE
        }
    }
}

/// Prints the operation table.
fn cmd_kinds() -> i32 {
    match write_kinds(&mut io::stdout().lock()) {
        Ok(()) => 0,
        Err(e) => {
            error!("cannot write operation table: {e}");
            EXIT_USAGE
        }
    }
}

fn write_kinds<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:<10} {:>6}  example encoding", "kind", "funct5")?;
    for op in AmoOp::ALL {
        let inst = op.encode(REG_A2, REG_A0, REG_A1, false, false);
        writeln!(
            out,
            "{:<10} {:>#6b}  {inst:#010x}  {}",
            op.mnemonic(),
            op.funct5(),
            disassemble(inst)
        )?;
    }
    Ok(())
}
