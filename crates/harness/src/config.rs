//! Configuration system for the AMO harness.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Case count, seed, and the simulated hart's memory layout.
//! 2. **Structures:** `general` (run parameters) and `target` (what is tested).
//! 3. **Loading:** JSON documents via `serde_json`; every field is optional.
//!
//! Command-line flags of the `amocheck` binary override the loaded values.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::HarnessError;
use crate::core::arch::csr::MISA_DEFAULT_RV32IMACU;

/// Default configuration constants for the harness.
mod defaults {
    use crate::common::constants;

    /// Test cases per AMO kind.
    pub const NUM_CASES: u32 = constants::DEFAULT_NUM_CASES;

    /// Operand generator seed.
    pub const SEED: u32 = constants::DEFAULT_SEED;

    /// Base address of the simulated hart's RAM.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Size of the simulated hart's RAM (4 KiB).
    pub const RAM_SIZE: usize = 4096;

    /// Byte offset of the shared cell inside RAM.
    pub const CELL_OFFSET: u64 = 0x100;

    /// Store buffer depth of the simulated hart.
    pub const STORE_BUFFER_DEPTH: usize = 4;
}

/// Which kind of target the harness exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TargetKind {
    /// Software model of an RV32 hart with a store buffer and a `misa` CSR.
    #[default]
    #[serde(alias = "simulated")]
    Simulated,
    /// The CPU running the harness, through `std::sync::atomic::AtomicU32`.
    #[serde(alias = "host")]
    Host,
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use amocheck_core::config::Config;
///
/// let json = r#"{ "general": { "num_cases": 1000, "seed": 7 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.num_cases, 1000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Run parameters.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Target selection and layout.
    #[serde(default)]
    pub target: TargetConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be read and
    /// [`HarnessError::Config`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Run parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Test cases per AMO kind.
    #[serde(default = "GeneralConfig::default_num_cases")]
    pub num_cases: u32,

    /// Operand generator seed. Zero is replaced by the default seed.
    #[serde(default = "GeneralConfig::default_seed")]
    pub seed: u32,

    /// Only print failing cases (the per-kind summary is always printed).
    #[serde(default = "GeneralConfig::default_silent_mode")]
    pub silent_mode: bool,

    /// Wrap `[ok]` / `[FAILED]` markers in ANSI bold.
    #[serde(default = "GeneralConfig::default_color")]
    pub color: bool,
}

impl GeneralConfig {
    /// Returns the default number of test cases per kind.
    fn default_num_cases() -> u32 {
        defaults::NUM_CASES
    }

    /// Returns the default generator seed.
    fn default_seed() -> u32 {
        defaults::SEED
    }

    const fn default_silent_mode() -> bool {
        true
    }

    const fn default_color() -> bool {
        true
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            num_cases: defaults::NUM_CASES,
            seed: defaults::SEED,
            silent_mode: true,
            color: true,
        }
    }
}

/// Target selection and simulated-hart layout.
///
/// The layout fields only apply to [`TargetKind::Simulated`]; the host target
/// owns its shared word directly.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Target implementation.
    #[serde(default)]
    pub kind: TargetKind,

    /// `misa` register override as hex (e.g. `"0x40101104"` for a hart without A).
    #[serde(default)]
    pub misa_override: Option<String>,

    /// Base address of RAM.
    #[serde(default = "TargetConfig::default_ram_base")]
    pub ram_base: u64,

    /// RAM size in bytes.
    #[serde(default = "TargetConfig::default_ram_size")]
    pub ram_size: usize,

    /// Byte offset of the shared cell from `ram_base`.
    #[serde(default = "TargetConfig::default_cell_offset")]
    pub cell_offset: u64,

    /// Store buffer depth of the simulated hart.
    #[serde(default = "TargetConfig::default_store_buffer_depth")]
    pub store_buffer_depth: usize,

    /// Set the acquire bit on issued AMOs.
    #[serde(default)]
    pub aq: bool,

    /// Set the release bit on issued AMOs.
    #[serde(default)]
    pub rl: bool,

    /// Make AMOs drain the store buffer when it holds a store to the same
    /// address. Off by default, so a missing leading fence stays observable.
    #[serde(default)]
    pub same_address_ordering: bool,
}

impl TargetConfig {
    /// Returns the default RAM base address.
    fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    /// Returns the default RAM size.
    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the default shared cell offset.
    fn default_cell_offset() -> u64 {
        defaults::CELL_OFFSET
    }

    /// Returns the default store buffer depth.
    fn default_store_buffer_depth() -> usize {
        defaults::STORE_BUFFER_DEPTH
    }

    /// Resolves the `misa` value of the simulated hart.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidMisa`] if the override is not hex.
    pub fn misa(&self) -> Result<u32, HarnessError> {
        match self.misa_override {
            Some(ref raw) => {
                let digits = raw.trim_start_matches("0x").trim_start_matches("0X");
                u32::from_str_radix(digits, 16).map_err(|_| HarnessError::InvalidMisa(raw.clone()))
            }
            None => Ok(MISA_DEFAULT_RV32IMACU),
        }
    }

    /// Absolute address of the shared cell, or `None` if `ram_base +
    /// cell_offset` overflows.
    pub const fn cell_addr(&self) -> Option<u64> {
        self.ram_base.checked_add(self.cell_offset)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            kind: TargetKind::default(),
            misa_override: None,
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
            cell_offset: defaults::CELL_OFFSET,
            store_buffer_depth: defaults::STORE_BUFFER_DEPTH,
            aq: false,
            rl: false,
            same_address_ordering: false,
        }
    }
}
