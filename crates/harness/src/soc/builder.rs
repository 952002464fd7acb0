//! Target construction from configuration.

use tracing::debug;

use crate::common::HarnessError;
use crate::config::{TargetConfig, TargetKind};
use crate::core::Hart;
use crate::soc::host::HostTarget;
use crate::soc::traits::AtomicTarget;

/// Builds the target selected by `config.kind`.
///
/// # Errors
///
/// Returns an error if the simulated hart's `misa` override does not parse or
/// its shared cell does not fit in RAM.
pub fn build_target(config: &TargetConfig) -> Result<Box<dyn AtomicTarget>, HarnessError> {
    let target: Box<dyn AtomicTarget> = match config.kind {
        TargetKind::Simulated => Box::new(Hart::from_config(config)?),
        TargetKind::Host => Box::new(HostTarget::new(config.aq, config.rl)),
    };
    debug!(
        target_name = target.name(),
        cell = target.cell_addr(),
        "built atomic target"
    );
    Ok(target)
}
