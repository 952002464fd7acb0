//! Atomic targets.
//!
//! This module organizes everything the verifier issues operations against:
//! the target contract, the per-case shared cell handle, the simulated hart's
//! RAM, the host-CPU target, and the builder that picks one from config.

/// Target construction from configuration.
pub mod builder;

/// Exclusively borrowed handle on the shared word.
pub mod cell;

/// Host-CPU target backed by `std::sync::atomic`.
pub mod host;

/// RAM backing the simulated hart.
pub mod memory;

/// Target trait definitions.
pub mod traits;

pub use builder::build_target;
pub use cell::SharedCell;
pub use host::HostTarget;
pub use memory::Memory;
pub use traits::AtomicTarget;
