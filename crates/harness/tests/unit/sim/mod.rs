/// Harness state machine and end-to-end scenarios.
pub mod harness;
