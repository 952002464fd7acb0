//! Reference model of the word AMO results.
//!
//! Written from the operation definitions alone, without sharing code with
//! the hart's ALU, so a datapath bug cannot hide behind an identical model.

use std::cmp::Ordering;

use crate::isa::rv32a::AmoOp;

/// Signature of a reference model: `(op, old, update) -> expected new word`.
pub type ReferenceFn = fn(AmoOp, u32, u32) -> u32;

/// Returns the word memory must hold after `op` with `update` is applied to
/// `old`.
///
/// `Max`/`Min` compare the two words as two's complement `i32`; `Maxu`/`Minu`
/// compare them as unsigned.
///
/// ```
/// use amocheck_core::AmoOp;
/// use amocheck_core::sim::reference;
///
/// assert_eq!(reference(AmoOp::Add, 0xFFFF_FFFF, 1), 0);
/// assert_eq!(reference(AmoOp::Max, 0x8000_0000, 0x7FFF_FFFF), 0x7FFF_FFFF);
/// ```
pub fn reference(op: AmoOp, old: u32, update: u32) -> u32 {
    match op {
        AmoOp::Swap => update,
        AmoOp::Add => old.wrapping_add(update),
        AmoOp::And => old & update,
        AmoOp::Or => old | update,
        AmoOp::Xor => old ^ update,
        AmoOp::Max => pick(signed_cmp(old, update), Ordering::Greater, old, update),
        AmoOp::Min => pick(signed_cmp(old, update), Ordering::Less, old, update),
        AmoOp::Maxu => pick(old.cmp(&update), Ordering::Greater, old, update),
        AmoOp::Minu => pick(old.cmp(&update), Ordering::Less, old, update),
    }
}

fn signed_cmp(a: u32, b: u32) -> Ordering {
    // Flipping the sign bit maps two's complement order onto unsigned order.
    (a ^ 0x8000_0000).cmp(&(b ^ 0x8000_0000))
}

/// Keeps `old` when it compares as `keep` (or equal), otherwise `update`.
fn pick(ord: Ordering, keep: Ordering, old: u32, update: u32) -> u32 {
    if ord == keep || ord == Ordering::Equal {
        old
    } else {
        update
    }
}
