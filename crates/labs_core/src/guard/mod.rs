//! Pure precondition checks run before core logic executes.
//!
//! # Responsibility
//! - Turn invalid arithmetic operands into named failures.
//! - Turn blank/missing entity fields into named failures.
//!
//! # Invariants
//! - Guards never touch storage and never log.
//! - The first violated rule decides the returned failure kind.

pub mod arithmetic;
pub mod fields;
