//! Domain model for the two CRUD resources.
//!
//! # Responsibility
//! - Define the persisted shapes (`Note`, `Task`) and their write inputs.
//! - Describe, through [`Entity`], what a store needs to know about a kind.
//!
//! # Invariants
//! - Every persisted entity is identified by a store-assigned `EntityId`.
//! - `title` and `content` are never persisted blank.

pub mod entity;
pub mod note;
pub mod task;
