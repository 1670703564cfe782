//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls and guards into use-case level APIs.
//! - Keep callers (CLI, HTTP adapters) decoupled from storage details.

pub mod calculator_service;
pub mod entity_service;
