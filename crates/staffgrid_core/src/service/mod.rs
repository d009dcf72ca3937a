//! Grid use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into grid actions (add, delete, edit).
//! - Keep the UI surface decoupled from validation and storage details.

pub mod change_log;
pub mod grid_service;
pub mod hooks;
pub mod validation;
