//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers (CLI, future request handlers) decoupled from storage details.

pub mod coffee_service;
