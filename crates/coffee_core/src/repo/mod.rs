//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection mutation details out of the service layer.
//!
//! # Invariants
//! - Repository writes must trim and validate records before storing.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`)
//!   instead of silent no-ops.

pub mod coffee_repo;
