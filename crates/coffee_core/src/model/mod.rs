//! Coffee catalog domain model.
//!
//! # Responsibility
//! - Define the record shape shared by repository and service layers.
//! - Keep field validation next to the data it guards.
//!
//! # Invariants
//! - Every stored record is identified by a positive `CoffeeId`.
//! - Records are validated before they enter any store.

pub mod coffee;
