//! Coffee use-case service.
//!
//! # Responsibility
//! - Provide stable create/find/update/remove entry points for core callers.
//! - Translate repository errors into use-case level errors.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - `find_one` reports absence as `Ok(None)`; `update` and `remove` report it
//!   as `CoffeeNotFound`.
//! - `update` merges every field set in the patch and leaves the rest as is.

use crate::model::coffee::{Coffee, CoffeeId, CoffeeValidationError, CreateCoffee, UpdateCoffee};
use crate::repo::coffee_repo::{CoffeeRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for coffee use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoffeeServiceError {
    /// Input does not satisfy the record shape.
    Validation(CoffeeValidationError),
    /// Target coffee does not exist.
    CoffeeNotFound(CoffeeId),
    /// Another coffee already uses this id.
    DuplicateCoffee(CoffeeId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for CoffeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid coffee: {err}"),
            Self::CoffeeNotFound(id) => write!(f, "coffee not found: {id}"),
            Self::DuplicateCoffee(id) => write!(f, "coffee id already exists: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CoffeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoffeeValidationError> for CoffeeServiceError {
    fn from(value: CoffeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CoffeeServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::CoffeeNotFound(id),
            RepoError::DuplicateId(id) => Self::DuplicateCoffee(id),
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, CoffeeServiceError>;

/// Use-case service wrapper for coffee CRUD operations.
pub struct CoffeeService<R: CoffeeRepository> {
    repo: R,
}

impl<R: CoffeeRepository> CoffeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates `input`, appends it to the store and returns the stored record.
    ///
    /// The returned record is the validated input, not a second lookup, so a
    /// concurrent `remove` cannot turn a successful create into an error.
    pub fn create(&self, input: CreateCoffee) -> ServiceResult<Coffee> {
        let coffee = Coffee::try_from(input)?;
        self.repo.create_coffee(&coffee)?;
        Ok(coffee)
    }

    /// Returns every coffee in insertion order.
    pub fn find_all(&self) -> ServiceResult<Vec<Coffee>> {
        Ok(self.repo.list_coffees()?)
    }

    /// Returns the coffee with `id`, or `None` when absent.
    pub fn find_one(&self, id: CoffeeId) -> ServiceResult<Option<Coffee>> {
        Ok(self.repo.get_coffee(id)?)
    }

    /// Merges `patch` into the coffee with `id` and returns the result.
    pub fn update(&self, id: CoffeeId, patch: &UpdateCoffee) -> ServiceResult<Coffee> {
        Ok(self.repo.update_coffee(id, patch)?)
    }

    /// Removes the coffee with `id` and returns it.
    pub fn remove(&self, id: CoffeeId) -> ServiceResult<Coffee> {
        Ok(self.repo.remove_coffee(id)?)
    }
}
