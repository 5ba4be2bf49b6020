//! Coffee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered coffee collection.
//! - Guard the collection with a single exclusive-access lock.
//!
//! # Invariants
//! - Write paths store trimmed, validated records only.
//! - Ids are unique across the collection; duplicate creates are rejected.
//! - Collection order is insertion order; removal shifts later records.
//! - Update/remove on a missing id return `NotFound` and change nothing.

use crate::model::coffee::{Coffee, CoffeeId, CoffeeValidationError, UpdateCoffee};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for coffee storage and query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(CoffeeValidationError),
    NotFound(CoffeeId),
    DuplicateId(CoffeeId),
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "coffee not found: {id}"),
            Self::DuplicateId(id) => write!(f, "coffee id already exists: {id}"),
            Self::LockPoisoned => write!(f, "coffee store lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) | Self::LockPoisoned => None,
        }
    }
}

impl From<CoffeeValidationError> for RepoError {
    fn from(value: CoffeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for coffee CRUD operations.
pub trait CoffeeRepository {
    fn create_coffee(&self, coffee: &Coffee) -> RepoResult<CoffeeId>;
    fn list_coffees(&self) -> RepoResult<Vec<Coffee>>;
    fn get_coffee(&self, id: CoffeeId) -> RepoResult<Option<Coffee>>;
    fn update_coffee(&self, id: CoffeeId, patch: &UpdateCoffee) -> RepoResult<Coffee>;
    fn remove_coffee(&self, id: CoffeeId) -> RepoResult<Coffee>;
}

impl<T: CoffeeRepository + ?Sized> CoffeeRepository for &T {
    fn create_coffee(&self, coffee: &Coffee) -> RepoResult<CoffeeId> {
        (**self).create_coffee(coffee)
    }

    fn list_coffees(&self) -> RepoResult<Vec<Coffee>> {
        (**self).list_coffees()
    }

    fn get_coffee(&self, id: CoffeeId) -> RepoResult<Option<Coffee>> {
        (**self).get_coffee(id)
    }

    fn update_coffee(&self, id: CoffeeId, patch: &UpdateCoffee) -> RepoResult<Coffee> {
        (**self).update_coffee(id, patch)
    }

    fn remove_coffee(&self, id: CoffeeId) -> RepoResult<Coffee> {
        (**self).remove_coffee(id)
    }
}

/// In-memory coffee repository over one ordered `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryCoffeeRepository {
    coffees: Mutex<Vec<Coffee>>,
}

impl InMemoryCoffeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding only the seed record (`Coffee::seed()`).
    pub fn seeded() -> Self {
        Self {
            coffees: Mutex::new(vec![Coffee::seed()]),
        }
    }

    /// Creates a repository from caller records, in the given order.
    ///
    /// # Errors
    /// - `Validation` when any record breaks model invariants.
    /// - `DuplicateId` when two records share an id.
    pub fn with_records(records: Vec<Coffee>) -> RepoResult<Self> {
        let mut coffees: Vec<Coffee> = Vec::with_capacity(records.len());
        for record in records {
            let record = record.normalized()?;
            if position_of(&coffees, record.id).is_some() {
                return Err(RepoError::DuplicateId(record.id));
            }
            coffees.push(record);
        }
        info!(
            "event=store_init module=repo status=ok count={}",
            coffees.len()
        );
        Ok(Self {
            coffees: Mutex::new(coffees),
        })
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Vec<Coffee>>> {
        self.coffees.lock().map_err(|_| {
            warn!("event=store_lock module=repo status=error error_code=lock_poisoned");
            RepoError::LockPoisoned
        })
    }
}

impl CoffeeRepository for InMemoryCoffeeRepository {
    fn create_coffee(&self, coffee: &Coffee) -> RepoResult<CoffeeId> {
        let coffee = coffee.clone().normalized()?;

        let mut coffees = self.lock()?;
        if position_of(&coffees, coffee.id).is_some() {
            warn!(
                "event=coffee_create module=repo status=error error_code=duplicate_id id={}",
                coffee.id
            );
            return Err(RepoError::DuplicateId(coffee.id));
        }

        let id = coffee.id;
        coffees.push(coffee);
        info!(
            "event=coffee_create module=repo status=ok id={} count={}",
            id,
            coffees.len()
        );
        Ok(id)
    }

    fn list_coffees(&self) -> RepoResult<Vec<Coffee>> {
        let coffees = self.lock()?;
        debug!(
            "event=coffee_list module=repo status=ok count={}",
            coffees.len()
        );
        Ok(coffees.clone())
    }

    fn get_coffee(&self, id: CoffeeId) -> RepoResult<Option<Coffee>> {
        let coffees = self.lock()?;
        let found = coffees.iter().find(|coffee| coffee.id == id).cloned();
        debug!(
            "event=coffee_get module=repo status=ok id={} found={}",
            id,
            found.is_some()
        );
        Ok(found)
    }

    fn update_coffee(&self, id: CoffeeId, patch: &UpdateCoffee) -> RepoResult<Coffee> {
        let mut coffees = self.lock()?;
        let Some(index) = position_of(&coffees, id) else {
            warn!("event=coffee_update module=repo status=error error_code=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        // Merge into a copy so a rejected patch never leaves a partial write.
        let mut updated = coffees[index].clone();
        updated.apply_patch(patch)?;
        updated.validate()?;
        coffees[index] = updated.clone();

        info!(
            "event=coffee_update module=repo status=ok id={} empty_patch={}",
            id,
            patch.is_empty()
        );
        Ok(updated)
    }

    fn remove_coffee(&self, id: CoffeeId) -> RepoResult<Coffee> {
        let mut coffees = self.lock()?;
        let Some(index) = position_of(&coffees, id) else {
            warn!("event=coffee_remove module=repo status=error error_code=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        let removed = coffees.remove(index);
        info!(
            "event=coffee_remove module=repo status=ok id={} count={}",
            id,
            coffees.len()
        );
        Ok(removed)
    }
}

fn position_of(coffees: &[Coffee], id: CoffeeId) -> Option<usize> {
    coffees.iter().position(|coffee| coffee.id == id)
}
