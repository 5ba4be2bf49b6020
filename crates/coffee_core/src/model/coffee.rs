//! Coffee domain model.
//!
//! # Responsibility
//! - Define the canonical coffee record owned by the store.
//! - Define create/patch payload shapes accepted at the store boundary.
//! - Normalize and validate record fields before they reach storage.
//!
//! # Invariants
//! - `id` is strictly positive.
//! - `name` and `brand` are never blank; constructors, patches and store writes trim them.
//! - Flavor tags are never blank; tag order is preserved.
//! - A deserialized `Coffee` has passed the same validation as a constructed one.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-supplied integer identifier of a coffee record.
pub type CoffeeId = i64;

/// Field-level validation failures for coffee records and patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoffeeValidationError {
    NonPositiveId(CoffeeId),
    EmptyName,
    EmptyBrand,
    EmptyFlavor { index: usize },
}

impl Display for CoffeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "coffee id must be positive, got {id}"),
            Self::EmptyName => write!(f, "coffee name cannot be blank"),
            Self::EmptyBrand => write!(f, "coffee brand cannot be blank"),
            Self::EmptyFlavor { index } => write!(f, "flavor at index {index} cannot be blank"),
        }
    }
}

impl Error for CoffeeValidationError {}

/// Canonical coffee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CoffeeWire")]
pub struct Coffee {
    pub id: CoffeeId,
    pub name: String,
    pub brand: String,
    /// Ordered flavor tags, e.g. `["vanilla", "caramel"]`.
    pub flavors: Vec<String>,
}

impl Coffee {
    /// Builds a validated record from raw field values.
    ///
    /// Text fields are trimmed before validation.
    pub fn new<I, S>(
        id: CoffeeId,
        name: impl Into<String>,
        brand: impl Into<String>,
        flavors: I,
    ) -> Result<Self, CoffeeValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let coffee = Self {
            id,
            name: name.into(),
            brand: brand.into(),
            flavors: flavors.into_iter().map(Into::into).collect(),
        };
        coffee.normalized()
    }

    /// The record every fresh store starts with.
    pub fn seed() -> Self {
        Self {
            id: 1,
            name: "Cappuccino".to_string(),
            brand: "Starbucks".to_string(),
            flavors: vec!["vanilla".to_string(), "caramel".to_string()],
        }
    }

    /// Checks record invariants without modifying the record.
    pub fn validate(&self) -> Result<(), CoffeeValidationError> {
        if self.id <= 0 {
            return Err(CoffeeValidationError::NonPositiveId(self.id));
        }
        if self.name.trim().is_empty() {
            return Err(CoffeeValidationError::EmptyName);
        }
        if self.brand.trim().is_empty() {
            return Err(CoffeeValidationError::EmptyBrand);
        }
        validate_flavors(&self.flavors)
    }

    /// Merges every field set in `patch` into this record.
    ///
    /// The patch is validated first; on error the record is left untouched.
    pub fn apply_patch(&mut self, patch: &UpdateCoffee) -> Result<(), CoffeeValidationError> {
        let patch = patch.normalized()?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(flavors) = patch.flavors {
            self.flavors = flavors;
        }
        Ok(())
    }

    /// Trims text fields and validates the result.
    pub(crate) fn normalized(mut self) -> Result<Self, CoffeeValidationError> {
        self.name = self.name.trim().to_string();
        self.brand = self.brand.trim().to_string();
        self.flavors = normalize_flavors(self.flavors);
        self.validate()?;
        Ok(self)
    }
}

/// Create payload accepted by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCoffee {
    pub id: CoffeeId,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub flavors: Vec<String>,
}

impl TryFrom<CreateCoffee> for Coffee {
    type Error = CoffeeValidationError;

    fn try_from(value: CreateCoffee) -> Result<Self, Self::Error> {
        Coffee::new(value.id, value.name, value.brand, value.flavors)
    }
}

/// Partial update payload.
///
/// `None` leaves the stored field as is. `id` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCoffee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<String>>,
}

impl UpdateCoffee {
    /// Returns whether the patch sets no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.flavors.is_none()
    }

    /// Returns a trimmed copy, rejecting values a record could not hold.
    pub fn normalized(&self) -> Result<Self, CoffeeValidationError> {
        let name = match self.name.as_deref().map(str::trim) {
            Some("") => return Err(CoffeeValidationError::EmptyName),
            other => other.map(str::to_string),
        };
        let brand = match self.brand.as_deref().map(str::trim) {
            Some("") => return Err(CoffeeValidationError::EmptyBrand),
            other => other.map(str::to_string),
        };
        let flavors = match &self.flavors {
            Some(values) => {
                let values = normalize_flavors(values.clone());
                validate_flavors(&values)?;
                Some(values)
            }
            None => None,
        };
        Ok(Self {
            name,
            brand,
            flavors,
        })
    }
}

/// Unchecked wire shape; every decoded `Coffee` goes through `Coffee::new`.
#[derive(Deserialize)]
struct CoffeeWire {
    id: CoffeeId,
    name: String,
    brand: String,
    #[serde(default)]
    flavors: Vec<String>,
}

impl TryFrom<CoffeeWire> for Coffee {
    type Error = CoffeeValidationError;

    fn try_from(value: CoffeeWire) -> Result<Self, Self::Error> {
        Coffee::new(value.id, value.name, value.brand, value.flavors)
    }
}

fn normalize_flavors(flavors: Vec<String>) -> Vec<String> {
    flavors
        .into_iter()
        .map(|flavor| flavor.trim().to_string())
        .collect()
}

fn validate_flavors(flavors: &[String]) -> Result<(), CoffeeValidationError> {
    match flavors.iter().position(|flavor| flavor.trim().is_empty()) {
        Some(index) => Err(CoffeeValidationError::EmptyFlavor { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_flavors, validate_flavors, CoffeeValidationError};

    #[test]
    fn normalize_flavors_trims_and_keeps_order() {
        let flavors = normalize_flavors(vec![" mocha ".to_string(), "caramel".to_string()]);
        assert_eq!(flavors, vec!["mocha".to_string(), "caramel".to_string()]);
    }

    #[test]
    fn validate_flavors_reports_first_blank_index() {
        let flavors = vec!["vanilla".to_string(), " ".to_string(), String::new()];
        assert_eq!(
            validate_flavors(&flavors),
            Err(CoffeeValidationError::EmptyFlavor { index: 1 })
        );
    }
}
