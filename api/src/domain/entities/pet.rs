//! Pet domain entity
//!
//! A pet belongs to exactly one owner and is persisted through the owner
//! aggregate (see `OwnerRepository::save`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub i32);

impl From<i32> for PetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a pet type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetTypeId(pub i32);

/// Species of a pet ("cat", "dog", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: PetTypeId,
    pub name: String,
}

impl PetType {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: PetTypeId(id),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An animal under the clinic's care
///
/// Every attribute but the id may be missing while the pet is still a form
/// candidate; the validator reports what a savable pet lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<PetId>,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
}

impl Pet {
    /// A fresh, unsaved pet with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// A pet without an assigned id (or with the zero id) has never been saved
    pub fn is_new(&self) -> bool {
        matches!(self.id, None | Some(PetId(0)))
    }

    /// Whether the pet carries a non-blank name
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
