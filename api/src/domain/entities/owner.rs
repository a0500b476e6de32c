//! Owner domain entity
//!
//! An owner is a clinic customer and the aggregate root for their pets.

use serde::{Deserialize, Serialize};

use super::{Pet, PetId};

/// Unique identifier for an owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub i32);

impl From<i32> for OwnerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clinic customer owning zero or more pets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Pets in display order
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Display name ("George Franklin")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Find a pet by id
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == Some(id))
    }

    /// Find a pet by exact name
    ///
    /// With `ignore_new` set, pets that have not been saved yet are skipped.
    pub fn pet_named(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        self.pets
            .iter()
            .filter(|p| !(ignore_new && p.is_new()))
            .find(|p| p.name == name)
    }

    /// Find a pet by name, ignoring case
    pub fn pet_named_ignore_case(&self, name: &str) -> Option<&Pet> {
        let name = name.to_lowercase();
        self.pets.iter().find(|p| p.name.to_lowercase() == name)
    }

    /// Attach a pet to this owner
    ///
    /// New pets are appended. A saved pet replaces the pet with the same id in
    /// place, keeping its display position, or is appended if absent.
    pub fn add_pet(&mut self, pet: Pet) {
        if pet.is_new() {
            self.pets.push(pet);
            return;
        }

        match self.pets.iter_mut().find(|p| p.id == pet.id) {
            Some(existing) => *existing = pet,
            None => self.pets.push(pet),
        }
    }
}
