//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::domain::entities::{Owner, OwnerId, Pet, PetId, PetType};

/// The date every fixed test clock reports
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn cat() -> PetType {
    PetType::new(1, "cat")
}

pub fn dog() -> PetType {
    PetType::new(2, "dog")
}

pub fn hamster() -> PetType {
    PetType::new(3, "hamster")
}

/// All pet types, ordered by name
pub fn pet_types() -> Vec<PetType> {
    vec![cat(), dog(), hamster()]
}

/// Create a saved test pet (a cat born 2020-01-01)
pub fn test_pet(id: i32, name: &str) -> Pet {
    Pet {
        id: Some(PetId(id)),
        name: name.to_string(),
        pet_type: Some(cat()),
        birth_date: NaiveDate::from_ymd_opt(2020, 1, 1),
    }
}

/// Create owner 1 with a single pet named "Leo"
pub fn test_owner() -> Owner {
    test_owner_with_pets(vec![test_pet(1, "Leo")])
}

/// Create owner 1 with specific pets
pub fn test_owner_with_pets(pets: Vec<Pet>) -> Owner {
    Owner {
        id: OwnerId(1),
        first_name: "George".to_string(),
        last_name: "Franklin".to_string(),
        address: "110 W. Liberty St.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
        pets,
    }
}
