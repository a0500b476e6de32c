//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod owner;
pub mod pet;

pub use owner::{Owner, OwnerId};
pub use pet::{Pet, PetId, PetType};
