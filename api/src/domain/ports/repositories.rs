//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Owner, OwnerId, PetType};
use crate::error::DomainError;

/// Repository for the Owner aggregate and its pets
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Find an owner by ID, pets included in display order
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError>;

    /// Persist an owner and cascade its pets
    ///
    /// New pets are inserted, saved pets are updated.
    async fn save(&self, owner: &Owner) -> Result<(), DomainError>;

    /// List every pet type, ordered by name
    async fn find_pet_types(&self) -> Result<Vec<PetType>, DomainError>;
}
