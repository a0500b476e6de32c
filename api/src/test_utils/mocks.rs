//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::fixtures::pet_types;
use crate::domain::entities::{Owner, OwnerId, PetId, PetType};
use crate::domain::ports::{Clock, OwnerRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Owner Repository
// ============================================================================

pub struct InMemoryOwnerRepository {
    owners: Arc<RwLock<HashMap<OwnerId, Owner>>>,
    pet_types: Vec<PetType>,
    next_pet_id: AtomicI32,
    saves: AtomicUsize,
    fail_saves: bool,
}

impl Default for InMemoryOwnerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOwnerRepository {
    /// Empty repository offering the fixture pet types
    pub fn new() -> Self {
        Self {
            owners: Arc::new(RwLock::new(HashMap::new())),
            pet_types: pet_types(),
            next_pet_id: AtomicI32::new(1000),
            saves: AtomicUsize::new(0),
            fail_saves: false,
        }
    }

    /// Pre-populate with an owner for testing
    pub fn with_owner(self, owner: Owner) -> Self {
        self.owners.write().unwrap().insert(owner.id, owner);
        self
    }

    /// Make every save fail with a database error
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current stored state of an owner
    pub fn stored(&self, id: &OwnerId) -> Option<Owner> {
        self.owners.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        let owners = self.owners.read().unwrap();
        Ok(owners.get(id).cloned())
    }

    async fn save(&self, owner: &Owner) -> Result<(), DomainError> {
        if self.fail_saves {
            return Err(DomainError::Database("save failed".to_string()));
        }

        let mut owner = owner.clone();
        for pet in owner.pets.iter_mut().filter(|p| p.is_new()) {
            pet.id = Some(PetId(self.next_pet_id.fetch_add(1, Ordering::SeqCst)));
        }

        self.owners.write().unwrap().insert(owner.id, owner);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, DomainError> {
        Ok(self.pet_types.clone())
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
