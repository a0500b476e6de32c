//! PostgreSQL adapter for OwnerRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{Owner, OwnerId, Pet, PetId, PetType};
use crate::domain::ports::OwnerRepository;
use crate::entity::{owners, pets, types};
use crate::error::DomainError;

/// PostgreSQL implementation of OwnerRepository
pub struct PostgresOwnerRepository {
    db: DatabaseConnection,
}

impl PostgresOwnerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn pet_types_by_id(&self) -> Result<HashMap<i32, PetType>, DomainError> {
        let results = types::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| (m.id, m.into())).collect())
    }
}

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        let Some(owner) = owners::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        // Pet ids grow with insertion, which is the display order
        let pet_models = pets::Entity::find()
            .filter(pets::Column::OwnerId.eq(owner.id))
            .order_by_asc(pets::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let pet_types = self.pet_types_by_id().await?;
        let pets = pet_models
            .into_iter()
            .map(|m| pet_from_model(m, &pet_types))
            .collect();

        Ok(Some(owner_from_model(owner, pets)))
    }

    async fn save(&self, owner: &Owner) -> Result<(), DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        owners::ActiveModel {
            id: Set(owner.id.0),
            first_name: Set(owner.first_name.clone()),
            last_name: Set(owner.last_name.clone()),
            address: Set(owner.address.clone()),
            city: Set(owner.city.clone()),
            telephone: Set(owner.telephone.clone()),
        }
        .update(&txn)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Owner {} not found", owner.id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        for pet in &owner.pets {
            let type_id = pet.pet_type.as_ref().map(|t| t.id.0);

            match pet.id.filter(|_| !pet.is_new()) {
                Some(pet_id) => pets::ActiveModel {
                    id: Set(pet_id.0),
                    name: Set(pet.name.clone()),
                    birth_date: Set(pet.birth_date),
                    type_id: Set(type_id),
                    owner_id: Set(owner.id.0),
                }
                .update(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?,
                None => pets::ActiveModel {
                    id: NotSet,
                    name: Set(pet.name.clone()),
                    birth_date: Set(pet.birth_date),
                    type_id: Set(type_id),
                    owner_id: Set(owner.id.0),
                }
                .insert(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?,
            };
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(owner_id = %owner.id, pets = owner.pets.len(), "Owner saved");

        Ok(())
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, DomainError> {
        let results = types::Entity::find()
            .order_by_asc(types::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<types::Model> for PetType {
    fn from(model: types::Model) -> Self {
        PetType::new(model.id, model.name)
    }
}

fn pet_from_model(model: pets::Model, pet_types: &HashMap<i32, PetType>) -> Pet {
    Pet {
        id: Some(PetId(model.id)),
        name: model.name,
        pet_type: model.type_id.and_then(|id| pet_types.get(&id).cloned()),
        birth_date: model.birth_date,
    }
}

fn owner_from_model(model: owners::Model, pets: Vec<Pet>) -> Owner {
    Owner {
        id: OwnerId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        address: model.address,
        city: model.city,
        telephone: model.telephone,
        pets,
    }
}
