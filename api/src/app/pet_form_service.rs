//! Pet form service
//!
//! Handles the create and edit pet forms of an owner: binding submitted
//! fields, validating them, and either redisplaying the form with errors or
//! saving the owner and redirecting to the owner's page.

use std::any::TypeId;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Owner, OwnerId, Pet, PetId, PetType};
use crate::domain::ports::{Clock, OwnerRepository};
use crate::domain::validation::{ErrorCode, FieldErrors, Validator};
use crate::error::AppError;

/// Flash message shown after a pet is created
pub const PET_CREATED_MESSAGE: &str = "New Pet has been Added";

/// Flash message shown after a pet is edited
pub const PET_UPDATED_MESSAGE: &str = "Pet details has been edited";

/// Birth dates are submitted as ISO calendar dates
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw pet form fields as submitted, before binding
///
/// `None` means the field was not submitted at all.
#[derive(Debug, Clone, Default)]
pub struct PetInput {
    pub name: Option<String>,
    pub pet_type: Option<String>,
    pub birth_date: Option<String>,
}

/// Everything needed to display the pet form
#[derive(Debug, Clone, Serialize)]
pub struct PetFormView {
    pub owner: Owner,
    pub pet: Pet,
    pub types: Vec<PetType>,
    pub errors: FieldErrors,
}

/// Result of a form submission
#[derive(Debug)]
pub enum FormOutcome {
    /// Validation failed; show the form again with the attempted pet
    Redisplay(PetFormView),
    /// The owner was saved; redirect to the owner's page
    Saved { redirect_to: OwnerId, message: String },
}

/// Service for the pet create/edit forms
pub struct PetFormService<OR, C, V>
where
    OR: OwnerRepository,
    C: Clock,
    V: Validator<Pet>,
{
    owners: Arc<OR>,
    clock: Arc<C>,
    validator: Arc<V>,
}

impl<OR, C, V> PetFormService<OR, C, V>
where
    OR: OwnerRepository,
    C: Clock,
    V: Validator<Pet>,
{
    pub fn new(owners: Arc<OR>, clock: Arc<C>, validator: Arc<V>) -> Self {
        Self {
            owners,
            clock,
            validator,
        }
    }

    /// Find an owner, failing if the id does not resolve
    pub async fn find_owner(&self, owner_id: OwnerId) -> Result<Owner, AppError> {
        self.owners
            .find_by_id(&owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Owner ID not found: {}", owner_id)))
    }

    /// Pet types offered by the form
    pub async fn pet_types(&self) -> Result<Vec<PetType>, AppError> {
        Ok(self.owners.find_pet_types().await?)
    }

    /// Display the empty creation form
    ///
    /// The fresh pet is attached to this request's copy of the owner only.
    pub async fn init_creation_form(&self, owner_id: OwnerId) -> Result<PetFormView, AppError> {
        let mut owner = self.find_owner(owner_id).await?;
        let types = self.pet_types().await?;

        let pet = Pet::new();
        owner.add_pet(pet.clone());

        Ok(PetFormView {
            owner,
            pet,
            types,
            errors: FieldErrors::new(),
        })
    }

    /// Process a submitted creation form
    ///
    /// 1. Bind the input onto a fresh pet and run the validator
    /// 2. Reject a name another saved pet of the owner already has
    /// 3. Reject a birth date in the future
    /// 4. Save the owner with the new pet, or redisplay the form
    pub async fn process_creation_form(
        &self,
        owner_id: OwnerId,
        input: PetInput,
    ) -> Result<FormOutcome, AppError> {
        let mut owner = self.find_owner(owner_id).await?;
        let types = self.pet_types().await?;

        let mut pet = Pet::new();
        bind_pet(&mut pet, input, &types);

        let mut errors = self.validate(&pet);

        if pet.has_name() && pet.is_new() && owner.pet_named(&pet.name, true).is_some() {
            errors.reject_with_message("name", ErrorCode::Duplicate, "already exists");
        }

        self.reject_future_birth_date(&pet, &mut errors);

        if errors.has_errors() {
            tracing::debug!(
                owner_id = %owner_id,
                error_count = errors.len(),
                "Pet creation form rejected"
            );

            // The loaded owner is discarded unsaved on this path, so
            // attaching the attempted pet only affects the redisplay.
            owner.add_pet(pet.clone());
            return Ok(FormOutcome::Redisplay(PetFormView {
                owner,
                pet,
                types,
                errors,
            }));
        }

        owner.add_pet(pet);
        self.owners.save(&owner).await?;

        tracing::info!(owner_id = %owner_id, "New pet added");

        Ok(FormOutcome::Saved {
            redirect_to: owner.id,
            message: PET_CREATED_MESSAGE.to_string(),
        })
    }

    /// Display the edit form for one of the owner's pets
    pub async fn init_update_form(
        &self,
        owner_id: OwnerId,
        pet_id: PetId,
    ) -> Result<PetFormView, AppError> {
        let owner = self.find_owner(owner_id).await?;
        let pet = find_pet(&owner, pet_id)?;
        let types = self.pet_types().await?;

        Ok(PetFormView {
            owner,
            pet,
            types,
            errors: FieldErrors::new(),
        })
    }

    /// Process a submitted edit form
    ///
    /// Fields that were not submitted keep their saved values, the type
    /// included. The owner is only touched once validation passes.
    pub async fn process_update_form(
        &self,
        owner_id: OwnerId,
        pet_id: PetId,
        input: PetInput,
    ) -> Result<FormOutcome, AppError> {
        let mut owner = self.find_owner(owner_id).await?;
        let mut pet = find_pet(&owner, pet_id)?;
        let types = self.pet_types().await?;

        bind_pet(&mut pet, input, &types);

        let mut errors = self.validate(&pet);

        if pet.has_name() {
            if let Some(existing) = owner.pet_named_ignore_case(&pet.name) {
                if existing.id != pet.id {
                    errors.reject_with_message("name", ErrorCode::Duplicate, "already exists");
                }
            }
        }

        self.reject_future_birth_date(&pet, &mut errors);

        if errors.has_errors() {
            tracing::debug!(
                owner_id = %owner_id,
                pet_id = %pet_id,
                error_count = errors.len(),
                "Pet update form rejected"
            );

            return Ok(FormOutcome::Redisplay(PetFormView {
                owner,
                pet,
                types,
                errors,
            }));
        }

        owner.add_pet(pet);
        self.owners.save(&owner).await?;

        tracing::info!(owner_id = %owner_id, pet_id = %pet_id, "Pet details edited");

        Ok(FormOutcome::Saved {
            redirect_to: owner.id,
            message: PET_UPDATED_MESSAGE.to_string(),
        })
    }

    fn validate(&self, pet: &Pet) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.validator.supports(TypeId::of::<Pet>()) {
            self.validator.validate(pet, &mut errors);
        }
        errors
    }

    fn reject_future_birth_date(&self, pet: &Pet, errors: &mut FieldErrors) {
        if let Some(birth_date) = pet.birth_date {
            if birth_date > self.clock.today() {
                errors.reject("birthDate", ErrorCode::TypeMismatchBirthDate);
            }
        }
    }
}

fn find_pet(owner: &Owner, pet_id: PetId) -> Result<Pet, AppError> {
    owner
        .pet(pet_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Pet ID not found: {}", pet_id)))
}

/// Copy submitted fields onto a pet
///
/// An unknown type name leaves the type as it was; an unparseable birth date
/// clears it so the validator reports it as missing.
fn bind_pet(pet: &mut Pet, input: PetInput, types: &[PetType]) {
    if let Some(name) = input.name {
        pet.name = name;
    }

    if let Some(type_name) = input.pet_type {
        match types.iter().find(|t| t.name == type_name) {
            Some(pet_type) => pet.pet_type = Some(pet_type.clone()),
            None => tracing::debug!(pet_type = %type_name, "Unknown pet type submitted"),
        }
    }

    if let Some(text) = input.birth_date {
        pet.birth_date = parse_birth_date(&text);
    }
}

fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(text, BIRTH_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(error = %e, birth_date = %text, "Unparseable birth date submitted");
            None
        }
    }
}
