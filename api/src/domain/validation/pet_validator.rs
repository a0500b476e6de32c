//! Required-field validation for pets

use std::any::TypeId;

use super::{ErrorCode, FieldErrors, Validator};
use crate::domain::entities::Pet;

/// Checks that a pet carries a name, a birth date and, when new, a type
///
/// Existing pets may omit the type: it is already persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetValidator;

impl PetValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator<Pet> for PetValidator {
    fn supports(&self, type_id: TypeId) -> bool {
        type_id == TypeId::of::<Pet>()
    }

    fn validate(&self, pet: &Pet, errors: &mut FieldErrors) {
        if !pet.has_name() {
            errors.reject("name", ErrorCode::Required);
        }

        if pet.is_new() && pet.pet_type.is_none() {
            errors.reject("type", ErrorCode::Required);
        }

        if pet.birth_date.is_none() {
            errors.reject("birthDate", ErrorCode::Required);
        }
    }
}
