//! Form validation
//!
//! Validators inspect a bound form object and record field errors.
//! They never perform I/O; cross-entity rules (duplicate names, dates
//! relative to today) belong to the application services.

pub mod field_error;
pub mod pet_validator;

use std::any::TypeId;

pub use field_error::{ErrorCode, FieldErrors};
pub use pet_validator::PetValidator;

/// Validation capability injected into form workflows
pub trait Validator<T>: Send + Sync {
    /// Whether this validator applies to values of the given type
    fn supports(&self, type_id: TypeId) -> bool;

    /// Append every problem found in `target` to `errors`
    fn validate(&self, target: &T, errors: &mut FieldErrors);
}
