//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod pet_form_service;

pub use pet_form_service::{FormOutcome, PetFormService, PetFormView, PetInput};
// Flash messages, asserted on by the HTTP tests
#[allow(unused_imports)]
pub use pet_form_service::{PET_CREATED_MESSAGE, PET_UPDATED_MESSAGE};
