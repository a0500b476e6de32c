//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod owners;
pub mod pets;

pub use owners::{list_pet_types, show_owner};
pub use pets::{init_creation_form, init_update_form, process_creation_form, process_update_form};
