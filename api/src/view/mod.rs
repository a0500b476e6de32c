//! View module
//!
//! Plain-text rendering of owners and pet forms.

pub mod renderer;

pub use renderer::{render_owner, render_pet_form, render_pet_types, render_saved};
