//! View renderer
//!
//! Renders owners and pet forms to readable markdown.

use crate::app::PetFormView;
use crate::domain::entities::{Owner, Pet, PetType};
use crate::domain::validation::FieldErrors;

/// Render an owner's details and pets
pub fn render_owner(owner: &Owner) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Owner: {}\n\n", owner.full_name()));
    buf.push_str(&format!("- **Address:** {}\n", owner.address));
    buf.push_str(&format!("- **City:** {}\n", owner.city));
    buf.push_str(&format!("- **Telephone:** {}\n\n", owner.telephone));

    buf.push_str("## Pets\n\n");
    if owner.pets.is_empty() {
        buf.push_str("_No pets yet._\n");
    } else {
        for pet in &owner.pets {
            buf.push_str(&render_pet_line(pet));
        }
    }

    buf
}

/// Render the create/edit pet form, errors included
pub fn render_pet_form(view: &PetFormView) -> String {
    let mut buf = String::new();

    let title = if view.pet.is_new() { "New Pet" } else { "Edit Pet" };
    buf.push_str(&format!("# {}\n\n", title));
    buf.push_str(&format!("**Owner:** {}\n\n", view.owner.full_name()));

    let birth_date = view
        .pet
        .birth_date
        .map(|d| d.to_string())
        .unwrap_or_default();
    let pet_type = view
        .pet
        .pet_type
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_default();

    buf.push_str(&render_field("name", &view.pet.name, &view.errors));
    buf.push_str(&render_field("birthDate", &birth_date, &view.errors));
    buf.push_str(&render_field("type", &pet_type, &view.errors));

    buf.push_str(&format!(
        "\n_Types:_ {}\n",
        view.types
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    buf
}

/// Render the list of pet types
pub fn render_pet_types(types: &[PetType]) -> String {
    let mut buf = String::from("# Pet Types\n\n");
    for pet_type in types {
        buf.push_str(&format!("- {}\n", pet_type.name));
    }
    buf
}

/// Render the confirmation shown after a successful save
pub fn render_saved(message: &str, location: &str) -> String {
    format!("{}\n\nSee {}\n", message, location)
}

fn render_pet_line(pet: &Pet) -> String {
    let pet_type = pet
        .pet_type
        .as_ref()
        .map(|t| t.name.as_str())
        .unwrap_or("unknown");
    let birth_date = pet
        .birth_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!("- {} ({}, born {})\n", pet.name, pet_type, birth_date)
}

fn render_field(field: &str, value: &str, errors: &FieldErrors) -> String {
    let mut line = format!("- **{}:** {}", field, value);
    for error in errors.iter().filter(|e| e.field == field) {
        match &error.message {
            Some(message) => line.push_str(&format!(" [{}: {}]", error.code, message)),
            None => line.push_str(&format!(" [{}]", error.code)),
        }
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Pet;
    use crate::domain::validation::ErrorCode;
    use crate::test_utils::{pet_types, test_owner, test_owner_with_pets};

    #[test]
    fn render_owner_lists_pets() {
        let result = render_owner(&test_owner());

        assert!(result.contains("# Owner: George Franklin"));
        assert!(result.contains("- **City:** Madison"));
        assert!(result.contains("- Leo (cat, born 2020-01-01)"));
    }

    #[test]
    fn render_owner_without_pets() {
        let result = render_owner(&test_owner_with_pets(vec![]));

        assert!(result.contains("_No pets yet._"));
    }

    #[test]
    fn render_new_pet_form() {
        let view = PetFormView {
            owner: test_owner(),
            pet: Pet::new(),
            types: pet_types(),
            errors: FieldErrors::new(),
        };

        let result = render_pet_form(&view);

        assert!(result.contains("# New Pet"));
        assert!(result.contains("**Owner:** George Franklin"));
        assert!(result.contains("_Types:_ cat, dog, hamster"));
        assert!(!result.contains('['));
    }

    #[test]
    fn render_form_with_errors() {
        let mut errors = FieldErrors::new();
        errors.reject("birthDate", ErrorCode::TypeMismatchBirthDate);
        errors.reject_with_message("name", ErrorCode::Duplicate, "already exists");

        let owner = test_owner();
        let view = PetFormView {
            pet: owner.pets[0].clone(),
            owner,
            types: pet_types(),
            errors,
        };

        let result = render_pet_form(&view);

        assert!(result.contains("# Edit Pet"));
        assert!(result.contains("- **name:** Leo [duplicate: already exists]"));
        assert!(result.contains("- **birthDate:** 2020-01-01 [typeMismatch.birthDate]"));
        assert!(result.contains("- **type:** cat\n"));
    }

    #[test]
    fn render_types_as_list() {
        let result = render_pet_types(&pet_types());

        assert!(result.contains("- cat\n- dog\n- hamster\n"));
    }

    #[test]
    fn render_saved_mentions_location() {
        let result = render_saved("New Pet has been Added", "/owners/1");

        assert_eq!(result, "New Pet has been Added\n\nSee /owners/1\n");
    }
}
