//! Field checks shared by the add form and the edit overlay.

use roster_types::{AGE_REQUIRED, Age, FieldErrors, FormField, NAME_REQUIRED, UserName};
use tracing::debug;

/// Check raw form input. Both fields are checked independently.
#[must_use]
pub fn validate(name: &str, age: &str) -> FieldErrors {
    match parse_submission(name, age) {
        Ok(_) => FieldErrors::new(),
        Err(errors) => errors,
    }
}

/// Validate and convert raw form input into the registry's typed values.
pub fn parse_submission(name: &str, age: &str) -> Result<(UserName, Age), FieldErrors> {
    let parsed_name = UserName::new(name);
    let parsed_age = Age::parse(age);

    match (parsed_name, parsed_age) {
        (Ok(name), Ok(age)) => Ok((name, age)),
        (name_result, age_result) => {
            let mut errors = FieldErrors::new();
            if name_result.is_err() {
                errors.insert(FormField::Name, NAME_REQUIRED);
            }
            if let Err(err) = age_result {
                debug!(%err, "Age rejected");
                errors.insert(FormField::Age, AGE_REQUIRED);
            }
            Err(errors)
        }
    }
}
