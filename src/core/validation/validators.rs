//! Reusable field validators
//!
//! Each validator checks one field and returns a typed value on success, so
//! callers can compose them into a fully validated payload.

use crate::core::error::FieldValidationError;
use crate::core::student::Group;

/// Validator: field is required (not empty)
pub fn required<'a>(
    field: &str,
    value: &'a str,
    message: &str,
) -> Result<&'a str, FieldValidationError> {
    if value.is_empty() {
        Err(FieldValidationError::new(field, message))
    } else {
        Ok(value)
    }
}

/// Validator: value must be one of the known groups
pub fn group(field: &str, value: &str, message: &str) -> Result<Group, FieldValidationError> {
    let value = required(field, value, message)?;
    value.parse::<Group>().map_err(|_| {
        FieldValidationError::new(
            field,
            format!(
                "Group must be one of {} (got '{}')",
                Group::ALL.map(|g| g.as_str()).join(", "),
                value
            ),
        )
    })
}

/// Collect the outcome of several field validators
///
/// Returns every failure, not only the first one, so a form can flag all
/// offending fields at once.
pub fn collect_errors<I>(results: I) -> Vec<FieldValidationError>
where
    I: IntoIterator<Item = Option<FieldValidationError>>,
{
    results.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty_fails() {
        let err = required("firstname", "", "First name is required").unwrap_err();
        assert_eq!(err.field, "firstname");
        assert_eq!(err.message, "First name is required");
    }

    #[test]
    fn test_required_value_passes() {
        assert_eq!(required("firstname", "Ann", "x"), Ok("Ann"));
    }

    #[test]
    fn test_group_parses_known_codes() {
        assert_eq!(group("group", "A2", "Group is required"), Ok(Group::A2));
    }

    #[test]
    fn test_group_empty_is_required_error() {
        let err = group("group", "", "Group is required").unwrap_err();
        assert_eq!(err.message, "Group is required");
    }

    #[test]
    fn test_group_unknown_code() {
        let err = group("group", "Z9", "Group is required").unwrap_err();
        assert_eq!(err.message, "Group must be one of A1, A2, B1, B2 (got 'Z9')");
    }

    #[test]
    fn test_collect_errors_keeps_all_failures() {
        let errors = collect_errors([
            required("a", "", "a missing").err(),
            required("b", "ok", "b missing").err(),
            required("c", "", "c missing").err(),
        ]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "a");
        assert_eq!(errors[1].field, "c");
    }
}
