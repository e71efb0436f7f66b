//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::ERR_PASSWORD_MISMATCH;
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Flattens the per-field error messages into the list the error response
/// carries.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Validate that the password confirmation matches the password.
pub fn validate_password_match(password: &str, confirm_password: &str) -> Result<(), ApiError> {
    if password != confirm_password {
        return Err(ApiError::BadRequest(ERR_PASSWORD_MISMATCH.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_pass() {
        assert!(validate_password_match("hunter22", "hunter22").is_ok());
    }

    #[test]
    fn mismatched_passwords_fail() {
        let err = validate_password_match("hunter22", "hunter23").unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, ERR_PASSWORD_MISMATCH),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}
