use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Presence checks only; anything that parses as a string is accepted.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and password are required."))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and password are required."))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_fails_validation() {
        let req = RegisterRequest {
            email: "".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn present_fields_pass_validation() {
        let req = LoginRequest {
            email: "a@x.com".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
