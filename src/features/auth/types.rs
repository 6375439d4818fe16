//! Request payloads for the storefront auth API. These carry credentials and
//! one-time codes, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyForgotPasswordRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_password_uses_the_backend_field_name() {
        let request = ResetPasswordRequest {
            email: "a@b.com".to_string(),
            otp: "1234".to_string(),
            new_password: "hunter2hunter2".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains(r#""newPassword":"hunter2hunter2""#));
        assert!(!json.contains("new_password"));
    }

    #[test]
    fn verify_user_round_trips_all_captured_fields() {
        let request = VerifyUserRequest {
            name: "Jo Doe".to_string(),
            email: "jo@shop.example".to_string(),
            password: "password1".to_string(),
            otp: "9876".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        let deserialized: VerifyUserRequest =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(deserialized.name, "Jo Doe");
        assert_eq!(deserialized.otp, "9876");
    }
}
