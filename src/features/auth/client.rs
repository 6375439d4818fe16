//! Client wrappers for the storefront auth API endpoints. These helpers
//! centralize paths and credential handling, keeping auth flows consistent
//! and preventing request details from leaking into route code.

use crate::{
    app_lib::{ApiClient, AppError, post_json, post_json_with_credentials},
    features::auth::types::{
        ForgotPasswordRequest, LoginRequest, RegistrationRequest, ResetPasswordRequest,
        VerifyForgotPasswordRequest, VerifyUserRequest,
    },
};

/// Asks the backend to email a recovery code to the account address.
pub async fn forgot_password(
    api: &ApiClient,
    request: &ForgotPasswordRequest,
) -> Result<(), AppError> {
    post_json(api, "/api/forgot-password-user", request).await
}

/// Checks a recovery code against the address it was issued for.
pub async fn verify_forgot_password(
    api: &ApiClient,
    request: &VerifyForgotPasswordRequest,
) -> Result<(), AppError> {
    post_json(api, "/api/verify-forgot-password-user", request).await
}

/// Commits the replacement password once the code has been verified.
pub async fn reset_password(
    api: &ApiClient,
    request: &ResetPasswordRequest,
) -> Result<(), AppError> {
    post_json(api, "/api/reset-password-user", request).await
}

/// Registers a new account; the backend responds by emailing a code.
pub async fn register_user(
    api: &ApiClient,
    request: &RegistrationRequest,
) -> Result<(), AppError> {
    post_json(api, "/api/user-registration", request).await
}

/// Finalizes a registration with the emailed code and the captured details.
pub async fn verify_user(api: &ApiClient, request: &VerifyUserRequest) -> Result<(), AppError> {
    post_json(api, "/api/verify-user", request).await
}

/// Signs in with credentials included so the session cookie is set.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<(), AppError> {
    post_json_with_credentials(api, "/api/login-user", request).await
}
