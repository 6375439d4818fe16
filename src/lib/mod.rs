//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core authentication flows
//!
//! ### Signup & verification
//!
//! 1. **Register:** the client POSTs name/email/password to
//!    `/api/user-registration`, which emails a one-time code.
//! 2. **Verify:** the captured form data plus the entered code go to
//!    `/api/verify-user`; success sends the user to the sign-in page.
//!
//! ### Password recovery
//!
//! `/api/forgot-password-user` issues a code, `/api/verify-forgot-password-user`
//! checks it, and `/api/reset-password-user` commits the new password. Every
//! step keeps the user on the current form until the backend confirms.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! passwords or one-time codes.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::ApiClient;
#[cfg(target_arch = "wasm32")]
pub(crate) use api::{post_json, post_json_with_credentials};
pub(crate) use errors::AppError;
