//! Auth feature module covering the storefront credential flows: sign-in,
//! account creation with email verification, and password recovery. The
//! multi-step flows live in `flow` as plain state machines; `client` is the
//! only place that touches the network. Nothing here may log passwords or
//! one-time codes.
//!
//! Flow overview: signup registers and then verifies the emailed code;
//! recovery issues a code, verifies it, and commits the new password. Both
//! gate code re-requests behind a shared cooldown.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
pub(crate) mod otp;
#[cfg(target_arch = "wasm32")]
pub(crate) mod ticker;
pub(crate) mod types;
