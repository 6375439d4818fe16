mod alert;
mod button;
mod otp_input;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use otp_input::OtpInput;
pub(crate) use spinner::Spinner;
