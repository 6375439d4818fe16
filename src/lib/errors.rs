use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Api { status: u16, message: Option<String> },
    Serialization(String),
}

impl AppError {
    /// Server-provided error message, when the response body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Banner text for a failed call: the server message when present,
    /// otherwise the caller's per-call default.
    pub fn display_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Api {
                status,
                message: Some(message),
            } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Api {
                status,
                message: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_or_prefers_the_server_message() {
        let err = AppError::Api {
            status: 400,
            message: Some("User not found with this email!".to_string()),
        };
        assert_eq!(err.display_or("User not found"), "User not found with this email!");
    }

    #[test]
    fn display_or_falls_back_when_no_message_was_sent() {
        let err = AppError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.display_or("Reset failed"), "Reset failed");
    }

    #[test]
    fn display_or_falls_back_for_transport_errors() {
        let err = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(err.display_or("Invalid Credentials!"), "Invalid Credentials!");
    }
}
