// src/errors.rs
use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some Java code to convert.";
pub const TRANSPORT_MESSAGE: &str =
    "An error occurred. Please check your network connection and try again.";
pub const MALFORMED_MESSAGE: &str = "Conversion failed. Please try again with valid Java code.";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No Java source was provided")]
    EmptyInput,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("Unexpected response structure: {0}")]
    MalformedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification used for user messages and HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    Transport,
    Malformed,
    Config,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::EmptyInput => ErrorKind::EmptyInput,
            ConvertError::Request(_)
            | ConvertError::ApiError { .. }
            | ConvertError::ApiResponse(_) => ErrorKind::Transport,
            ConvertError::MalformedResponse(_) | ConvertError::EmptyResponse => {
                ErrorKind::Malformed
            }
            ConvertError::Config(_) => ErrorKind::Config,
        }
    }

    /// The text shown in the error banner. Internal detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            ErrorKind::Transport => TRANSPORT_MESSAGE.to_string(),
            ErrorKind::Malformed => MALFORMED_MESSAGE.to_string(),
            ErrorKind::Config => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_share_one_message() {
        let api = ConvertError::ApiError { status: 500, body: "boom".to_string() };
        let response = ConvertError::ApiResponse("{\"code\":403}".to_string());

        assert_eq!(api.kind(), ErrorKind::Transport);
        assert_eq!(api.user_message(), TRANSPORT_MESSAGE);
        assert_eq!(response.user_message(), TRANSPORT_MESSAGE);
        // The status code is kept for the logs
        assert!(api.to_string().contains("500"));
    }

    #[test]
    fn test_malformed_errors_suggest_retry() {
        assert_eq!(ConvertError::EmptyResponse.kind(), ErrorKind::Malformed);
        assert_eq!(
            ConvertError::MalformedResponse("{}".to_string()).user_message(),
            MALFORMED_MESSAGE
        );
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(ConvertError::EmptyInput.user_message(), EMPTY_INPUT_MESSAGE);
    }
}
