use crate::services::media_service::MediaError;
use std::fmt;
use tonic::{Code, Status};

/// A lightweight wrapper for handler errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub code: Code,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific code and message.
    pub fn new(code: Code, msg: impl Into<String>) -> Self {
        Self {
            code,
            message: msg.into(),
        }
    }

    /// Shortcut for `INTERNAL`
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(Code::Internal, msg)
    }

    /// Shortcut for `INVALID_ARGUMENT`
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        Status::new(err.code, err.message)
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::SizeExceeded { .. } => AppError::invalid_argument(err.to_string()),
            _ => AppError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn size_violation_is_invalid_argument() {
        let status: Status = AppError::from(MediaError::SizeExceeded {
            attempted: 12,
            max: 10,
        })
        .into();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "image size exceeds maximum size of 12 > 10");
    }

    #[test]
    fn store_failures_are_internal() {
        let status: Status = AppError::from(MediaError::Upload(StoreError::Api {
            status: 401,
            message: "Invalid Signature".into(),
        }))
        .into();
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("Invalid Signature"));
    }

    #[test]
    fn delete_failure_message_is_generic() {
        let status: Status = AppError::from(MediaError::Delete(StoreError::UnexpectedResult(
            "not found".into(),
        )))
        .into();
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "Unable to delete media file");
    }
}
