//! Error types for Huddle Core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("A pending or approved request already exists for this hangout")]
    AlreadyRequested,

    #[error("Hangout is full")]
    HangoutFull,

    #[error("Hangout is cancelled")]
    HangoutClosed,

    #[error("Only the host can perform this action")]
    NotHost,

    #[error("Join request not found")]
    RequestNotFound,

    #[error("Hangout not found")]
    HangoutNotFound,

    #[error("User is not an approved participant of this hangout")]
    NotParticipant,
}

impl Error {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
