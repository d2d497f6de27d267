use thiserror::Error;
use crate::actor_framework::StoreError;

/// Coarse classification of failures, for the transport layer to map onto
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotAuthorized,
    NotFound,
    StorageFailure,
    DependencyFailure,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthorizationError {
    #[error("userId is required")]
    UserIdRequired,
    #[error("missing user on order")]
    MissingOrderUser,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("invalid user")]
    InvalidUser,
    #[error("invalid auth token")]
    EmptyToken,
    #[error("auth token not found")]
    TokenNotFound,
    #[error("token storage unavailable")]
    Poisoned,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("payment {0} not found")]
    NotFound(i64),
    #[error("payment requires both a user and an order")]
    IncompletePayment,
    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("no user found for id {0}")]
    NotFound(i64),
    #[error("user storage is full")]
    StorageFull,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CapacityExceeded { .. } => UserError::StorageFull,
            other => UserError::Storage(other),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("user id is required")]
    UserRequired,
    #[error("user is not authorized to access this order")]
    NotAuthorized,
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::UserRequired => ErrorKind::Validation,
            OrderError::NotAuthorized => ErrorKind::NotAuthorized,
            OrderError::Storage(StoreError::NotFound { .. }) => ErrorKind::NotFound,
            OrderError::Storage(_) => ErrorKind::StorageFailure,
            OrderError::Authorization(_) | OrderError::Payment(_) => ErrorKind::DependencyFailure,
        }
    }
}
