use thiserror::Error;

use crate::fields::FieldError;
use crate::index::Index;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClienteleError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("this client already exists in the registry")]
    DuplicateClient,

    #[error("no stored client matches the given record")]
    ClientNotFound,

    #[error("no client at index {0} in the current view")]
    InvalidIndex(Index),

    #[error("policy tag [{0}] is not attached to this client")]
    PolicyNotFound(String),

    #[error("at least one of phone, email or address must be provided")]
    NothingToUpdate,

    #[error("deleting multiple clients requires at least two indices")]
    NotEnoughIndices,

    #[error("the same index may only be given once")]
    DuplicateIndices,
}

pub type Result<T> = std::result::Result<T, ClienteleError>;
