use crate::repositories;
use restdemo_entities::product::SizeParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The product name is missing")]
    ProductName,
    #[error("The price must be a non-negative number")]
    Price,
    #[error("Invalid size (expected S, M or L)")]
    Size,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}

impl From<SizeParseError> for Error {
    fn from(_: SizeParseError) -> Self {
        Self::Size
    }
}
