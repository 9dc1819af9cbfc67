use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.code_empty")]
    CodeEmpty,
    #[error("product.quantity_negative")]
    QuantityNegative,
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.not_found")]
    NotFound,
    #[error("product.code_taken")]
    CodeTaken,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Lifts a repository failure, turning a missing row into `NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
