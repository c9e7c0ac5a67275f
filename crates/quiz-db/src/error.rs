use thiserror::Error;

/// Result alias for DAO operations.
pub type DaoResult<T> = Result<T, DaoError>;

/// Error type for the DAO layer.
///
/// A single kind covers every database-side failure: connectivity, statement
/// preparation, execution, and a mutating statement that affected no rows.
/// Entity validation is kept apart because it is raised before any statement
/// is touched.
#[derive(Debug, Error)]
pub enum DaoError {
    /// Underlying driver failure, or a write that affected zero rows.
    #[error("{message}")]
    Database {
        /// Human-readable context for the failure
        message: String,
        /// Driver error when one caused this, `None` for zero-rows failures
        #[source]
        source: Option<sqlx::Error>,
    },

    /// Entity state rejected before any statement was executed.
    #[error("{0}")]
    InvalidEntity(String),
}

impl DaoError {
    /// Wraps a driver error with a context message.
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(source),
        }
    }

    /// A database failure with no underlying cause, e.g. zero rows affected.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }
}

impl From<sqlx::Error> for DaoError {
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            message: source.to_string(),
            source: Some(source),
        }
    }
}
