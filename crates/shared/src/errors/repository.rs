use sqlx::Error as SqlxError;
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) => match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    RepositoryError::AlreadyExists(db_err.message().to_string())
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    RepositoryError::ForeignKey(db_err.message().to_string())
                }
                _ => RepositoryError::Sqlx(SqlxError::Database(db_err)),
            },
            other => RepositoryError::Sqlx(other),
        }
    }
}
