use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A query or write against the account table failed
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: DbErr,
    },
}
