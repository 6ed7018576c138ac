use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StockroomError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}
