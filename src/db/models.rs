use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked item, possibly checked out to someone.
///
/// `return_date` is free-form text; nothing in the store parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub item_name: String,
    pub quantity: i64,
    pub assigned_to: Option<String>,
    pub return_date: Option<String>,
}

/// An application account row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}
