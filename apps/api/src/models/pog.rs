use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `pogs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pog {
    pub pogs_id: i32,
    pub pogs_name: String,
    pub ticker_symbol: String,
    pub price: f64,
    pub color: String,
}

/// The writable columns of a pog, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PogFields {
    pub pogs_name: String,
    pub ticker_symbol: String,
    pub price: f64,
    pub color: String,
}
