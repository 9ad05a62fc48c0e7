//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella del database SQLite. Le colonne decimali
//! sono salvate come TEXT e riconvertite in `Decimal` in lettura.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;

use rust_decimal::Decimal;
use sqlx::{Row, sqlite::SqliteRow};

/// Reads a TEXT column holding a decimal number
pub(crate) fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}
