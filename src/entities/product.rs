//! Product entity - Entità prodotto

use super::decimal_column;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    // riferimento logico a Category.id, nessun vincolo di foreign key
    pub category_id: i32,
    pub score: Decimal,
    pub image_url: Option<String>,
}

// FromRow scritto a mano: Price e Score sono TEXT nel db
impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("Id")?,
            name: row.try_get("Name")?,
            price: decimal_column(row, "Price")?,
            category_id: row.try_get("CategoryId")?,
            score: decimal_column(row, "Score")?,
            image_url: row.try_get("ImageUrl")?,
        })
    }
}
