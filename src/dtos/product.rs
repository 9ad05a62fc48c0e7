//! Product DTOs - corpo delle richieste di creazione e aggiornamento

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// DTO for creating a new product (without id)
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDTO {
    pub name: String,
    pub price: Decimal,
    pub category_id: i32,
    /// Missing in the body means 0
    #[serde(default)]
    pub score: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

pub type UpdateProductDTO = CreateProductDTO;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn price_keeps_every_digit_of_the_json_number() {
        let dto: CreateProductDTO = serde_json::from_str(
            r#"{"name":"Ring","price":1234567890123456.78,"categoryId":1,"score":0.1234567890123456789}"#,
        )
        .unwrap();

        assert_eq!(dto.price, Decimal::from_str("1234567890123456.78").unwrap());
        assert_eq!(dto.score, Decimal::from_str("0.1234567890123456789").unwrap());
    }

    #[test]
    fn integer_price_and_missing_optionals() {
        let dto: CreateProductDTO =
            serde_json::from_str(r#"{"name":"Chair","price":49,"categoryId":3}"#).unwrap();

        assert_eq!(dto.price, Decimal::from(49));
        assert_eq!(dto.score, Decimal::ZERO);
        assert_eq!(dto.image_url, None);
    }
}
