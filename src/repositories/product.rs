//! ProductRepository - Repository per la gestione dei prodotti
//!
//! `Price` e `Score` sono salvati come TEXT: il valore decimale viaggia come
//! stringa esatta e viene riparsato in lettura (vedi `Product::from_row`).

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateProductDTO, UpdateProductDTO};
use crate::entities::Product;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

const SELECT_PRODUCT: &str =
    r#"SELECT "Id", "Name", "Price", "CategoryId", "Score", "ImageUrl" FROM "Products""#;

// PRODUCT REPOSITORY
pub struct ProductRepository {
    connection_pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Product, CreateProductDTO> for ProductRepository {
    #[instrument(skip(self, data), fields(name = %data.name, category_id = %data.category_id))]
    async fn create(&self, data: &CreateProductDTO) -> Result<Product, Error> {
        debug!("Creating new product");
        let result = sqlx::query(
            r#"
            INSERT INTO "Products" ("Name", "Price", "CategoryId", "Score", "ImageUrl")
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(data.price.to_string())
        .bind(data.category_id)
        .bind(data.score.to_string())
        .bind(&data.image_url)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("Product created with id {}", new_id);

        Ok(Product {
            id: new_id,
            name: data.name.clone(),
            price: data.price,
            category_id: data.category_id,
            score: data.score,
            image_url: data.image_url.clone(),
        })
    }
}

impl Read<Product, i32> for ProductRepository {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Product>, Error> {
        debug!("Reading product by id");
        let product = sqlx::query_as::<_, Product>(&format!(r#"{SELECT_PRODUCT} WHERE "Id" = ?"#))
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        if product.is_none() {
            debug!("Product not found");
        }

        Ok(product)
    }
}

impl ReadAll<Product> for ProductRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Product>, Error> {
        let products = sqlx::query_as::<_, Product>(&format!(r#"{SELECT_PRODUCT} ORDER BY "Id""#))
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Loaded {} products", products.len());
        Ok(products)
    }
}

impl Update<Product, UpdateProductDTO, i32> for ProductRepository {
    #[instrument(skip(self, data), fields(product_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateProductDTO) -> Result<Product, Error> {
        debug!("Updating product");
        let result = sqlx::query(
            r#"
            UPDATE "Products"
            SET "Name" = ?, "Price" = ?, "CategoryId" = ?, "Score" = ?, "ImageUrl" = ?
            WHERE "Id" = ?
            "#,
        )
        .bind(&data.name)
        .bind(data.price.to_string())
        .bind(data.category_id)
        .bind(data.score.to_string())
        .bind(&data.image_url)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Product updated");
        Ok(Product {
            id: *id,
            name: data.name.clone(),
            price: data.price,
            category_id: data.category_id,
            score: data.score,
            image_url: data.image_url.clone(),
        })
    }
}

impl Delete<i32> for ProductRepository {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting product");
        let result = sqlx::query(r#"DELETE FROM "Products" WHERE "Id" = ?"#)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Product deleted");
        Ok(())
    }
}
