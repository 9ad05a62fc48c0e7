//! CategoryRepository - Repository per la gestione delle categorie

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateCategoryDTO, UpdateCategoryDTO};
use crate::entities::Category;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// CATEGORY REPOSITORY
pub struct CategoryRepository {
    connection_pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Category, CreateCategoryDTO> for CategoryRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateCategoryDTO) -> Result<Category, Error> {
        debug!("Creating new category");
        let result = sqlx::query(r#"INSERT INTO "Categories" ("Name") VALUES (?)"#)
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("Category created with id {}", new_id);

        Ok(Category {
            id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Read<Category, i32> for CategoryRepository {
    #[instrument(skip(self), fields(category_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Category>, Error> {
        debug!("Reading category by id");
        let category = sqlx::query_as::<_, Category>(
            r#"SELECT "Id", "Name" FROM "Categories" WHERE "Id" = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if category.is_none() {
            debug!("Category not found");
        }

        Ok(category)
    }
}

impl ReadAll<Category> for CategoryRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Category>, Error> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT "Id", "Name" FROM "Categories" ORDER BY "Id""#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Loaded {} categories", categories.len());
        Ok(categories)
    }
}

impl Update<Category, UpdateCategoryDTO, i32> for CategoryRepository {
    #[instrument(skip(self, data), fields(category_id = %id))]
    async fn update(&self, id: &i32, data: &UpdateCategoryDTO) -> Result<Category, Error> {
        debug!("Updating category");
        let result = sqlx::query(r#"UPDATE "Categories" SET "Name" = ? WHERE "Id" = ?"#)
            .bind(&data.name)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Category updated");
        Ok(Category {
            id: *id,
            name: data.name.clone(),
        })
    }
}

impl Delete<i32> for CategoryRepository {
    /// Products pointing at the category are left untouched
    #[instrument(skip(self), fields(category_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting category");
        let result = sqlx::query(r#"DELETE FROM "Categories" WHERE "Id" = ?"#)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Category deleted");
        Ok(())
    }
}
