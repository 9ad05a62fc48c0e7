//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalle entities.

pub mod auth;
pub mod category;
pub mod product;

pub use auth::{LoginDTO, TokenDTO};
pub use category::{CreateCategoryDTO, UpdateCategoryDTO};
pub use product::{CreateProductDTO, UpdateProductDTO};
