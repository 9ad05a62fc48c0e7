//! Category DTOs - corpo delle richieste sulle categorie

use serde::{Deserialize, Serialize};

/// DTO for creating a new category (without id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateCategoryDTO {
    pub name: String,
}

/// PUT replaces every mutable field, so the shape is the same as for creation
pub type UpdateCategoryDTO = CreateCategoryDTO;
