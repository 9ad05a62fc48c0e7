//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query usano `sqlx::query` / `sqlx::query_as` verificate a runtime, così la
//! compilazione non richiede un database raggiungibile.

pub mod category;
pub mod product;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

pub use category::CategoryRepository;
pub use product::ProductRepository;
