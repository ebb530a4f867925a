//! `RecipeStore` trait — single async interface for recipe persistence.

use async_trait::async_trait;

use crate::error::DatabaseError;
use crate::recipes::model::{Recipe, RecipeFilter};

/// Backend-agnostic recipe store keyed by `(name, user_id)`.
///
/// Writes are conditional so that add and delete need one round-trip each.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Run all pending schema migrations.
    async fn init_schema(&self) -> Result<(), DatabaseError>;

    /// Point lookup by key.
    async fn get_recipe(&self, user_id: &str, name: &str)
    -> Result<Option<Recipe>, DatabaseError>;

    /// Insert unless a recipe with the same key exists.
    /// Returns `false` (and writes nothing) when the key is taken.
    async fn insert_recipe(&self, recipe: &Recipe) -> Result<bool, DatabaseError>;

    /// Delete by key. Returns `false` when there was nothing to delete.
    async fn delete_recipe(&self, user_id: &str, name: &str) -> Result<bool, DatabaseError>;

    /// All of a user's recipes that pass `filter`, in storage order.
    async fn scan_recipes(
        &self,
        user_id: &str,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, DatabaseError>;
}
