//! libSQL backend — async `RecipeStore` trait implementation.
//!
//! Supports local file and in-memory databases.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::recipes::model::{Recipe, RecipeFilter};
use crate::store::migrations;
use crate::store::traits::RecipeStore;

/// libSQL database backend.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlBackend {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Pool(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Pool(format!("Failed to open libSQL database: {e}")))?;

        let backend = Self::open(db).await?;
        info!(path = %path.display(), "Database opened");
        Ok(backend)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                DatabaseError::Pool(format!("Failed to create in-memory database: {e}"))
            })?;
        Self::open(db).await
    }

    /// Connect to a built database and bring its schema up to date.
    async fn open(db: LibSqlDatabase) -> Result<Self, DatabaseError> {
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;

        let backend = Self {
            db: Arc::new(db),
            conn,
        };
        backend.init_schema().await?;
        Ok(backend)
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }
}

// ── Helper functions ────────────────────────────────────────────────

/// Parse an RFC 3339 or SQLite datetime string into DateTime<Utc>.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return ndt.and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

/// Map a libsql Row to a Recipe.
///
/// Column order matches RECIPE_COLUMNS:
/// 0:name, 1:user_id, 2:location, 3:is_quick, 4:created_at
fn row_to_recipe(row: &libsql::Row) -> Result<Recipe, libsql::Error> {
    let created_str: String = row.get(4)?;
    Ok(Recipe {
        name: row.get(0)?,
        user_id: row.get(1)?,
        location: row.get(2)?,
        is_quick: row.get::<i64>(3)? != 0,
        created_at: parse_datetime(&created_str),
    })
}

// ── Trait implementation ────────────────────────────────────────────

const RECIPE_COLUMNS: &str = "name, user_id, location, is_quick, created_at";

#[async_trait]
impl RecipeStore for LibSqlBackend {
    async fn init_schema(&self) -> Result<(), DatabaseError> {
        migrations::run_migrations(self.conn()).await
    }

    async fn get_recipe(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<Recipe>, DatabaseError> {
        let conn = self.conn();
        let mut rows = conn
            .query(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE name = ?1 AND user_id = ?2"),
                params![name, user_id],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("get_recipe: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let recipe = row_to_recipe(&row)
                    .map_err(|e| DatabaseError::Query(format!("get_recipe row parse: {e}")))?;
                Ok(Some(recipe))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(DatabaseError::Query(format!("get_recipe: {e}"))),
        }
    }

    async fn insert_recipe(&self, recipe: &Recipe) -> Result<bool, DatabaseError> {
        let conn = self.conn();
        let inserted = conn
            .execute(
                "INSERT INTO recipes (name, user_id, location, is_quick, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT (name, user_id) DO NOTHING",
                params![
                    recipe.name.as_str(),
                    recipe.user_id.as_str(),
                    recipe.location.as_str(),
                    recipe.is_quick as i64,
                    recipe.created_at.to_rfc3339(),
                ],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("insert_recipe: {e}")))?;

        debug!(recipe = %recipe.name, user_id = %recipe.user_id, inserted, "Recipe insert");
        Ok(inserted > 0)
    }

    async fn delete_recipe(&self, user_id: &str, name: &str) -> Result<bool, DatabaseError> {
        let conn = self.conn();
        let count = conn
            .execute(
                "DELETE FROM recipes WHERE name = ?1 AND user_id = ?2",
                params![name, user_id],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("delete_recipe: {e}")))?;

        debug!(recipe = %name, user_id = %user_id, count, "Recipe delete");
        Ok(count > 0)
    }

    async fn scan_recipes(
        &self,
        user_id: &str,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, DatabaseError> {
        let conn = self.conn();
        let mut rows = match filter.is_quick() {
            Some(quick) => conn
                .query(
                    &format!(
                        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE user_id = ?1 AND is_quick = ?2"
                    ),
                    params![user_id, quick as i64],
                )
                .await,
            None => conn
                .query(
                    &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE user_id = ?1"),
                    params![user_id],
                )
                .await,
        }
        .map_err(|e| DatabaseError::Query(format!("scan_recipes: {e}")))?;

        let mut recipes = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::Query(format!("scan_recipes: {e}")))?
        {
            recipes.push(
                row_to_recipe(&row)
                    .map_err(|e| DatabaseError::Query(format!("scan_recipes row parse: {e}")))?,
            );
        }

        debug!(user_id = %user_id, %filter, count = recipes.len(), "Recipe scan");
        Ok(recipes)
    }
}
