//! Recipe operations — one per completed intent, each answered with speech.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::skill::speech::{self, Speech};
use crate::store::RecipeStore;

use super::model::{Recipe, RecipeFilter};

/// Runs recipe commands against a store and phrases the outcome.
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Save a new recipe unless the user already has one by that name.
    pub async fn add(
        &self,
        user_id: &str,
        name: &str,
        location: &str,
        is_quick: bool,
    ) -> Result<Speech, DatabaseError> {
        let recipe = Recipe::new(name, user_id, location, is_quick);
        info!(user_id, recipe = name, location, is_quick, "Attempting to add recipe");

        if self.store.insert_recipe(&recipe).await? {
            info!(user_id, recipe = name, "Recipe added");
            Ok(speech::recipe_added(name))
        } else {
            info!(user_id, recipe = name, "Recipe already exists");
            Ok(speech::recipe_exists(name))
        }
    }

    /// Read out where a recipe is and whether it is quick.
    pub async fn get(&self, user_id: &str, name: &str) -> Result<Speech, DatabaseError> {
        debug!(user_id, recipe = name, "Reading recipe");

        match self.store.get_recipe(user_id, name).await? {
            Some(recipe) => {
                info!(user_id, recipe = name, "Get recipe succeeded");
                Ok(speech::recipe_details(name, &recipe))
            }
            None => {
                info!(user_id, recipe = name, "Recipe not found");
                Ok(speech::recipe_not_found(name))
            }
        }
    }

    /// List the names of the user's recipes that pass `filter`.
    pub async fn get_all(
        &self,
        user_id: &str,
        filter: RecipeFilter,
    ) -> Result<Speech, DatabaseError> {
        let recipes = self.store.scan_recipes(user_id, filter).await?;
        info!(user_id, %filter, count = recipes.len(), "Read recipes succeeded");
        Ok(speech::recipe_list(filter, &recipes))
    }

    /// Pick one of the user's recipes that pass `filter` at random.
    pub async fn get_random(
        &self,
        user_id: &str,
        filter: RecipeFilter,
    ) -> Result<Speech, DatabaseError> {
        let recipes = self.store.scan_recipes(user_id, filter).await?;
        info!(user_id, %filter, count = recipes.len(), "Read recipes succeeded");

        let speech = match pick_random(&recipes, &mut rand::thread_rng()) {
            Some(recipe) => {
                debug!(user_id, recipe = %recipe.name, "Picked random recipe");
                speech::lucky_recipe(recipe)
            }
            None => speech::no_recipes_added(),
        };
        Ok(speech)
    }

    /// Remove a recipe if the user has one by that name.
    pub async fn delete(&self, user_id: &str, name: &str) -> Result<Speech, DatabaseError> {
        info!(user_id, recipe = name, "Attempting to delete recipe");

        if self.store.delete_recipe(user_id, name).await? {
            info!(user_id, recipe = name, "Recipe deleted");
            Ok(speech::recipe_deleted(name))
        } else {
            info!(user_id, recipe = name, "Recipe not found");
            Ok(speech::recipe_not_found(name))
        }
    }
}

/// Uniformly pick one element: index drawn from `[0, len)`.
pub fn pick_random<'a, R: Rng + ?Sized>(recipes: &'a [Recipe], rng: &mut R) -> Option<&'a Recipe> {
    if recipes.is_empty() {
        return None;
    }
    recipes.get(rng.gen_range(0..recipes.len()))
}
