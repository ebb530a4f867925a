//! Recipes — the saved records and the operations the skill runs on them.

pub mod model;
pub mod service;

pub use model::{Recipe, RecipeFilter};
pub use service::RecipeService;
