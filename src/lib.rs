//! Recipe Organizer — voice skill for keeping track of recipes.

pub mod config;
pub mod error;
pub mod recipes;
pub mod skill;
pub mod store;
