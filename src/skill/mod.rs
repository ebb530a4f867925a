//! Voice skill — platform envelope, dialogue script, and dispatch.
//!
//! A platform event is parsed into a `SkillEvent`, the dialogue script for
//! its intent decides whether a slot still needs eliciting or confirming, and
//! once every slot is settled the recipe service runs the store operation.

pub mod dialog;
pub mod handler;
pub mod intent;
pub mod request;
pub mod response;
pub mod routes;
pub mod speech;

pub use handler::SkillHandler;
pub use intent::{Intent, SlotName};
pub use request::SkillEvent;
pub use response::SkillResponse;
pub use routes::{SkillRouteState, skill_routes};
