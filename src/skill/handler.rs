//! Request dispatcher — one platform event in, one response out.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::{DatabaseError, SkillError};
use crate::recipes::model::{RecipeFilter, is_quick_utterance};
use crate::recipes::service::RecipeService;
use crate::store::RecipeStore;

use super::dialog::{self, DialogStep, SlotValues};
use super::intent::{Intent, SlotName};
use super::request::{IntentPayload, Request, SkillEvent};
use super::response::SkillResponse;
use super::speech::{self, Speech};

/// Handles platform events for the recipe skill.
pub struct SkillHandler {
    app_id: Option<String>,
    recipes: RecipeService,
}

impl SkillHandler {
    /// Create a handler. With `app_id` set, events for other applications are rejected.
    pub fn new(store: Arc<dyn RecipeStore>, app_id: Option<String>) -> Self {
        Self {
            app_id,
            recipes: RecipeService::new(store),
        }
    }

    /// Produce the single response for `event`.
    ///
    /// Store faults are answered with speech; only addressing problems are errors.
    /// Intent requests must name a user, since every recipe belongs to one.
    pub async fn handle(&self, event: &SkillEvent) -> Result<SkillResponse, SkillError> {
        self.verify_application(event)?;

        let response = match &event.request {
            Request::LaunchRequest(meta) => {
                info!(request_id = %meta.request_id, "Launch request");
                SkillResponse::ask(speech::instructions(), speech::instructions())
            }
            Request::IntentRequest(req) => {
                let intent = Intent::from_name(&req.intent.name);
                info!(
                    request_id = %req.request_id,
                    %intent,
                    dialog_state = req.dialog_state.as_deref().unwrap_or("NONE"),
                    "Intent request"
                );
                let Some(user_id) = event.user_id() else {
                    warn!(%intent, "Rejected intent request without a user");
                    return Err(SkillError::MissingUser);
                };
                self.handle_intent(user_id, &intent, &req.intent).await
            }
            Request::SessionEndedRequest(ended) => {
                info!(
                    request_id = %ended.request_id,
                    reason = ended.reason.as_deref().unwrap_or("unknown"),
                    "Session ended"
                );
                SkillResponse::Empty
            }
            Request::Unsupported => {
                error!(version = %event.version, "Unsupported request type");
                SkillResponse::ask(speech::unhandled(), speech::unhandled())
            }
        };

        Ok(response)
    }

    fn verify_application(&self, event: &SkillEvent) -> Result<(), SkillError> {
        let Some(expected) = &self.app_id else {
            return Ok(());
        };
        match event.application_id() {
            Some(received) if received == expected => Ok(()),
            Some(received) => {
                warn!(%received, "Rejected request for another application");
                Err(SkillError::ApplicationMismatch {
                    expected: expected.clone(),
                    received: received.to_string(),
                })
            }
            None => Err(SkillError::MissingApplication),
        }
    }

    async fn handle_intent(
        &self,
        user_id: &str,
        intent: &Intent,
        payload: &IntentPayload,
    ) -> SkillResponse {
        let values = match dialog::advance(dialog::script_for(intent), payload) {
            DialogStep::NeedValue { slot, prompt } => {
                return SkillResponse::ElicitSlot {
                    slot,
                    speech: Speech::text(prompt.speech),
                    reprompt: Speech::text(prompt.reprompt),
                };
            }
            DialogStep::NeedConfirm {
                slot,
                speech,
                reprompt,
            } => {
                return SkillResponse::ConfirmSlot {
                    slot,
                    speech: Speech::text(speech),
                    reprompt: Speech::text(reprompt),
                };
            }
            DialogStep::Ready(values) => values,
        };

        let outcome = match intent {
            Intent::AddRecipe => {
                let name = slot(&values, SlotName::RecipeName);
                let location = slot(&values, SlotName::RecipeLocation);
                let is_quick = is_quick_utterance(slot(&values, SlotName::LongOrQuick));
                self.recipes.add(user_id, name, location, is_quick).await
            }
            Intent::GetRecipe => {
                self.recipes
                    .get(user_id, slot(&values, SlotName::RecipeName))
                    .await
            }
            Intent::GetAllRecipes => {
                let filter = RecipeFilter::from_utterance(slot(&values, SlotName::GetRecipeQuickOrLong));
                self.recipes.get_all(user_id, filter).await
            }
            Intent::GetRandomRecipe => {
                let filter = RecipeFilter::from_utterance(slot(&values, SlotName::GetRecipeQuickOrLong));
                self.recipes.get_random(user_id, filter).await
            }
            Intent::DeleteRecipe => {
                self.recipes
                    .delete(user_id, slot(&values, SlotName::RecipeName))
                    .await
            }
            Intent::Help => {
                return SkillResponse::ask(speech::instructions(), speech::instructions());
            }
            Intent::Cancel | Intent::Stop => return SkillResponse::tell(speech::goodbye()),
            Intent::Unknown(name) => {
                error!(intent = %name, "Unhandled intent");
                return SkillResponse::ask(speech::unhandled(), speech::unhandled());
            }
        };

        match outcome {
            Ok(speech) => SkillResponse::tell(speech),
            Err(e) => store_unavailable(intent, e),
        }
    }
}

/// A settled slot value. `advance` only returns `Ready` once every scripted slot has one.
fn slot(values: &SlotValues, name: SlotName) -> &str {
    values.get(name).unwrap_or_default()
}

fn store_unavailable(intent: &Intent, e: DatabaseError) -> SkillResponse {
    error!(%intent, error = %e, "Recipe store request failed");
    SkillResponse::tell(speech::unavailable())
}
