//! Slot-filling state machine.
//!
//! Each intent has a fixed script: the slots it needs, in order, with the
//! prompts used to ask for them. `advance` walks the script left to right and
//! stops at the first slot that is not settled yet.
//!
//! | value   | status    | confirm? | step                          |
//! |---------|-----------|----------|-------------------------------|
//! | absent  | any       | any      | `NeedValue` (elicit prompt)   |
//! | present | CONFIRMED | yes      | next slot                     |
//! | present | NONE      | yes      | `NeedConfirm`                 |
//! | present | DENIED    | yes      | `NeedValue` (re-elicit prompt)|
//! | present | any       | no       | next slot                     |

use std::collections::HashMap;

use super::intent::{Intent, SlotName};
use super::request::{ConfirmationStatus, IntentPayload};

/// Spoken prompt plus the reprompt used when the user stays silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub speech: &'static str,
    pub reprompt: &'static str,
}

impl Prompt {
    const fn new(speech: &'static str, reprompt: &'static str) -> Self {
        Self { speech, reprompt }
    }

    const fn same(speech: &'static str) -> Self {
        Self::new(speech, speech)
    }
}

/// How one slot of an intent is collected.
#[derive(Debug, Clone, Copy)]
pub struct SlotScript {
    pub slot: SlotName,
    /// First request for a value.
    pub elicit: Prompt,
    /// Yes/no question with `{value}` standing for the captured value.
    /// `None` means the value is used as soon as it is given.
    pub confirm: Option<&'static str>,
    /// Request for a new value after the user said "no".
    pub reelicit: Prompt,
}

const RECIPE_NAME_REPROMPT: &str = "Please tell me the name of the recipe";

const ADD_RECIPE: &[SlotScript] = &[
    SlotScript {
        slot: SlotName::RecipeName,
        elicit: Prompt::new("What is the name of the recipe?", RECIPE_NAME_REPROMPT),
        confirm: Some("The name of the recipe is {value}, correct?"),
        reelicit: Prompt::new(
            "What is the name of the recipe you would like to add?",
            RECIPE_NAME_REPROMPT,
        ),
    },
    SlotScript {
        slot: SlotName::RecipeLocation,
        elicit: Prompt::new(
            "Where can the recipe be found?",
            "Please give me a location where the recipe can be found.",
        ),
        confirm: Some("The recipe location is {value}, correct?"),
        reelicit: Prompt::new(
            "Where can the recipe be found?",
            "Please give me a location where the recipe can be found.",
        ),
    },
    SlotScript {
        slot: SlotName::LongOrQuick,
        elicit: Prompt::same("Is this a quick or long recipe to make?"),
        confirm: Some("This is a {value} recipe, correct?"),
        reelicit: Prompt::same("Is this a quick or long recipe to make?"),
    },
];

const DELETE_RECIPE: &[SlotScript] = &[SlotScript {
    slot: SlotName::RecipeName,
    elicit: Prompt::new(
        "What is the name of the recipe you would like to delete?",
        RECIPE_NAME_REPROMPT,
    ),
    confirm: Some("You would like to delete the recipe {value}, correct?"),
    reelicit: Prompt::new(
        "What is the name of the recipe you would like to delete?",
        RECIPE_NAME_REPROMPT,
    ),
}];

const GET_RECIPE: &[SlotScript] = &[SlotScript {
    slot: SlotName::RecipeName,
    elicit: Prompt::new("What is the name of the recipe?", RECIPE_NAME_REPROMPT),
    confirm: None,
    reelicit: Prompt::new("What is the name of the recipe?", RECIPE_NAME_REPROMPT),
}];

const QUICK_OR_LONG: &str = "Would you like a quick or long recipe or do you not care?";

const GET_ALL_RECIPES: &[SlotScript] = &[SlotScript {
    slot: SlotName::GetRecipeQuickOrLong,
    elicit: Prompt::same(QUICK_OR_LONG),
    confirm: None,
    reelicit: Prompt::same(QUICK_OR_LONG),
}];

const GET_RANDOM_RECIPE: &[SlotScript] = &[SlotScript {
    slot: SlotName::GetRecipeQuickOrLong,
    elicit: Prompt::new(
        QUICK_OR_LONG,
        "I said, would you like a quick or long recipe or do you not care?",
    ),
    confirm: None,
    reelicit: Prompt::new(
        QUICK_OR_LONG,
        "I said, would you like a quick or long recipe or do you not care?",
    ),
}];

/// The slot script for an intent. Intents without slots get an empty script.
pub fn script_for(intent: &Intent) -> &'static [SlotScript] {
    match intent {
        Intent::AddRecipe => ADD_RECIPE,
        Intent::DeleteRecipe => DELETE_RECIPE,
        Intent::GetRecipe => GET_RECIPE,
        Intent::GetAllRecipes => GET_ALL_RECIPES,
        Intent::GetRandomRecipe => GET_RANDOM_RECIPE,
        Intent::Help | Intent::Cancel | Intent::Stop | Intent::Unknown(_) => &[],
    }
}

/// The next conversational move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogStep {
    /// Ask the user for a value.
    NeedValue { slot: SlotName, prompt: Prompt },
    /// Ask the user to confirm the captured value.
    NeedConfirm {
        slot: SlotName,
        speech: String,
        reprompt: String,
    },
    /// Every slot is settled.
    Ready(SlotValues),
}

/// Settled slot values, handed to the recipe service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues(HashMap<SlotName, String>);

impl SlotValues {
    pub fn get(&self, slot: SlotName) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }
}

/// Decide the next move for `script` given the platform's slot state.
pub fn advance(script: &[SlotScript], intent: &IntentPayload) -> DialogStep {
    let mut values = HashMap::new();

    for step in script {
        let Some(value) = intent.slot_value(step.slot) else {
            return DialogStep::NeedValue {
                slot: step.slot,
                prompt: step.elicit,
            };
        };

        if let Some(template) = step.confirm {
            match intent.slot_status(step.slot) {
                ConfirmationStatus::Confirmed => {}
                ConfirmationStatus::Denied => {
                    return DialogStep::NeedValue {
                        slot: step.slot,
                        prompt: step.reelicit,
                    };
                }
                ConfirmationStatus::None => {
                    let question = template.replace("{value}", value);
                    return DialogStep::NeedConfirm {
                        slot: step.slot,
                        speech: question.clone(),
                        reprompt: question,
                    };
                }
            }
        }

        values.insert(step.slot, value.to_string());
    }

    DialogStep::Ready(SlotValues(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::request::Slot;

    fn payload(slots: &[(SlotName, Option<&str>, ConfirmationStatus)]) -> IntentPayload {
        IntentPayload {
            name: "TestIntent".to_string(),
            confirmation_status: ConfirmationStatus::None,
            slots: slots
                .iter()
                .map(|(slot, value, status)| {
                    (
                        slot.as_str().to_string(),
                        Slot {
                            name: slot.as_str().to_string(),
                            value: value.map(str::to_string),
                            confirmation_status: *status,
                        },
                    )
                })
                .collect(),
        }
    }

    fn confirmed(slot: SlotName, value: &'static str) -> (SlotName, Option<&'static str>, ConfirmationStatus) {
        (slot, Some(value), ConfirmationStatus::Confirmed)
    }

    #[test]
    fn elicits_first_missing_slot_in_order() {
        let order = [
            SlotName::RecipeName,
            SlotName::RecipeLocation,
            SlotName::LongOrQuick,
        ];
        let values = ["Pasta", "cookbook", "quick"];

        // With slots 1..k-1 confirmed and slot k unset, slot k is elicited.
        for k in 0..order.len() {
            let slots: Vec<_> = (0..k).map(|i| confirmed(order[i], values[i])).collect();
            let step = advance(ADD_RECIPE, &payload(&slots));
            match step {
                DialogStep::NeedValue { slot, prompt } => {
                    assert_eq!(slot, order[k]);
                    assert_eq!(prompt, ADD_RECIPE[k].elicit);
                }
                other => panic!("expected NeedValue for {}, got {other:?}", order[k]),
            }
        }
    }

    #[test]
    fn unconfirmed_value_asks_for_confirmation() {
        let step = advance(
            ADD_RECIPE,
            &payload(&[
                confirmed(SlotName::RecipeName, "Pasta"),
                (SlotName::RecipeLocation, Some("cookbook p.4"), ConfirmationStatus::None),
            ]),
        );
        assert_eq!(
            step,
            DialogStep::NeedConfirm {
                slot: SlotName::RecipeLocation,
                speech: "The recipe location is cookbook p.4, correct?".to_string(),
                reprompt: "The recipe location is cookbook p.4, correct?".to_string(),
            }
        );
    }

    #[test]
    fn unconfirmed_slot_blocks_later_slots() {
        // Later slots are filled and confirmed, but the first is not.
        let step = advance(
            ADD_RECIPE,
            &payload(&[
                (SlotName::RecipeName, Some("Pasta"), ConfirmationStatus::None),
                confirmed(SlotName::RecipeLocation, "cookbook"),
                confirmed(SlotName::LongOrQuick, "quick"),
            ]),
        );
        assert!(matches!(
            step,
            DialogStep::NeedConfirm { slot: SlotName::RecipeName, .. }
        ));
    }

    #[test]
    fn denied_value_is_elicited_again() {
        let step = advance(
            ADD_RECIPE,
            &payload(&[(SlotName::RecipeName, Some("Pasta"), ConfirmationStatus::Denied)]),
        );
        assert_eq!(
            step,
            DialogStep::NeedValue {
                slot: SlotName::RecipeName,
                prompt: Prompt::new(
                    "What is the name of the recipe you would like to add?",
                    "Please tell me the name of the recipe",
                ),
            }
        );

        let step = advance(
            DELETE_RECIPE,
            &payload(&[(SlotName::RecipeName, Some("Pasta"), ConfirmationStatus::Denied)]),
        );
        assert!(matches!(
            step,
            DialogStep::NeedValue { slot: SlotName::RecipeName, .. }
        ));
    }

    #[test]
    fn all_confirmed_is_ready() {
        let step = advance(
            ADD_RECIPE,
            &payload(&[
                confirmed(SlotName::RecipeName, "Pasta"),
                confirmed(SlotName::RecipeLocation, "cookbook"),
                confirmed(SlotName::LongOrQuick, "quick"),
            ]),
        );
        let DialogStep::Ready(values) = step else {
            panic!("expected Ready");
        };
        assert_eq!(values.get(SlotName::RecipeName), Some("Pasta"));
        assert_eq!(values.get(SlotName::RecipeLocation), Some("cookbook"));
        assert_eq!(values.get(SlotName::LongOrQuick), Some("quick"));
    }

    #[test]
    fn unconfirmed_slots_are_used_as_is() {
        let step = advance(
            GET_RECIPE,
            &payload(&[(SlotName::RecipeName, Some("Pasta"), ConfirmationStatus::None)]),
        );
        let DialogStep::Ready(values) = step else {
            panic!("expected Ready");
        };
        assert_eq!(values.get(SlotName::RecipeName), Some("Pasta"));

        let step = advance(
            GET_ALL_RECIPES,
            &payload(&[(SlotName::GetRecipeQuickOrLong, Some("long"), ConfirmationStatus::None)]),
        );
        assert!(matches!(step, DialogStep::Ready(_)));
    }

    #[test]
    fn delete_confirmation_wording() {
        let step = advance(
            DELETE_RECIPE,
            &payload(&[(SlotName::RecipeName, Some("Stew"), ConfirmationStatus::None)]),
        );
        let DialogStep::NeedConfirm { speech, .. } = step else {
            panic!("expected NeedConfirm");
        };
        assert_eq!(speech, "You would like to delete the recipe Stew, correct?");
    }

    #[test]
    fn random_recipe_has_its_own_reprompt() {
        let step = advance(GET_RANDOM_RECIPE, &payload(&[]));
        let DialogStep::NeedValue { prompt, .. } = step else {
            panic!("expected NeedValue");
        };
        assert_eq!(prompt.speech, QUICK_OR_LONG);
        assert_eq!(
            prompt.reprompt,
            "I said, would you like a quick or long recipe or do you not care?"
        );
    }

    #[test]
    fn scripts_per_intent() {
        assert_eq!(script_for(&Intent::AddRecipe).len(), 3);
        assert_eq!(script_for(&Intent::DeleteRecipe).len(), 1);
        assert_eq!(script_for(&Intent::GetRecipe).len(), 1);
        assert_eq!(script_for(&Intent::GetAllRecipes).len(), 1);
        assert_eq!(script_for(&Intent::GetRandomRecipe).len(), 1);
        assert!(script_for(&Intent::Help).is_empty());
        assert!(matches!(
            advance(script_for(&Intent::Stop), &payload(&[])),
            DialogStep::Ready(_)
        ));
    }
}
