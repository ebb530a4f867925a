//! Outbound response and its wire envelope.

use serde::Serialize;

use super::intent::SlotName;
use super::request::IntentPayload;
use super::speech::Speech;

/// Exactly one reply per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillResponse {
    /// Speak and keep the session open.
    Ask { speech: Speech, reprompt: Speech },
    /// Speak and end the session.
    Tell { speech: Speech },
    /// Ask the platform to collect a slot value.
    ElicitSlot {
        slot: SlotName,
        speech: Speech,
        reprompt: Speech,
    },
    /// Ask the platform to confirm a slot value.
    ConfirmSlot {
        slot: SlotName,
        speech: Speech,
        reprompt: Speech,
    },
    /// No speech; acknowledges a session that already ended.
    Empty,
}

impl SkillResponse {
    pub fn tell(speech: Speech) -> Self {
        Self::Tell { speech }
    }

    pub fn ask(speech: Speech, reprompt: Speech) -> Self {
        Self::Ask { speech, reprompt }
    }

    /// Build the platform envelope. `intent` is echoed on dialog directives.
    pub fn into_envelope(self, intent: Option<&IntentPayload>) -> ResponseEnvelope {
        let body = match self {
            Self::Ask { speech, reprompt } => ResponseBody {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: Some(Reprompt::ssml(&reprompt)),
                should_end_session: Some(false),
                directives: Vec::new(),
            },
            Self::Tell { speech } => ResponseBody {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: None,
                should_end_session: Some(true),
                directives: Vec::new(),
            },
            Self::ElicitSlot {
                slot,
                speech,
                reprompt,
            } => ResponseBody {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: Some(Reprompt::ssml(&reprompt)),
                should_end_session: Some(false),
                directives: vec![Directive::ElicitSlot {
                    slot_to_elicit: slot.as_str().to_string(),
                    updated_intent: intent.cloned(),
                }],
            },
            Self::ConfirmSlot {
                slot,
                speech,
                reprompt,
            } => ResponseBody {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: Some(Reprompt::ssml(&reprompt)),
                should_end_session: Some(false),
                directives: vec![Directive::ConfirmSlot {
                    slot_to_confirm: slot.as_str().to_string(),
                    updated_intent: intent.cloned(),
                }],
            },
            Self::Empty => ResponseBody::default(),
        };

        ResponseEnvelope {
            version: "1.0",
            session_attributes: serde_json::Map::new(),
            response: body,
        }
    }
}

// ── Wire format ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: serde_json::Map<String, serde_json::Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ssml: String,
}

impl OutputSpeech {
    fn ssml(speech: &Speech) -> Self {
        Self {
            kind: "SSML",
            ssml: format!("<speak>{}</speak>", speech.to_ssml()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    fn ssml(speech: &Speech) -> Self {
        Self {
            output_speech: OutputSpeech::ssml(speech),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Dialog.ElicitSlot", rename_all = "camelCase")]
    ElicitSlot {
        slot_to_elicit: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        updated_intent: Option<IntentPayload>,
    },
    #[serde(rename = "Dialog.ConfirmSlot", rename_all = "camelCase")]
    ConfirmSlot {
        slot_to_confirm: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        updated_intent: Option<IntentPayload>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::speech::Pause;

    #[test]
    fn tell_ends_session() {
        let envelope = SkillResponse::tell(Speech::text("Goodbye!")).into_envelope(None);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["version"], "1.0");
        assert_eq!(json["sessionAttributes"], serde_json::json!({}));
        assert_eq!(json["response"]["outputSpeech"]["type"], "SSML");
        assert_eq!(json["response"]["outputSpeech"]["ssml"], "<speak>Goodbye!</speak>");
        assert_eq!(json["response"]["shouldEndSession"], true);
        assert!(json["response"].get("reprompt").is_none());
        assert!(json["response"].get("directives").is_none());
    }

    #[test]
    fn ask_keeps_session_open_with_reprompt() {
        let envelope = SkillResponse::ask(
            Speech::text("Hi").pause(Pause::Medium),
            Speech::text("Hello?"),
        )
        .into_envelope(None);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json["response"]["outputSpeech"]["ssml"],
            r#"<speak>Hi<break strength="medium"/></speak>"#
        );
        assert_eq!(
            json["response"]["reprompt"]["outputSpeech"]["ssml"],
            "<speak>Hello?</speak>"
        );
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[test]
    fn elicit_echoes_intent() {
        let intent = IntentPayload {
            name: "AddRecipeIntent".to_string(),
            ..Default::default()
        };
        let envelope = SkillResponse::ElicitSlot {
            slot: SlotName::RecipeName,
            speech: Speech::text("What is the name of the recipe?"),
            reprompt: Speech::text("Please tell me the name of the recipe"),
        }
        .into_envelope(Some(&intent));
        let json = serde_json::to_value(&envelope).unwrap();

        let directive = &json["response"]["directives"][0];
        assert_eq!(directive["type"], "Dialog.ElicitSlot");
        assert_eq!(directive["slotToElicit"], "RecipeName");
        assert_eq!(directive["updatedIntent"]["name"], "AddRecipeIntent");
        assert_eq!(directive["updatedIntent"]["confirmationStatus"], "NONE");
    }

    #[test]
    fn confirm_names_slot() {
        let envelope = SkillResponse::ConfirmSlot {
            slot: SlotName::LongOrQuick,
            speech: Speech::text("This is a quick recipe, correct?"),
            reprompt: Speech::text("This is a quick recipe, correct?"),
        }
        .into_envelope(None);
        let json = serde_json::to_value(&envelope).unwrap();

        let directive = &json["response"]["directives"][0];
        assert_eq!(directive["type"], "Dialog.ConfirmSlot");
        assert_eq!(directive["slotToConfirm"], "LongOrQuick");
        assert!(directive.get("updatedIntent").is_none());
    }

    #[test]
    fn empty_has_no_speech() {
        let json = serde_json::to_value(SkillResponse::Empty.into_envelope(None)).unwrap();
        assert_eq!(json["response"], serde_json::json!({}));
    }
}
