//! Response schema declaration for structured output.
//!
//! The engine is asked to enforce this shape (`responseSchema` +
//! `responseMimeType: application/json`); the client never parses free text.

use std::collections::BTreeMap;

use serde::Serialize;

/// Schema value types in the Gemini structured-output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum SchemaType {
    Object,
    String,
}

/// A node of the declared response schema.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<&'static str, ResponseSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<&'static str>>,
}

fn string_property(description: &'static str) -> ResponseSchema {
    ResponseSchema {
        schema_type: SchemaType::String,
        description: Some(description),
        properties: None,
        required: None,
    }
}

/// The Veo prompt schema: an object with exactly the seven string fields,
/// all mandatory except `audio`.
pub(crate) fn veo_prompt_schema() -> ResponseSchema {
    let properties = BTreeMap::from([
        (
            "cinematography",
            string_property("Shot type, camera angle, and camera movement."),
        ),
        (
            "subject",
            string_property("Main character details, attire, texture, expression."),
        ),
        ("action", string_property("Primary activity and movement.")),
        (
            "context_setting",
            string_property("Environment, background elements, time of day."),
        ),
        (
            "style_ambiance",
            string_property("Aesthetic, lighting, film grain, mood."),
        ),
        (
            "audio",
            string_property("Soundscape, dialogue, or music suggestions."),
        ),
        (
            "negative_prompt",
            string_property("Elements to explicitly exclude."),
        ),
    ]);

    ResponseSchema {
        schema_type: SchemaType::Object,
        description: None,
        properties: Some(properties),
        required: Some(vec![
            "cinematography",
            "subject",
            "action",
            "context_setting",
            "style_ambiance",
            "negative_prompt",
        ]),
    }
}
