//! Structured Veo prompt model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A cinematic generation prompt reverse-engineered from uploaded media.
///
/// This is the schema-constrained output of one analysis call. Every field
/// except `audio` is mandatory on the wire; `audio` defaults to empty when
/// the engine has nothing to say about the soundscape, and an empty `audio`
/// renders no audio section downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VeoPrompt {
    /// Shot type, camera angle, and camera movement.
    pub cinematography: String,

    /// Main subject, attire/appearance, expression.
    pub subject: String,

    /// Primary activity and movement, implied or explicit.
    pub action: String,

    /// Environment, background elements, time of day.
    pub context_setting: String,

    /// Aesthetic, lighting, film grain, mood.
    pub style_ambiance: String,

    /// Soundscape, ambient noise, suggested score.
    #[serde(default)]
    pub audio: String,

    /// Elements to explicitly exclude from generation.
    pub negative_prompt: String,
}

impl VeoPrompt {
    /// Whether the prompt carries an audio section.
    pub fn has_audio(&self) -> bool {
        !self.audio.trim().is_empty()
    }

    /// Render the full copy-ready prompt block.
    ///
    /// Sections appear in the order a Veo prompt is composed; the audio
    /// section is omitted when empty.
    pub fn to_prompt_text(&self) -> String {
        let mut sections = vec![
            format!("CINEMATOGRAPHY: {}", self.cinematography),
            format!("SUBJECT: {}", self.subject),
            format!("ACTION: {}", self.action),
            format!("CONTEXT & SETTING: {}", self.context_setting),
            format!("STYLE & AMBIANCE: {}", self.style_ambiance),
        ];
        if self.has_audio() {
            sections.push(format!("AUDIO: {}", self.audio));
        }
        sections.push(format!("NEGATIVE PROMPT: {}", self.negative_prompt));
        sections.join("\n\n")
    }
}
