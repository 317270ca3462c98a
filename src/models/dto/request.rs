use serde::Deserialize;
use validator::Validate;

use crate::constants::prompts::{DEFAULT_QUIZ_DIFFICULTY, DEFAULT_QUIZ_TOPIC};
use crate::models::domain::ChatTurn;

/// Hosted coach chat: message is required, history is the client's recent
/// transcript (truncated server-side for context-window economy).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HostedChatRequest {
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Local coach chat: a missing message is treated as an empty turn rather
/// than rejected, matching the offline-first behavior of this path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LocalChatRequest {
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub topic: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub difficulty: String,
}

impl GenerateQuizRequest {
    /// Blank or absent fields resolve to the fixed defaults.
    pub fn resolved(&self) -> (String, String) {
        let topic = if self.topic.trim().is_empty() {
            DEFAULT_QUIZ_TOPIC.to_string()
        } else {
            self.topic.trim().to_string()
        };
        let difficulty = if self.difficulty.trim().is_empty() {
            DEFAULT_QUIZ_DIFFICULTY.to_string()
        } else {
            self.difficulty.trim().to_string()
        };
        (topic, difficulty)
    }
}
