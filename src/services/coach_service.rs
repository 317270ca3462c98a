use std::sync::Arc;

use crate::{
    constants::{
        fallback::offline_coach_reply,
        prompts::{HOSTED_COACH_PROMPT, LOCAL_COACH_PROMPT},
    },
    errors::{AppError, AppResult},
    models::domain::{ChatReply, ChatTurn},
    providers::{ChatProvider, ProviderError},
    services::prompt_builder,
};

pub struct CoachService {
    hosted: Option<Arc<dyn ChatProvider>>,
    local: Arc<dyn ChatProvider>,
}

impl CoachService {
    pub fn new(hosted: Option<Arc<dyn ChatProvider>>, local: Arc<dyn ChatProvider>) -> Self {
        Self { hosted, local }
    }

    /// Hosted coach chat. Requires a configured credential and a non-blank
    /// message; provider failures degrade to fallback content, they do not
    /// error.
    pub async fn hosted_chat(&self, message: &str, history: &[ChatTurn]) -> AppResult<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::ValidationError("Missing message".to_string()));
        }
        let provider = self.hosted.as_ref().ok_or_else(|| {
            AppError::NotConfigured(
                "hosted coach provider (set OPENAI_API_KEY on the server)".to_string(),
            )
        })?;

        let input = prompt_builder::build_coach_input(history, message);
        let result = provider.complete(HOSTED_COACH_PROMPT, &input).await;
        Ok(normalize_chat_response(result, message))
    }

    /// Local coach chat. An empty message is a valid (empty) conversational
    /// turn, and this path never fails.
    pub async fn local_chat(&self, message: &str) -> ChatReply {
        let result = self.local.complete(LOCAL_COACH_PROMPT, message).await;
        normalize_chat_response(result, message)
    }
}

/// Turn a raw provider outcome into a reply the caller can always render.
/// Any failure, and any blank completion, selects fallback text keyed off
/// the original user message.
pub fn normalize_chat_response(
    result: Result<String, ProviderError>,
    message: &str,
) -> ChatReply {
    match result {
        Ok(text) if !text.trim().is_empty() => ChatReply {
            text,
            offline: false,
        },
        Ok(_) => {
            log::warn!("coach provider returned a blank completion, serving fallback");
            offline_reply(message)
        }
        Err(e) => {
            log::error!("coach provider call failed, serving fallback: {}", e);
            offline_reply(message)
        }
    }
}

fn offline_reply(message: &str) -> ChatReply {
    ChatReply {
        text: offline_coach_reply(message).to_string(),
        offline: true,
    }
}
