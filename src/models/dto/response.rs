use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::domain::{ChatReply, QuizBatch, QuizQuestion};

/// Hosted chat carries no offline flag on the wire; degraded content is
/// indistinguishable from provider content by contract.
#[derive(Debug, Serialize)]
pub struct HostedChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct LocalChatResponse {
    pub reply: String,
    pub offline: bool,
}

impl From<ChatReply> for HostedChatResponse {
    fn from(reply: ChatReply) -> Self {
        HostedChatResponse { reply: reply.text }
    }
}

impl From<ChatReply> for LocalChatResponse {
    fn from(reply: ChatReply) -> Self {
        LocalChatResponse {
            reply: reply.text,
            offline: reply.offline,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestion>,
    pub offline: bool,
}

impl From<QuizBatch> for GenerateQuizResponse {
    fn from(batch: QuizBatch) -> Self {
        GenerateQuizResponse {
            questions: batch.questions,
            offline: batch.offline,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub hosted_provider_configured: bool,
    pub local_provider_url: String,
}

/// Aggregates over the journal slots. `mood_counts` is ordered for stable
/// JSON output.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub sessions_this_week: usize,
    pub mood_counts: BTreeMap<String, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_chat_response_carries_offline_flag() {
        let reply = ChatReply {
            text: "drill your stand-up".to_string(),
            offline: true,
        };
        let response = LocalChatResponse::from(reply);
        assert!(response.offline);
        assert_eq!(response.reply, "drill your stand-up");
    }

    #[test]
    fn test_hosted_chat_response_drops_offline_flag() {
        let reply = ChatReply {
            text: "hand fight first".to_string(),
            offline: true,
        };
        let json = serde_json::to_string(&HostedChatResponse::from(reply)).unwrap();
        assert!(!json.contains("offline"));
    }
}
