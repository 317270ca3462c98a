use std::sync::Arc;

use crate::{
    constants::{fallback::fallback_questions, prompts::QUIZ_GENERATOR_PROMPT},
    models::domain::{QuizBatch, QuizQuestion, RawQuestion},
    providers::{ChatProvider, ProviderError},
    services::prompt_builder,
};

pub struct QuizService {
    provider: Arc<dyn ChatProvider>,
}

impl QuizService {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Generate a quiz batch. Never fails: every provider failure mode
    /// degrades to the fixed fallback batch.
    pub async fn generate(&self, topic: &str, difficulty: &str) -> QuizBatch {
        let user_prompt = prompt_builder::build_quiz_user_prompt(topic, difficulty);
        let result = self.provider.complete(QUIZ_GENERATOR_PROMPT, &user_prompt).await;
        normalize_quiz_response(result, topic, difficulty)
    }
}

/// Slice the substring between the first `[` and the last `]` (inclusive)
/// and parse it strictly as a JSON array. Models often wrap the array in
/// prose despite the output contract; anything short of a parseable array
/// in there is `None`.
pub fn extract_json_array(text: &str) -> Option<Vec<serde_json::Value>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]) {
        Ok(serde_json::Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Normalize a raw provider outcome into a non-empty, fully validated
/// batch. Ids record provenance: `ai-<n>` for provider-derived questions,
/// `fb-<n>` for fallback content, whatever the failure cause.
pub fn normalize_quiz_response(
    result: Result<String, ProviderError>,
    topic: &str,
    difficulty: &str,
) -> QuizBatch {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            log::error!("quiz provider call failed, serving fallback batch: {}", e);
            return fallback_batch(topic, difficulty);
        }
    };

    let Some(items) = extract_json_array(&text) else {
        log::warn!("quiz provider response had no parseable JSON array, serving fallback batch");
        return fallback_batch(topic, difficulty);
    };

    let mut questions: Vec<QuizQuestion> = Vec::new();
    for item in items {
        let raw: RawQuestion = match serde_json::from_value(item) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("dropping malformed quiz question: {}", e);
                continue;
            }
        };
        // Ids stay sequential over the questions that survive validation.
        match raw.into_validated(format!("ai-{}", questions.len())) {
            Some(question) => questions.push(question),
            None => log::warn!("dropping quiz question with invalid shape"),
        }
    }

    if questions.is_empty() {
        log::warn!("quiz provider yielded no usable questions, serving fallback batch");
        return fallback_batch(topic, difficulty);
    }

    QuizBatch {
        questions,
        offline: false,
    }
}

fn fallback_batch(topic: &str, difficulty: &str) -> QuizBatch {
    let questions = fallback_questions(topic, difficulty)
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| raw.into_validated(format!("fb-{}", i)))
        .collect();
    QuizBatch {
        questions,
        offline: true,
    }
}
