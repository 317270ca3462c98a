use serde::{Deserialize, Serialize};

/// A question as the provider (or the fallback bank) shapes it, before any
/// validation. `correct_index` is kept signed so out-of-range values survive
/// parsing and can be rejected explicitly instead of failing the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: i64,
    #[serde(default)]
    pub explanation: String,
}

/// A validated question handed to the client: exactly 4 options, in-range
/// answer index, batch-unique id (`ai-<n>` for provider content, `fb-<n>`
/// for fallback content).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: usize,
    pub explanation: String,
}

pub const QUIZ_OPTION_COUNT: usize = 4;

impl RawQuestion {
    /// Validate the full shape contract and assign an id. Returns `None` for
    /// a question that violates it (blank prompt, wrong option count,
    /// out-of-range answer index).
    pub fn into_validated(self, id: String) -> Option<QuizQuestion> {
        if self.question.trim().is_empty() {
            return None;
        }
        if self.options.len() != QUIZ_OPTION_COUNT {
            return None;
        }
        if !(0..QUIZ_OPTION_COUNT as i64).contains(&self.correct_index) {
            return None;
        }
        Some(QuizQuestion {
            id,
            question: self.question,
            options: self.options,
            correct_index: self.correct_index as usize,
            explanation: self.explanation,
        })
    }
}

/// One generated batch. `questions` is never empty: unusable provider output
/// is replaced wholesale by the fallback batch, never merged with it.
#[derive(Debug, Clone, Serialize)]
pub struct QuizBatch {
    pub questions: Vec<QuizQuestion>,
    pub offline: bool,
}
