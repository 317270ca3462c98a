//! Pure string construction for outbound provider requests. Nothing here
//! can fail; bad input just produces a shorter prompt.

use crate::models::domain::{ChatRole, ChatTurn};

/// Only the most recent turns are forwarded, for context-window economy.
const HISTORY_WINDOW: usize = 6;

/// Render the recent transcript as labeled lines and append the new turn,
/// ending on a `Coach:` cue for the model to complete.
pub fn build_coach_input(history: &[ChatTurn], message: &str) -> String {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let context = history[start..]
        .iter()
        .map(|turn| {
            let label = match turn.role {
                ChatRole::User => "Athlete",
                ChatRole::Coach => "Coach",
            };
            format!("{}: {}", label, turn.text)
        })
        .collect::<Vec<_>>()
        .join("\n");

    if context.is_empty() {
        format!("Athlete: {}\n\nCoach:", message)
    } else {
        format!(
            "Here is our recent conversation:\n{}\n\nAthlete: {}\n\nCoach:",
            context, message
        )
    }
}

pub fn build_quiz_user_prompt(topic: &str, difficulty: &str) -> String {
    format!(
        "Topic: {}\nDifficulty: {}\n\nGenerate 3 questions that would help a wrestler think \
         better on the mat.",
        topic, difficulty
    )
}
