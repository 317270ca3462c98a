//! Deterministic offline content served when a provider is unreachable or
//! returns something unusable. This is the only behavior guaranteed to be
//! available with the network down, so the wording carries the same safety
//! disclaimers as the live persona.

use once_cell::sync::Lazy;

use crate::models::domain::quiz::RawQuestion;

struct FallbackBucket {
    keywords: &'static [&'static str],
    reply: &'static str,
}

// Bucket order is load-bearing: a message matching several buckets resolves
// to the first one checked (e.g. "tired and nervous" lands on conditioning).
static COACH_BUCKETS: Lazy<Vec<FallbackBucket>> = Lazy::new(|| {
    vec![
        FallbackBucket {
            keywords: &["bottom", "ridden", "ride out"],
            reply: "Let's talk bottom work. A lot of wrestlers struggle here, especially against \
                    strong riders. Pick one main get-up (stand-up or sit-out) and drill it hard: \
                    3-5 sets of 30 seconds after practice with a partner giving real pressure. \
                    Focus on first move off the whistle, hand control, and getting to your feet \
                    quickly. Ask your coach for 1-2 specific bottom drills to hit every day for \
                    the next 2 weeks.",
        },
        FallbackBucket {
            keywords: &["gas", "tired", "conditioning", "3rd period"],
            reply: "Gassing out in the 3rd is usually a mix of conditioning, pacing, and nerves. \
                    After practice, add 5-8 minutes of short sprints: for example 15-20 second \
                    hard goes, 30-40 seconds rest, 6-8 rounds. In live goes, work on breathing \
                    between whistles and not blowing all your energy in the first 30 seconds.",
        },
        FallbackBucket {
            keywords: &["nervous", "anxious", "anxiety", "scared", "mental"],
            reply: "Feeling nervous before matches is completely normal, even for tough \
                    wrestlers. Build a simple pre-match routine: a short warm-up you always do, a \
                    couple of deep breaths, and 1-2 phrases you repeat about effort (like \"hard \
                    hand-fight and move my feet\"). If nerves feel really heavy or overwhelming, \
                    talk with a coach, parent, or another trusted adult, and consider a \
                    professional if needed.",
        },
        FallbackBucket {
            keywords: &["cut", "weight", "weigh in", "weigh-in"],
            reply: "Weight and cutting need to be done safely. Always involve your coach and a \
                    parent or guardian before changing weight classes or cutting hard. Focus on \
                    consistent sleep, smart food, and staying hydrated while you work with adults \
                    on a safe plan. If you feel dizzy, weak, or obsessed with the scale, talk to \
                    someone you trust right away. No match is worth your long-term health.",
        },
    ]
});

const CATCH_ALL_REPLY: &str =
    "Thanks for sharing that. Let's keep it simple: pick one small thing to improve over the \
     next 1-2 weeks. Choose 1-2 key positions or habits, ask your coach for specific drills, \
     and track how many extra focused reps you get after practice. If you want a more detailed \
     plan, describe the situation with position, score, time left, and how you usually react.";

/// Keyword-dispatched offline coach reply. Checks buckets in a fixed order
/// against the lowercased message and returns the first match, falling back
/// to a catch-all when nothing matches (including the empty message).
pub fn offline_coach_reply(message: &str) -> &'static str {
    let m = message.to_lowercase();
    for bucket in COACH_BUCKETS.iter() {
        if bucket.keywords.iter().any(|kw| m.contains(kw)) {
            return bucket.reply;
        }
    }
    CATCH_ALL_REPLY
}

/// The fixed 3-question quiz batch, parameterized only by interpolating the
/// requested topic and difficulty into the question text.
pub fn fallback_questions(topic: &str, difficulty: &str) -> Vec<RawQuestion> {
    vec![
        RawQuestion {
            question: format!(
                "In {}, what is usually the most important first focus at a {} level?",
                topic,
                difficulty.to_lowercase()
            ),
            options: vec![
                "Trying a big throw immediately".to_string(),
                "Getting solid position first (stance, hands, head)".to_string(),
                "Backing straight up to create space".to_string(),
                "Dropping to your butt to avoid contact".to_string(),
            ],
            correct_index: 1,
            explanation: "Even at higher levels, good position comes before big moves. Solid \
                          stance, head and hand position make all attacks safer and more \
                          effective."
                .to_string(),
        },
        RawQuestion {
            question: "When you keep getting stuck in the same position, what is a good basic \
                       plan?"
                .to_string(),
            options: vec![
                "Hope it goes away on its own".to_string(),
                "Avoid that position in practice".to_string(),
                "Ask your coach for 1-2 drills and hit extra reps every day".to_string(),
                "Only watch videos and never drill".to_string(),
            ],
            correct_index: 2,
            explanation: "Specific, focused reps on the exact position with guidance from your \
                          coach is the fastest way to fix problem spots."
                .to_string(),
        },
        RawQuestion {
            question: "Which of these BEST describes good 'mat IQ'?".to_string(),
            options: vec![
                "Knowing a lot of fancy moves but never using them".to_string(),
                "Understanding score, time, and position to make smart choices".to_string(),
                "Only wrestling hard in the first period".to_string(),
                "Ignoring your coach's plan and doing random moves".to_string(),
            ],
            correct_index: 1,
            explanation: "Mat IQ is about awareness of score, time, and position so you can \
                          choose the highest-percentage options in each moment."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_bucket() {
        let reply = offline_coach_reply("I get ridden out on bottom");
        assert!(reply.contains("bottom work"));
    }

    #[test]
    fn test_conditioning_bucket() {
        let reply = offline_coach_reply("I gas out in the 3rd period");
        assert!(reply.contains("Gassing out in the 3rd"));
    }

    #[test]
    fn test_nerves_bucket() {
        let reply = offline_coach_reply("I get really anxious before matches");
        assert!(reply.contains("pre-match routine"));
    }

    #[test]
    fn test_weight_bucket() {
        let reply = offline_coach_reply("should I cut to a lower weight class?");
        assert!(reply.contains("done safely"));
    }

    #[test]
    fn test_catch_all_for_unmatched_and_empty() {
        assert!(offline_coach_reply("how do I pick headgear").contains("keep it simple"));
        assert!(offline_coach_reply("").contains("keep it simple"));
    }

    #[test]
    fn test_overlapping_keywords_resolve_to_first_bucket() {
        // "tired" (conditioning) is checked before "nervous" (mindset).
        let reply = offline_coach_reply("I'm tired and nervous in the 3rd");
        assert!(reply.contains("Gassing out in the 3rd"));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let msg = "I'm tired and nervous";
        assert_eq!(offline_coach_reply(msg), offline_coach_reply(msg));
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let reply = offline_coach_reply("RIDDEN OUT AGAIN");
        assert!(reply.contains("bottom work"));
    }

    #[test]
    fn test_fallback_questions_shape() {
        let questions = fallback_questions("folkstyle neutral", "Intermediate");
        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct_index < 4);
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_fallback_questions_interpolate_topic_and_difficulty() {
        let questions = fallback_questions("leg riding", "Advanced");
        assert!(questions[0].question.contains("leg riding"));
        assert!(questions[0].question.contains("advanced"));
    }
}
