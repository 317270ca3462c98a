pub mod coach_handler;
pub mod health_handler;
pub mod journal_handler;
pub mod quiz_handler;

pub use coach_handler::{hosted_chat, local_chat};
pub use health_handler::health_check;
pub use journal_handler::{get_journal_slot, get_stats, put_journal_slot};
pub use quiz_handler::generate_quiz;
