pub mod coach_service;
pub mod journal_service;
pub mod prompt_builder;
pub mod quiz_service;

pub use coach_service::CoachService;
pub use journal_service::JournalService;
pub use quiz_service::QuizService;
