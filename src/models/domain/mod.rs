pub mod chat;
pub mod journal;
pub mod quiz;

pub use chat::{ChatReply, ChatRole, ChatTurn};
pub use quiz::{QuizBatch, QuizQuestion, RawQuestion};
