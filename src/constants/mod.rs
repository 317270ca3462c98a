pub mod fallback;
pub mod prompts;
