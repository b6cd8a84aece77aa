pub mod client;
pub mod types;

pub use client::{ContentGenerator, GeminiClient, GenerateError};
pub use types::build_prompt;
