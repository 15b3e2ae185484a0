//! Conversational interface for fxchat.
//!
//! Extracts conversion intent from free text, answers complete conversions
//! from the rate service and hands everything else to a generative model.

pub mod error;
pub mod llm;
pub mod orchestrator;
pub mod parser;
pub mod response;

pub use error::ChatError;
pub use llm::{GeminiClient, TextGenerator};
pub use orchestrator::{ChatOrchestrator, ChatReply, ReplySource};
pub use parser::{ConversionIntent, IntentExtractor};
pub use response::{ERROR_REPLY, INVALID_QUERY_REPLY};
