//! Google Gemini adapter for the LLM gateway port

pub mod gateway;
pub mod types;

pub use gateway::GeminiGateway;
