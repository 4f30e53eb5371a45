//! Prompt domain
//!
//! The fixed instructional template wrapped around submitted job control text.

mod template;

pub use template::AnalysisPromptTemplate;
