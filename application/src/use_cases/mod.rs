//! Application use cases

pub mod analyze_jcl;
pub mod list_models;
pub mod resolve_credential;
