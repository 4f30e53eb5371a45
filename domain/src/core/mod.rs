//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models that can produce a report
//! - [`model_info::ModelInfo`]: a model as described by the listing endpoint
//! - [`credential::Credential`]: the API key, never printed
//! - [`job_control::JobControlText`]: validated input for an analysis
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod job_control;
pub mod model;
pub mod model_info;
pub mod string;
