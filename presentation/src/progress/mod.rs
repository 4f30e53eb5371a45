//! Progress indicators for the CLI

pub mod reporter;

pub use reporter::{SimpleProgress, SpinnerProgress};
