//! Interactive session domain.
//!
//! - [`context::SessionContext`]: per-session state (selection, input, credential, last report)

pub mod context;
