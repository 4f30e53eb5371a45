//! Wiring shared by the `jcl-optimizer` and `check-models` binaries

pub mod input;
pub mod logging;
pub mod wiring;
