//! Output formatting for the console and the web form

pub mod console;
pub mod impact;
