//! Built-in JCL samples offered by the sample selector

mod catalog;

pub use catalog::JclSample;
