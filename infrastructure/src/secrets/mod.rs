//! Secret lookup backed by a TOML secrets file and the process environment

mod figment_store;

pub use figment_store::FigmentSecretStore;
