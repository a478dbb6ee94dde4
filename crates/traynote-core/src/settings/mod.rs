//! Settings domain: values, schema, and the persisted store.
//!
//! The document is a flat JSON object whose keys are fixed by the schema.
//! Loading heals missing keys from the defaults and prunes keys the schema
//! no longer knows; every `set` is validated against the key's options.

mod error;
mod schema;
mod store;
mod value;

pub use error::SettingsError;
pub use schema::{SettingOption, SettingsSchema, keys};
pub use store::SettingsStore;
pub use value::{SettingValue, SettingsDocument};
