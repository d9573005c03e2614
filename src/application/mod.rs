pub mod ports;
mod prompt_catalog;
pub mod services;

pub use prompt_catalog::{Locale, PromptCatalog};
