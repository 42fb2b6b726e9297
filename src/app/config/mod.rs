//! Configuration loading.
//!
//! The schema and its defaults live in `domain::config`; this module only decides
//! where the document comes from.

mod load_config;

pub use load_config::load_config;
