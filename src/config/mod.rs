//! Configuration module for StatCode
//!
//! This module handles user preferences (theme, font size, autosave
//! interval), including serialization to/from JSON and persistence through
//! the key-value store.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
