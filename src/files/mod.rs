//! File operations module for StatCode
//!
//! This module provides native save dialogs for exports.

pub mod dialogs;
