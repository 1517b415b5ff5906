//! Editor module for StatCode
//!
//! This module contains the highlighted code editor widget shared by the
//! docked panel and the detached window.

mod widget;

pub use widget::{place_cursor, CodeEditor};
