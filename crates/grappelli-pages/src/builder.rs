//! Fluent element builder.
//!
//! This module provides a chainable API for constructing elements without
//! spelling out the factory call for every node, plus free helper functions
//! for the common HTML tags.

mod html;

pub use html::*;
