//! Declarative element construction and rendering
//!
//! This module provides access to grappelli-pages: the element factory, the
//! fluent builder, the repeat directive, and the server-side HTML renderer.
//!
//! ## Example
//!
//! ```
//! use grappelli::pages::element::{create_element, Props};
//!
//! let view = create_element("p", Props::new().class("intro"), "Welcome")?;
//! assert_eq!(view.render_to_string(), "<p class=\"intro\">Welcome</p>");
//! # Ok::<(), grappelli::pages::BuildError>(())
//! ```

pub use grappelli_pages::*;
