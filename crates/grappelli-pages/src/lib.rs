//! Grappelli Pages - Declarative Element Construction
//!
//! A small framework for building UI trees from data: a factory that turns
//! `(tag, props, content)` descriptions into owned view trees, a fluent
//! builder for hand-written composition, a repeat directive for declarative
//! list rendering, and a server-side HTML renderer.
//!
//! ## Features
//!
//! - **Typed property dispatch**: class lists, style blocks, event handlers,
//!   and plain attributes are distinct variants, applied by classification
//!   rather than stringly-typed guessing
//! - **Best-effort application**: one malformed property or one failing list
//!   item is logged and skipped; it never blanks the rest of the tree
//! - **Owned view trees**: construction is synchronous and side-effect free;
//!   the caller owns the result exclusively
//! - **Server-side rendering**: any view serializes to HTML with escaping,
//!   void elements, and boolean-attribute handling
//!
//! ## Architecture
//!
//! - [`view`]: the view tree (`View`, `Element`), events, and rendering
//! - [`element`]: the factory (`create_element`), properties, content
//!   normalization, and the repeat directive
//! - [`builder`]: fluent element builder and tag helper functions
//! - [`callback`]: cloneable callback wrappers and handler conversions
//! - [`error`]: the construction error type
//!
//! ## Example
//!
//! ```
//! use grappelli_pages::element::{create_element, Props, Repeat};
//!
//! let list = create_element(
//! 	"ul",
//! 	Props::new().repeat(
//! 		Repeat::over(vec!["Ada", "Grace"]).render(|name: &&str, _| {
//! 			create_element("li", Props::new().class("contact"), *name).unwrap()
//! 		}),
//! 	),
//! 	(),
//! )?;
//! assert_eq!(
//! 	list.render_to_string(),
//! 	"<li class=\"contact\">Ada</li><li class=\"contact\">Grace</li>"
//! );
//! # Ok::<(), grappelli_pages::BuildError>(())
//! ```

pub mod builder;
pub mod callback;
pub mod element;
pub mod error;
pub mod view;

pub use builder::{ChildSpec, ElementBuilder};
pub use callback::{Callback, IntoEventHandler, event_handler};
pub use element::{Content, PropValue, Props, Repeat, StyleDecls, create_element};
pub use error::BuildError;
pub use view::{Element, Event, EventHandler, EventType, IntoView, View};

/// Commonly used items, importable in one line.
pub mod prelude {
	pub use crate::builder::{
		ChildSpec, ElementBuilder, a, button, div, footer, form, h1, h2, h3, header, img, input,
		label, li, nav, ol, option, p, section, select, span, textarea, ul,
	};
	pub use crate::callback::{Callback, IntoEventHandler, event_handler};
	pub use crate::element::{Content, PropValue, Props, Repeat, StyleDecls, create_element};
	pub use crate::error::BuildError;
	pub use crate::view::{Element, Event, EventHandler, EventType, IntoView, View};
}
