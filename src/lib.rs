//! # Grappelli
//!
//! A declarative element-construction and rendering framework for Rust.
//!
//! Grappelli builds UI trees from plain data. A single factory call — or a
//! fluent builder chain — produces an owned, detached view tree that can be
//! composed further, wired with event handlers, and rendered to HTML on the
//! server. List rendering is declarative: hand the factory an item sequence
//! and a per-item render function and receive one fragment back.
//!
//! ## Core Principles
//!
//! - **Typed dispatch over stringly-typed guessing**: classes, styles, event
//!   handlers, and plain attributes are distinct property variants
//! - **Best-effort application**: one malformed property or one failing list
//!   item never blanks the rest of the tree
//! - **Plain ownership**: no registry, no shared state between calls; the
//!   caller owns what the factory returns
//!
//! ## Example
//!
//! ```
//! use grappelli::pages::prelude::*;
//!
//! let card = div().class("card").text("Hello").build();
//! assert_eq!(
//! 	View::Element(card).render_to_string(),
//! 	"<div class=\"card\">Hello</div>"
//! );
//! ```

pub mod pages;

pub use grappelli_pages::prelude;
