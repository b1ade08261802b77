//! Callback types and event handler conversion traits.
//!
//! This module provides type-safe callback wrappers and the
//! [`IntoEventHandler`] trait for converting closures, [`Callback`]s, and
//! pre-built handlers to [`EventHandler`].
//!
//! ## Example
//!
//! ```
//! use grappelli_pages::callback::Callback;
//! use grappelli_pages::view::Event;
//!
//! let handle_click = Callback::new(|_event: Event| {
//! 	// react to the click
//! });
//! handle_click.call(Event::new("click".into()));
//! ```

use std::sync::Arc;

use crate::view::{Event, EventHandler};

/// A type-safe, cloneable callback wrapper for event handlers.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable while
/// providing a stable reference that won't change between renders.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives (defaults to [`Event`])
/// - `Ret`: The return type of the callback (defaults to `()`)
pub struct Callback<Args = Event, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Trait for converting various handler types to [`EventHandler`].
///
/// This trait is implemented for:
/// - Closures that take an [`Event`] argument
/// - [`Callback<Event, ()>`]
/// - [`EventHandler`] (identity conversion)
pub trait IntoEventHandler {
	/// Converts self into an [`EventHandler`].
	fn into_event_handler(self) -> EventHandler;
}

/// Blanket implementation for closures that match the handler signature.
impl<F> IntoEventHandler for F
where
	F: Fn(Event) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> EventHandler {
		Arc::new(self)
	}
}

/// Implementation for the Callback type.
impl IntoEventHandler for Callback<Event, ()> {
	fn into_event_handler(self) -> EventHandler {
		self.inner
	}
}

/// Identity implementation for EventHandler.
impl IntoEventHandler for EventHandler {
	fn into_event_handler(self) -> EventHandler {
		self
	}
}

/// Event handler helper with a concrete argument type for better inference.
///
/// Unlike [`IntoEventHandler::into_event_handler`], this function has a
/// concrete argument type, allowing Rust to infer the closure parameter type
/// automatically.
pub fn event_handler(f: impl Fn(Event) + Send + Sync + 'static) -> EventHandler {
	Arc::new(f)
}

/// Convenience function for converting handlers of various types.
pub fn into_event_handler<H: IntoEventHandler>(handler: H) -> EventHandler {
	handler.into_event_handler()
}
