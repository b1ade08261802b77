//! HTML Element Builder
//!
//! This module provides a fluent API for constructing elements with type-safe
//! operations.
//!
//! ## Design Pattern
//!
//! - **Fluent API**: Method chaining for readable construction
//! - **Best-effort mutation**: the bulk-composition methods never panic across
//!   the public boundary; internal failures are logged and the chain continues
//! - **Factory integration**: child descriptors route through
//!   [`create_element`], so they obey the same property and content rules

use std::borrow::Cow;

use crate::callback::IntoEventHandler;
use crate::element::{create_element, Content, Props};
use crate::view::{Element, Event, EventType, IntoView, View};

/// Chainable wrapper over [`Element`].
///
/// The wrapper — not the raw node type — carries the mutation surface, so the
/// capability set stays explicit and the tree type stays plain data.
///
/// ## Example
///
/// ```
/// use grappelli_pages::builder::button;
///
/// let submit = button()
/// 	.class("btn btn-primary")
/// 	.id("submit-button")
/// 	.text("Submit")
/// 	.on_click(|_| { /* handle */ })
/// 	.build();
/// assert_eq!(submit.attr("id"), Some("submit-button"));
/// ```
pub struct ElementBuilder {
	element: Element,
}

/// One entry of a mixed child list: an existing view, or factory arguments
/// for an element yet to be built.
pub enum ChildSpec {
	/// An already-built view.
	Node(View),
	/// Factory arguments for a new element.
	Element {
		tag: Cow<'static, str>,
		props: Props,
		content: Content,
	},
}

impl ChildSpec {
	/// Wraps an existing view.
	pub fn node(view: impl IntoView) -> Self {
		ChildSpec::Node(view.into_view())
	}

	/// Describes an element for the factory to build.
	pub fn element(
		tag: impl Into<Cow<'static, str>>,
		props: Props,
		content: impl Into<Content>,
	) -> Self {
		ChildSpec::Element {
			tag: tag.into(),
			props,
			content: content.into(),
		}
	}
}

impl ElementBuilder {
	/// Create a new builder from an element.
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// Set the class attribute from a single opaque token.
	///
	/// Multiple calls will overwrite the previous value.
	pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
		self.element.set_class_tokens(vec![class.into()]);
		self
	}

	/// Set the class attribute from an ordered token sequence.
	pub fn classes<I, T>(mut self, tokens: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Cow<'static, str>>,
	{
		self.element
			.set_class_tokens(tokens.into_iter().map(Into::into).collect());
		self
	}

	/// Set the id attribute.
	pub fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
		self.attr("id", id)
	}

	/// Set a custom attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.element.set_attr(name, value);
		self
	}

	/// Write one style declaration; an existing declaration for the same
	/// property is overwritten.
	pub fn style_decl(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.element.set_style_decl(name, value);
		self
	}

	/// Set text content.
	///
	/// This will replace all children of the element.
	pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
		self.element.clear_children();
		let text = text.into();
		if !text.is_empty() {
			self.element.append_child(View::Text(text));
		}
		self
	}

	/// Append a child.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.element.append_child(child.into_view());
		self
	}

	/// Add an event listener for any event type.
	///
	/// For common events, use the convenience methods (`on_click`,
	/// `on_input`, etc.).
	pub fn on<F>(mut self, event_type: impl Into<EventType>, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.element
			.add_listener(event_type.into(), callback.into_event_handler());
		self
	}

	/// Add a pre-built event handler (a [`crate::callback::Callback`] or an
	/// existing handler).
	pub fn on_handler(
		mut self,
		event_type: impl Into<EventType>,
		handler: impl IntoEventHandler,
	) -> Self {
		self.element
			.add_listener(event_type.into(), handler.into_event_handler());
		self
	}

	/// Add a click event listener.
	#[inline]
	pub fn on_click<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Click, callback)
	}

	/// Add an input event listener.
	#[inline]
	pub fn on_input<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Input, callback)
	}

	/// Add a change event listener.
	#[inline]
	pub fn on_change<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Change, callback)
	}

	/// Add a submit event listener.
	#[inline]
	pub fn on_submit<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Submit, callback)
	}

	/// Add a keydown event listener.
	#[inline]
	pub fn on_keydown<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Keydown, callback)
	}

	/// Add a focus event listener.
	#[inline]
	pub fn on_focus<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Focus, callback)
	}

	/// Add a blur event listener.
	#[inline]
	pub fn on_blur<F>(self, callback: F) -> Self
	where
		F: Fn(Event) + Send + Sync + 'static,
	{
		self.on(EventType::Blur, callback)
	}

	/// Build and append a same-tag child through the factory.
	///
	/// A construction failure is logged and the existing children are kept.
	pub fn add_element(mut self, props: Props, content: impl Into<Content>) -> Self {
		let tag = Cow::Owned(self.element.tag_name().to_owned());
		match create_element(tag, props, content) {
			Ok(view) => self.element.append_child(view),
			Err(error) => {
				tracing::warn!(
					tag = self.element.tag_name(),
					error = %error,
					"add_element failed; keeping existing children"
				);
			}
		}
		self
	}

	/// Append an existing view when it renders something; a diagnostic no-op
	/// for empty views.
	pub fn add_node(mut self, view: impl IntoView) -> Self {
		let view = view.into_view();
		if matches!(view, View::Empty) {
			tracing::warn!(
				tag = self.element.tag_name(),
				"add_node called with empty content; ignoring"
			);
		} else {
			self.element.append_child(view);
		}
		self
	}

	/// Append a mixed sequence of existing views and element descriptors.
	///
	/// Failing entries are logged and skipped; the rest still append, in order.
	pub fn add_elements(mut self, children: impl IntoIterator<Item = ChildSpec>) -> Self {
		for (index, spec) in children.into_iter().enumerate() {
			match spec {
				ChildSpec::Node(View::Empty) => {
					tracing::warn!(index, "skipping empty entry in child list");
				}
				ChildSpec::Node(view) => self.element.append_child(view),
				ChildSpec::Element { tag, props, content } => {
					match create_element(tag, props, content) {
						Ok(view) => self.element.append_child(view),
						Err(error) => {
							tracing::warn!(index, error = %error, "skipping child that failed to build");
						}
					}
				}
			}
		}
		self
	}

	/// Re-run the property applicator with a new mapping.
	///
	/// Application is cumulative, not a reset: classes replace, styles merge
	/// per property, attributes replace per name, listeners accumulate. A
	/// repeat directive has no meaning here and is ignored with a diagnostic.
	pub fn update_props(mut self, props: Props) -> Self {
		if props.repeat_directive().is_some() {
			tracing::warn!(
				tag = self.element.tag_name(),
				"repeat directive is ignored outside the factory"
			);
		}
		props.apply_to(&mut self.element);
		self
	}

	/// Remove all children of the element.
	pub fn clear(mut self) -> Self {
		self.element.clear_children();
		self
	}

	/// Finalize the builder and return the element.
	pub fn build(self) -> Element {
		self.element
	}
}

impl IntoView for ElementBuilder {
	fn into_view(self) -> View {
		View::Element(self.element)
	}
}

// ============================================================================
// Helper functions for common HTML elements
// ============================================================================

#[inline]
fn create_element_builder(tag: &'static str) -> ElementBuilder {
	ElementBuilder::new(Element::new(tag))
}

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> ElementBuilder {
			create_element_builder($tag)
		}
	};
}

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// use grappelli_pages::builder::{div, p};
	///
	/// let container = div()
	/// 	.class("container")
	/// 	.child(p().text("Content"))
	/// 	.build();
	/// assert_eq!(container.children().len(), 1);
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<button>` element
	///
	/// ## Example
	///
	/// ```
	/// use grappelli_pages::builder::button;
	///
	/// let b = button().text("Click me").on_click(|_| {}).build();
	/// assert_eq!(b.tag_name(), "button");
	/// ```
	button, "button"
);

define_element!(
	/// Create an `<input>` element
	input, "input"
);

define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);

define_element!(
	/// Create a `<select>` element (dropdown)
	select, "select"
);

define_element!(
	/// Create an `<option>` element (for use with `<select>`)
	option, "option"
);

define_element!(
	/// Create a `<form>` element
	form, "form"
);

define_element!(
	/// Create a `<label>` element
	label, "label"
);

define_element!(
	/// Create an `<a>` element (hyperlink)
	a, "a"
);

define_element!(
	/// Create an `<img>` element
	img, "img"
);

define_element!(
	/// Create a `<ul>` element (unordered list)
	ul, "ul"
);

define_element!(
	/// Create an `<ol>` element (ordered list)
	ol, "ol"
);

define_element!(
	/// Create an `<li>` element (list item)
	li, "li"
);

define_element!(
	/// Create a `<h1>` element (heading level 1)
	h1, "h1"
);

define_element!(
	/// Create a `<h2>` element (heading level 2)
	h2, "h2"
);

define_element!(
	/// Create a `<h3>` element (heading level 3)
	h3, "h3"
);

define_element!(
	/// Create a `<header>` element
	header, "header"
);

define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);

define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::Repeat;

	#[test]
	fn test_fluent_chain() {
		let el = div()
			.class("panel")
			.id("sidebar")
			.style_decl("width", "200px")
			.text("hello")
			.build();
		assert_eq!(el.class_attr().as_deref(), Some("panel"));
		assert_eq!(el.attr("id"), Some("sidebar"));
		assert_eq!(el.style_decl("width"), Some("200px"));
		assert_eq!(el.children().len(), 1);
	}

	#[test]
	fn test_text_replaces_children() {
		let el = div().child(span()).text("only this").build();
		assert_eq!(el.children().len(), 1);
		assert!(matches!(&el.children()[0], View::Text(text) if text == "only this"));
	}

	#[test]
	fn test_add_element_appends_same_tag_child() {
		let el = ul()
			.add_element(Props::new().class("row"), "first")
			.add_element(Props::new(), "second")
			.build();
		assert_eq!(el.children().len(), 2);
		assert!(matches!(&el.children()[0], View::Element(child) if child.tag_name() == "ul"));
	}

	#[test]
	fn test_add_node_ignores_empty_views() {
		let el = div().add_node(View::Empty).add_node(span()).build();
		assert_eq!(el.children().len(), 1);
	}

	#[test]
	fn test_add_elements_mixes_nodes_and_descriptors() {
		let el = div()
			.add_elements([
				ChildSpec::node(span().text("a")),
				ChildSpec::element("p", Props::new(), "b"),
			])
			.build();
		assert_eq!(el.children().len(), 2);
		assert!(matches!(&el.children()[1], View::Element(child) if child.tag_name() == "p"));
	}

	#[test]
	fn test_add_elements_skips_failing_entries() {
		let el = div()
			.add_elements([
				ChildSpec::element("", Props::new(), "bad tag"),
				ChildSpec::element("p", Props::new(), "kept"),
			])
			.build();
		assert_eq!(el.children().len(), 1);
	}

	#[test]
	fn test_update_props_is_cumulative() {
		let el = div()
			.attr("id", "one")
			.update_props(Props::new().class("late").attr("data-x", "1"))
			.build();
		assert_eq!(el.attr("id"), Some("one"));
		assert_eq!(el.attr("data-x"), Some("1"));
		assert_eq!(el.class_attr().as_deref(), Some("late"));
	}

	#[test]
	fn test_update_props_ignores_repeat_directive() {
		let el = div()
			.update_props(Props::new().repeat(Repeat::over(vec![1])))
			.build();
		assert!(el.children().is_empty());
		assert!(el.attrs().is_empty());
	}

	#[test]
	fn test_clear_removes_children() {
		let el = div().child("a").child("b").clear().build();
		assert!(el.children().is_empty());
	}

	#[test]
	fn test_builder_into_view_renders() {
		let view = div().class("x").text("y").into_view();
		assert_eq!(view.render_to_string(), "<div class=\"x\">y</div>");
	}
}
