//! Core view tree: the owned, detached representation of renderable UI.
//!
//! A [`View`] is either a single element, a text node, a fragment (an ordered,
//! non-rendering container used to return multiple siblings from one call), or
//! nothing at all. Views are plain data: building one performs no I/O, touches
//! no global state, and returns synchronously. The caller owns the result
//! exclusively until it hands it off — the framework keeps no registry of
//! produced nodes.

pub mod event;
mod into_view;
pub(crate) mod util;

pub use event::{Event, EventHandler, EventType};
pub use into_view::IntoView;
pub(crate) use util::html_escape;
pub use util::{BOOLEAN_ATTRS, is_boolean_attr_truthy};

use std::borrow::Cow;
use std::fmt;

/// A unified representation of renderable content.
///
/// `View` is the value every construction path in this crate produces:
/// the factory, the fluent builder, and the repeat directive all bottom out
/// in one of these variants.
#[derive(Debug)]
pub enum View {
	/// A single element with attributes, children, and listeners.
	Element(Element),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// An element node in the view tree.
///
/// Class tokens, style declarations, generic attributes, and event listeners
/// are kept separately so that later property applications compose the way
/// a live node would: classes replace, styles merge per property, attributes
/// replace per name, listeners accumulate.
pub struct Element {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// Ordered class tokens; serialized space-joined.
	classes: Vec<Cow<'static, str>>,
	/// Ordered style declarations; last write wins per property.
	styles: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Generic attributes; a repeated name replaces the previous value in place.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Event listeners in registration order.
	listeners: Vec<(EventType, EventHandler)>,
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag)
			.field("classes", &self.classes)
			.field("styles", &self.styles)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("listener_count", &self.listeners.len())
			.finish()
	}
}

impl Element {
	/// Creates a new, empty element of the given tag.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			classes: Vec::new(),
			styles: Vec::new(),
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			listeners: Vec::new(),
		}
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Replaces the class token list.
	///
	/// Tokens are kept exactly as given: no whitespace splitting, no
	/// de-duplication, no empty-token filtering.
	pub fn set_class_tokens(&mut self, tokens: Vec<Cow<'static, str>>) {
		self.classes = tokens;
	}

	/// Returns the class tokens.
	pub fn class_tokens(&self) -> &[Cow<'static, str>] {
		&self.classes
	}

	/// Returns the serialized class attribute, or `None` when no classes are set.
	pub fn class_attr(&self) -> Option<String> {
		if self.classes.is_empty() {
			None
		} else {
			Some(self.classes.join(" "))
		}
	}

	/// Writes one style declaration. An existing declaration for the same
	/// property is overwritten in place; unrelated declarations are untouched.
	pub fn set_style_decl(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		let name = name.into();
		let value = value.into();
		if let Some(slot) = self.styles.iter_mut().find(|(existing, _)| *existing == name) {
			slot.1 = value;
		} else {
			self.styles.push((name, value));
		}
	}

	/// Returns the value of a style property, if declared.
	pub fn style_decl(&self, name: &str) -> Option<&str> {
		self.styles
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_ref())
	}

	/// Returns all style declarations in declaration order.
	pub fn style_decls(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.styles
	}

	/// Returns the serialized style attribute, or `None` when no declarations exist.
	pub fn style_attr(&self) -> Option<String> {
		if self.styles.is_empty() {
			return None;
		}
		let rendered: Vec<String> = self
			.styles
			.iter()
			.map(|(name, value)| format!("{name}: {value}"))
			.collect();
		Some(rendered.join("; "))
	}

	/// Sets a generic attribute. A repeated name replaces the previous value
	/// in place, keeping the original position.
	pub fn set_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		let name = name.into();
		let value = value.into();
		if let Some(slot) = self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
			slot.1 = value;
		} else {
			self.attrs.push((name, value));
		}
	}

	/// Returns a generic attribute value, if set.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_ref())
	}

	/// Returns the generic attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Appends a view using host-tree append semantics: fragments splice
	/// their children in, empty views disappear.
	pub fn append_child(&mut self, child: View) {
		child.append_into(&mut self.children);
	}

	/// Returns the child views.
	pub fn children(&self) -> &[View] {
		&self.children
	}

	/// Removes all children.
	pub fn clear_children(&mut self) {
		self.children.clear();
	}

	/// Registers an event listener. Listeners accumulate: registering twice
	/// for the same event invokes both on dispatch.
	pub fn add_listener(&mut self, event_type: EventType, handler: EventHandler) {
		self.listeners.push((event_type, handler));
	}

	/// Returns how many listeners are registered for the given event.
	pub fn listener_count(&self, event_type: &EventType) -> usize {
		self.listeners
			.iter()
			.filter(|(registered, _)| registered == event_type)
			.count()
	}

	/// Synchronously invokes every listener registered for `event_type`, in
	/// registration order, and returns the invocation count.
	pub fn dispatch(&self, event_type: &EventType) -> usize {
		let mut invoked = 0;
		for (registered, handler) in &self.listeners {
			if registered == event_type {
				handler(Event::new(event_type.clone()));
				invoked += 1;
			}
		}
		invoked
	}
}

impl View {
	/// Creates an element node.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Pushes this view into a child list using host-tree append semantics:
	/// fragments splice their children, empty views disappear.
	pub(crate) fn append_into(self, children: &mut Vec<View>) {
		match self {
			View::Empty => {}
			View::Fragment(spliced) => children.extend(spliced),
			other => children.push(other),
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				if let Some(class) = el.class_attr() {
					output.push_str(" class=\"");
					output.push_str(&html_escape(&class));
					output.push('"');
				}
				if let Some(style) = el.style_attr() {
					output.push_str(" style=\"");
					output.push_str(&html_escape(&style));
					output.push('"');
				}

				for (name, value) in el.attrs() {
					// Skip boolean attributes with falsy values (empty, "false", "0")
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.children() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}
