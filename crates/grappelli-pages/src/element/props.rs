//! Property map and the applicator that writes it onto an element.
//!
//! Properties are an ordered `(key, value)` mapping. Each value is already
//! classified into a [`PropValue`] variant, and application dispatches on the
//! key/variant pair: `class`/`className` write the class list, `on…` keys with
//! handler values register listeners, `style` merges declarations, anything
//! else is a plain attribute. A repeat directive is never applied here — the
//! factory consumes it before the applicator runs.
//!
//! Application is best-effort per entry: a malformed entry (a handler under a
//! non-event key, a style block under the wrong key) is logged and skipped,
//! and every remaining entry is still applied.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::callback::IntoEventHandler;
use crate::view::event::EventType;
use crate::view::Element;

use super::repeat::Repeat;

/// An ordered block of style declarations.
///
/// Setting a property that is already declared overwrites it in place;
/// unrelated declarations keep their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDecls {
	decls: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl StyleDecls {
	/// Creates an empty declaration block.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or overwrites a declaration, chaining.
	pub fn decl(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.set(name, value);
		self
	}

	/// Adds or overwrites a declaration.
	pub fn set(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		let name = name.into();
		let value = value.into();
		if let Some(slot) = self.decls.iter_mut().find(|(existing, _)| *existing == name) {
			slot.1 = value;
		} else {
			self.decls.push((name, value));
		}
	}

	/// Returns the value declared for a property, if any.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.decls
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_ref())
	}

	/// Iterates the declarations in order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.decls
			.iter()
			.map(|(name, value)| (name.as_ref(), value.as_ref()))
	}

	/// Returns whether the block has no declarations.
	pub fn is_empty(&self) -> bool {
		self.decls.is_empty()
	}

	/// Returns the number of declarations.
	pub fn len(&self) -> usize {
		self.decls.len()
	}
}

impl<N, V> FromIterator<(N, V)> for StyleDecls
where
	N: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
		let mut decls = Self::new();
		for (name, value) in iter {
			decls.set(name, value);
		}
		decls
	}
}

/// A property value, classified for dispatch.
pub enum PropValue {
	/// Plain text attribute value.
	Text(Cow<'static, str>),
	/// Numeric attribute value; serialized through its natural display form.
	Number(f64),
	/// Boolean attribute value.
	Flag(bool),
	/// An ordered sequence of class tokens.
	Classes(Vec<Cow<'static, str>>),
	/// A style declaration block.
	Style(StyleDecls),
	/// An event handler.
	Handler(crate::view::EventHandler),
	/// The list-rendering directive; consumed by the factory, never applied here.
	Repeat(Repeat),
}

impl PropValue {
	/// Builds a class-token sequence value.
	pub fn classes<I, T>(tokens: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Cow<'static, str>>,
	{
		PropValue::Classes(tokens.into_iter().map(Into::into).collect())
	}

	/// Builds a handler value from anything convertible to an event handler.
	pub fn handler(handler: impl IntoEventHandler) -> Self {
		PropValue::Handler(handler.into_event_handler())
	}

	fn kind(&self) -> &'static str {
		match self {
			PropValue::Text(_) => "text",
			PropValue::Number(_) => "number",
			PropValue::Flag(_) => "flag",
			PropValue::Classes(_) => "classes",
			PropValue::Style(_) => "style",
			PropValue::Handler(_) => "handler",
			PropValue::Repeat(_) => "repeat",
		}
	}
}

impl fmt::Debug for PropValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PropValue::Text(value) => f.debug_tuple("Text").field(value).finish(),
			PropValue::Number(value) => f.debug_tuple("Number").field(value).finish(),
			PropValue::Flag(value) => f.debug_tuple("Flag").field(value).finish(),
			PropValue::Classes(tokens) => f.debug_tuple("Classes").field(tokens).finish(),
			PropValue::Style(decls) => f.debug_tuple("Style").field(decls).finish(),
			PropValue::Handler(_) => f.write_str("Handler(<function>)"),
			PropValue::Repeat(directive) => f.debug_tuple("Repeat").field(directive).finish(),
		}
	}
}

impl From<&'static str> for PropValue {
	fn from(value: &'static str) -> Self {
		PropValue::Text(Cow::Borrowed(value))
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		PropValue::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for PropValue {
	fn from(value: Cow<'static, str>) -> Self {
		PropValue::Text(value)
	}
}

impl From<f64> for PropValue {
	fn from(value: f64) -> Self {
		PropValue::Number(value)
	}
}

impl From<i32> for PropValue {
	fn from(value: i32) -> Self {
		PropValue::Number(f64::from(value))
	}
}

impl From<u32> for PropValue {
	fn from(value: u32) -> Self {
		PropValue::Number(f64::from(value))
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		PropValue::Flag(value)
	}
}

impl From<StyleDecls> for PropValue {
	fn from(value: StyleDecls) -> Self {
		PropValue::Style(value)
	}
}

impl From<Repeat> for PropValue {
	fn from(value: Repeat) -> Self {
		PropValue::Repeat(value)
	}
}

/// An ordered property mapping for the element factory.
///
/// Entries apply in insertion order. The convenience methods insert under the
/// conventional keys (`class`, `style`, `on<event>`); [`Props::entry`] accepts
/// any key for generic attributes or externally assembled values.
#[derive(Debug, Default)]
pub struct Props {
	entries: Vec<(Cow<'static, str>, PropValue)>,
}

impl Props {
	/// Creates an empty property map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an entry under an explicit key.
	pub fn entry(
		mut self,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<PropValue>,
	) -> Self {
		self.entries.push((key.into(), value.into()));
		self
	}

	/// Inserts a plain attribute.
	pub fn attr(
		self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<PropValue>,
	) -> Self {
		self.entry(name, value)
	}

	/// Sets the class attribute from a single opaque token.
	pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
		self.entry("class", PropValue::Text(class.into()))
	}

	/// Sets the class attribute from an ordered token sequence.
	pub fn classes<I, T>(self, tokens: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Cow<'static, str>>,
	{
		self.entry("class", PropValue::classes(tokens))
	}

	/// Merges a style declaration block.
	pub fn style(self, decls: StyleDecls) -> Self {
		self.entry("style", PropValue::Style(decls))
	}

	/// Registers an event handler from a closure.
	pub fn on<F>(self, event: impl Into<EventType>, handler: F) -> Self
	where
		F: Fn(crate::view::Event) + Send + Sync + 'static,
	{
		self.on_handler(event, Arc::new(handler) as crate::view::EventHandler)
	}

	/// Registers a pre-built event handler (a [`crate::callback::Callback`],
	/// an existing handler, or anything else convertible).
	pub fn on_handler(self, event: impl Into<EventType>, handler: impl IntoEventHandler) -> Self {
		let event = event.into();
		let key = Cow::Owned(format!("on{}", event.as_str()));
		self.entry(key, PropValue::Handler(handler.into_event_handler()))
	}

	/// Attaches a repeat directive. The factory consumes it; the applicator
	/// never touches it.
	pub fn repeat(self, directive: Repeat) -> Self {
		self.entry("repeat", PropValue::Repeat(directive))
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.entries
			.iter()
			.find(|(existing, _)| existing == key)
			.map(|(_, value)| value)
	}

	/// Returns whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns the repeat directive, if one is attached under any key.
	pub(crate) fn repeat_directive(&self) -> Option<&Repeat> {
		self.entries.iter().find_map(|(_, value)| match value {
			PropValue::Repeat(directive) => Some(directive),
			_ => None,
		})
	}

	/// Applies every entry to `element`, in order, isolating failures per
	/// entry: a malformed entry is logged and skipped, the rest still apply.
	pub(crate) fn apply_to(&self, element: &mut Element) {
		for (key, value) in &self.entries {
			apply_entry(element, key, value);
		}
	}
}

fn apply_entry(element: &mut Element, key: &Cow<'static, str>, value: &PropValue) {
	if matches!(value, PropValue::Repeat(_)) {
		// Factory-only; not an element property.
		return;
	}
	match key.as_ref() {
		"class" | "className" => apply_class(element, key, value),
		"style" => apply_style(element, key, value),
		_ => {
			if let Some(event_type) = EventType::from_prop_key(key) {
				if let PropValue::Handler(handler) = value {
					element.add_listener(event_type, Arc::clone(handler));
					return;
				}
				// An `on…` key without a handler value is a plain attribute.
			}
			apply_attr(element, key, value);
		}
	}
}

fn apply_class(element: &mut Element, key: &Cow<'static, str>, value: &PropValue) {
	let tokens = match value {
		// A plain string is one opaque token; no whitespace splitting.
		PropValue::Text(token) => vec![token.clone()],
		PropValue::Classes(tokens) => tokens.clone(),
		PropValue::Number(n) => vec![Cow::Owned(n.to_string())],
		PropValue::Flag(b) => vec![Cow::Owned(b.to_string())],
		other => {
			tracing::warn!(
				key = %key,
				value_kind = other.kind(),
				"class property expects a token or token sequence; skipping"
			);
			return;
		}
	};
	element.set_class_tokens(tokens);
}

fn apply_style(element: &mut Element, key: &Cow<'static, str>, value: &PropValue) {
	match value {
		PropValue::Style(decls) => {
			for (name, decl_value) in decls.iter() {
				element.set_style_decl(name.to_owned(), decl_value.to_owned());
			}
		}
		other => {
			tracing::warn!(
				key = %key,
				value_kind = other.kind(),
				"style property expects a declaration block; skipping"
			);
		}
	}
}

fn apply_attr(element: &mut Element, key: &Cow<'static, str>, value: &PropValue) {
	let coerced: Cow<'static, str> = match value {
		PropValue::Text(text) => text.clone(),
		PropValue::Number(n) => Cow::Owned(n.to_string()),
		PropValue::Flag(b) => Cow::Owned(b.to_string()),
		other => {
			tracing::warn!(
				key = %key,
				value_kind = other.kind(),
				"property value cannot be written as an attribute; skipping"
			);
			return;
		}
	};
	element.set_attr(key.clone(), coerced);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::Event;
	use std::sync::Arc as StdArc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn applied(props: Props) -> Element {
		let mut element = Element::new("div");
		props.apply_to(&mut element);
		element
	}

	#[test]
	fn test_class_string_is_one_opaque_token() {
		let el = applied(Props::new().class("btn btn-primary"));
		assert_eq!(el.class_tokens().len(), 1);
		assert_eq!(el.class_attr().as_deref(), Some("btn btn-primary"));
	}

	#[test]
	fn test_class_sequence_joins_in_order() {
		let el = applied(Props::new().classes(["a", "b"]));
		assert_eq!(el.class_attr().as_deref(), Some("a b"));
	}

	#[test]
	fn test_class_name_alias() {
		let el = applied(Props::new().entry("className", "badge"));
		assert_eq!(el.class_attr().as_deref(), Some("badge"));
	}

	#[test]
	fn test_later_class_entry_replaces_earlier() {
		let el = applied(Props::new().class("old").classes(["new", "tokens"]));
		assert_eq!(el.class_attr().as_deref(), Some("new tokens"));
	}

	#[test]
	fn test_style_merges_per_property() {
		let first: StyleDecls = [("color", "red"), ("margin", "0")].into_iter().collect();
		let second: StyleDecls = [("color", "blue")].into_iter().collect();
		let el = applied(Props::new().style(first).style(second));
		assert_eq!(el.style_decl("color"), Some("blue"));
		assert_eq!(el.style_decl("margin"), Some("0"));
	}

	#[test]
	fn test_on_key_registers_listener() {
		let invoked = StdArc::new(AtomicUsize::new(0));
		let el = applied(Props::new().on(EventType::Click, {
			let invoked = StdArc::clone(&invoked);
			move |_| {
				invoked.fetch_add(1, Ordering::SeqCst);
			}
		}));
		assert_eq!(el.dispatch(&EventType::Click), 1);
		assert_eq!(invoked.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_duplicate_event_entries_both_register() {
		let el = applied(
			Props::new()
				.on(EventType::Click, |_| {})
				.on(EventType::Click, |_| {}),
		);
		assert_eq!(el.listener_count(&EventType::Click), 2);
	}

	#[test]
	fn test_custom_event_key_is_lowercased() {
		let el = applied(Props::new().entry("onCustomThing", PropValue::handler(|_: Event| {})));
		assert_eq!(el.listener_count(&EventType::from("customthing")), 1);
	}

	#[test]
	fn test_on_key_with_text_value_is_plain_attribute() {
		let el = applied(Props::new().entry("onClick", "not-a-handler"));
		assert_eq!(el.attr("onClick"), Some("not-a-handler"));
		assert_eq!(el.listener_count(&EventType::Click), 0);
	}

	#[test]
	fn test_generic_attrs_coerce_scalars() {
		let el = applied(
			Props::new()
				.attr("id", "main")
				.attr("tabindex", 3)
				.attr("data-ratio", 1.5)
				.attr("draggable", true),
		);
		assert_eq!(el.attr("id"), Some("main"));
		assert_eq!(el.attr("tabindex"), Some("3"));
		assert_eq!(el.attr("data-ratio"), Some("1.5"));
		assert_eq!(el.attr("draggable"), Some("true"));
	}

	#[test]
	fn test_malformed_entry_does_not_abort_the_rest() {
		// A handler under a non-event key is skipped; later entries still apply.
		let el = applied(
			Props::new()
				.entry("title", PropValue::handler(|_: Event| {}))
				.attr("id", "kept"),
		);
		assert_eq!(el.attr("title"), None);
		assert_eq!(el.attr("id"), Some("kept"));
	}

	#[test]
	fn test_style_under_wrong_key_is_skipped() {
		let decls: StyleDecls = [("color", "red")].into_iter().collect();
		let el = applied(Props::new().entry("data-style", PropValue::Style(decls)));
		assert_eq!(el.attr("data-style"), None);
		assert!(el.style_decls().is_empty());
	}

	#[test]
	fn test_repeat_entry_is_never_applied() {
		let el = applied(Props::new().repeat(Repeat::over(vec![1, 2])));
		assert!(el.attrs().is_empty());
		assert!(el.children().is_empty());
	}

	#[test]
	fn test_style_decls_last_write_wins() {
		let decls = StyleDecls::new()
			.decl("color", "red")
			.decl("color", "green");
		assert_eq!(decls.len(), 1);
		assert_eq!(decls.get("color"), Some("green"));
	}
}
