//! Content values accepted by the factory and their normalization.
//!
//! The factory's `content` argument is deliberately permissive: nothing,
//! a string, an existing view, a scalar, or an ordered mix of all of these.
//! Normalization flattens that into a sequence of appendable items — strings
//! become text nodes, scalars take their display form, empty strings and
//! empty views drop silently, and order is always preserved.

use std::borrow::Cow;

use crate::builder::ElementBuilder;
use crate::view::{Element, IntoView, View};

/// The content argument of the factory.
#[derive(Debug, Default)]
pub enum Content {
	/// No content.
	#[default]
	Empty,
	/// A run of text.
	Text(Cow<'static, str>),
	/// An existing view.
	Node(View),
	/// An ordered mix of content items.
	List(Vec<Content>),
}

impl Content {
	/// Creates text content.
	pub fn text(value: impl Into<Cow<'static, str>>) -> Self {
		Content::Text(value.into())
	}

	/// Creates node content from anything renderable.
	pub fn node(view: impl IntoView) -> Self {
		Content::Node(view.into_view())
	}

	/// Creates an ordered content list.
	pub fn list(items: impl IntoIterator<Item = impl Into<Content>>) -> Self {
		Content::List(items.into_iter().map(Into::into).collect())
	}

	/// Appends the normalized items onto `parent`, in order.
	///
	/// Empty strings and empty views are dropped without error. Nested lists
	/// flatten in iteration order. Fragments splice their children, matching
	/// host-tree append semantics.
	pub(crate) fn append_to(self, parent: &mut Element) {
		match self {
			Content::Empty => {}
			Content::Text(text) if text.is_empty() => {}
			Content::Text(text) => parent.append_child(View::Text(text)),
			Content::Node(view) => parent.append_child(view),
			Content::List(items) => {
				for item in items {
					item.append_to(parent);
				}
			}
		}
	}
}

impl From<&'static str> for Content {
	fn from(value: &'static str) -> Self {
		Content::Text(Cow::Borrowed(value))
	}
}

impl From<String> for Content {
	fn from(value: String) -> Self {
		Content::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for Content {
	fn from(value: Cow<'static, str>) -> Self {
		Content::Text(value)
	}
}

impl From<View> for Content {
	fn from(value: View) -> Self {
		Content::Node(value)
	}
}

impl From<Element> for Content {
	fn from(value: Element) -> Self {
		Content::Node(View::Element(value))
	}
}

impl From<ElementBuilder> for Content {
	fn from(value: ElementBuilder) -> Self {
		Content::Node(value.into_view())
	}
}

impl From<i32> for Content {
	fn from(value: i32) -> Self {
		Content::Text(Cow::Owned(value.to_string()))
	}
}

impl From<i64> for Content {
	fn from(value: i64) -> Self {
		Content::Text(Cow::Owned(value.to_string()))
	}
}

impl From<u32> for Content {
	fn from(value: u32) -> Self {
		Content::Text(Cow::Owned(value.to_string()))
	}
}

impl From<f64> for Content {
	fn from(value: f64) -> Self {
		Content::Text(Cow::Owned(value.to_string()))
	}
}

impl From<bool> for Content {
	fn from(value: bool) -> Self {
		Content::Text(Cow::Owned(value.to_string()))
	}
}

impl From<()> for Content {
	fn from(_: ()) -> Self {
		Content::Empty
	}
}

impl<C: Into<Content>> From<Option<C>> for Content {
	fn from(value: Option<C>) -> Self {
		match value {
			Some(inner) => inner.into(),
			None => Content::Empty,
		}
	}
}

impl<C: Into<Content>> From<Vec<C>> for Content {
	fn from(value: Vec<C>) -> Self {
		Content::List(value.into_iter().map(Into::into).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn appended(content: Content) -> Element {
		let mut parent = Element::new("div");
		content.append_to(&mut parent);
		parent
	}

	#[test]
	fn test_empty_content_appends_nothing() {
		assert!(appended(Content::Empty).children().is_empty());
		assert!(appended(Content::from("")).children().is_empty());
		assert!(appended(Content::from(None::<String>)).children().is_empty());
	}

	#[test]
	fn test_string_is_one_text_node() {
		let parent = appended(Content::from("hello world"));
		assert_eq!(parent.children().len(), 1);
		assert!(matches!(&parent.children()[0], View::Text(text) if text == "hello world"));
	}

	#[test]
	fn test_scalars_coerce_to_text() {
		assert_eq!(
			appended(Content::from(42)).children().len(),
			1
		);
		let parent = appended(Content::list([Content::from(3.0), Content::from(true)]));
		assert!(matches!(&parent.children()[0], View::Text(text) if text == "3"));
		assert!(matches!(&parent.children()[1], View::Text(text) if text == "true"));
	}

	#[test]
	fn test_mixed_list_preserves_order() {
		let node = View::Element(Element::new("span"));
		let parent = appended(Content::list([
			Content::from("x"),
			Content::Node(node),
			Content::from("y"),
		]));
		assert_eq!(parent.children().len(), 3);
		assert!(matches!(&parent.children()[0], View::Text(text) if text == "x"));
		assert!(matches!(&parent.children()[1], View::Element(el) if el.tag_name() == "span"));
		assert!(matches!(&parent.children()[2], View::Text(text) if text == "y"));
	}

	#[test]
	fn test_list_drops_empty_entries_silently() {
		let parent = appended(Content::list([
			Content::from("a"),
			Content::Empty,
			Content::from(""),
			Content::from("b"),
		]));
		assert_eq!(parent.children().len(), 2);
	}

	#[test]
	fn test_nested_lists_flatten_in_order() {
		let parent = appended(Content::list([
			Content::from("a"),
			Content::list([Content::from("b"), Content::from("c")]),
			Content::from("d"),
		]));
		assert_eq!(parent.children().len(), 4);
	}

	#[test]
	fn test_fragment_content_splices() {
		let fragment = View::fragment(["a", "b"]);
		let parent = appended(Content::Node(fragment));
		assert_eq!(parent.children().len(), 2);
	}
}
