//! IntoView trait: the conversion ladder into the view tree.

use std::borrow::Cow;

use super::{Element, View};

/// Trait for types that can be converted into a [`View`].
///
/// This is the primary abstraction for renderable content. Implementing this
/// trait allows any type to be used wherever the tree accepts children.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

// Core implementations

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for Element {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self.clone()))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for Cow<'static, str> {
	fn into_view(self) -> View {
		View::Text(self)
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

// Tuple implementations for fragments

impl<A: IntoView, B: IntoView> IntoView for (A, B) {
	fn into_view(self) -> View {
		View::Fragment(vec![self.0.into_view(), self.1.into_view()])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView> IntoView for (A, B, C) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
		])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView, D: IntoView> IntoView for (A, B, C, D) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
			self.3.into_view(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_into_view_string() {
		let view = "Hello".into_view();
		assert_eq!(view.render_to_string(), "Hello");
	}

	#[test]
	fn test_into_view_option_some() {
		let view: View = Some("Hello").into_view();
		assert_eq!(view.render_to_string(), "Hello");
	}

	#[test]
	fn test_into_view_option_none() {
		let view: View = None::<String>.into_view();
		assert_eq!(view.render_to_string(), "");
	}

	#[test]
	fn test_into_view_vec() {
		let view = vec!["A", "B", "C"].into_view();
		assert_eq!(view.render_to_string(), "ABC");
	}

	#[test]
	fn test_into_view_tuple() {
		let view = ("Hello, ", "World!").into_view();
		assert_eq!(view.render_to_string(), "Hello, World!");
	}

	#[test]
	fn test_into_view_element() {
		let view = Element::new("div").into_view();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[test]
	fn test_into_view_unit() {
		let view = ().into_view();
		assert!(matches!(view, View::Empty));
	}
}
