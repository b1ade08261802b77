//! Element construction: the factory that turns `(tag, props, content)`
//! descriptions into view trees.
//!
//! [`create_element`] is the single entry point the rest of the framework
//! composes through. It validates the tag, short-circuits to list rendering
//! when a [`Repeat`] directive is present, and otherwise builds one element
//! by applying properties and appending normalized content.
//!
//! ## Failure policy
//!
//! Structural misuse — an empty tag, a half-configured repeat directive — is
//! a fatal [`BuildError`] for that call. Everything narrower is recovered
//! locally: a malformed property or a failing repeat item is logged and
//! skipped while the rest of the call completes.

mod content;
mod props;
mod repeat;

pub use content::Content;
pub use props::{PropValue, Props, StyleDecls};
pub use repeat::{ItemError, Repeat};

use std::borrow::Cow;

use crate::error::BuildError;
use crate::view::{Element, View};

/// Builds a detached view from a tag name, properties, and content.
///
/// Returns a single [`View::Element`] in the common case. When `props`
/// carries a [`Repeat`] directive the call returns a [`View::Fragment`] with
/// one rendered subtree per item instead, and `content` is ignored — the
/// rendered items carry their own content.
///
/// # Errors
///
/// - [`BuildError::EmptyTag`] when `tag` is empty.
/// - [`BuildError::MissingRepeatItems`] / [`BuildError::MissingRepeatRender`]
///   when a repeat directive is present but half-configured.
///
/// # Example
///
/// ```
/// use grappelli_pages::element::{create_element, Props};
///
/// let view = create_element(
/// 	"button",
/// 	Props::new().class("primary").attr("type", "submit"),
/// 	"Save",
/// )?;
/// assert_eq!(
/// 	view.render_to_string(),
/// 	"<button class=\"primary\" type=\"submit\">Save</button>"
/// );
/// # Ok::<(), grappelli_pages::BuildError>(())
/// ```
pub fn create_element(
	tag: impl Into<Cow<'static, str>>,
	props: Props,
	content: impl Into<Content>,
) -> Result<View, BuildError> {
	let tag = tag.into();
	if tag.is_empty() {
		return Err(BuildError::EmptyTag);
	}

	// List mode: the directive describes the rendered items, not a wrapper.
	if let Some(directive) = props.repeat_directive() {
		return directive.render_fragment();
	}

	let mut element = Element::new(tag);
	props.apply_to(&mut element);
	content.into().append_to(&mut element);
	Ok(View::Element(element))
}
