//! The repeat directive: declarative list rendering.
//!
//! A [`Repeat`] pairs an item sequence with a per-item render function. The
//! factory materializes it into one fragment, invoking the render function
//! with `(item, index)` for every item in order. This is a one-shot
//! materialization — re-running the factory is the only "update".
//!
//! A single bad row never aborts the whole list: a failed item (a render
//! error, or an item that is not the type the render function expects) is
//! logged with its index and skipped, and every other item still renders.

use std::any::Any;
use std::fmt;

use crate::error::BuildError;
use crate::view::{IntoView, View};

/// Error raised by a single repeat item; isolated per item, never fatal.
pub type ItemError = Box<dyn std::error::Error + Send + Sync + 'static>;

type ErasedItem = Box<dyn Any + Send + Sync>;
type ErasedRender =
	Box<dyn Fn(&(dyn Any + Send + Sync), usize) -> Result<View, ItemError> + Send + Sync>;

/// Declarative list rendering: one rendered subtree per item.
///
/// Both halves are required; a directive missing either one fails the whole
/// construction call (see [`BuildError`]).
///
/// # Example
///
/// ```
/// use grappelli_pages::element::{create_element, Props, Repeat};
///
/// let view = create_element(
/// 	"ul",
/// 	Props::new().repeat(
/// 		Repeat::over(vec!["alpha", "beta"])
/// 			.render(|name: &&str, _| {
/// 				create_element("li", Props::new(), *name).unwrap()
/// 			}),
/// 	),
/// 	(),
/// )?;
/// assert_eq!(view.render_to_string(), "<li>alpha</li><li>beta</li>");
/// # Ok::<(), grappelli_pages::BuildError>(())
/// ```
#[derive(Default)]
pub struct Repeat {
	items: Option<Vec<ErasedItem>>,
	render: Option<ErasedRender>,
}

impl Repeat {
	/// Starts a directive over the given items.
	pub fn over<T, I>(items: I) -> Self
	where
		T: Send + Sync + 'static,
		I: IntoIterator<Item = T>,
	{
		Self {
			items: Some(
				items
					.into_iter()
					.map(|item| Box::new(item) as ErasedItem)
					.collect(),
			),
			render: None,
		}
	}

	/// Sets an infallible per-item render function.
	///
	/// Returning an empty view skips that item without error.
	pub fn render<T, V, F>(mut self, render: F) -> Self
	where
		T: Send + Sync + 'static,
		V: IntoView,
		F: Fn(&T, usize) -> V + Send + Sync + 'static,
	{
		self.render = Some(Box::new(move |item, index| {
			let item = downcast::<T>(item, index)?;
			Ok(render(item, index).into_view())
		}));
		self
	}

	/// Sets a fallible per-item render function.
	///
	/// An `Err` skips that item only; the rest of the list still renders.
	pub fn try_render<T, V, E, F>(mut self, render: F) -> Self
	where
		T: Send + Sync + 'static,
		V: IntoView,
		E: Into<ItemError>,
		F: Fn(&T, usize) -> Result<V, E> + Send + Sync + 'static,
	{
		self.render = Some(Box::new(move |item, index| {
			let item = downcast::<T>(item, index)?;
			render(item, index)
				.map(IntoView::into_view)
				.map_err(Into::into)
		}));
		self
	}

	/// Returns whether an item source has been set.
	pub fn has_items(&self) -> bool {
		self.items.is_some()
	}

	/// Returns whether a render function has been set.
	pub fn has_render(&self) -> bool {
		self.render.is_some()
	}

	/// Returns the number of items, or zero when no source is set.
	pub fn len(&self) -> usize {
		self.items.as_ref().map_or(0, Vec::len)
	}

	/// Returns whether the directive has no items.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Materializes the directive into a fragment.
	pub(crate) fn render_fragment(&self) -> Result<View, BuildError> {
		let items = self.items.as_ref().ok_or(BuildError::MissingRepeatItems)?;
		let render = self.render.as_ref().ok_or(BuildError::MissingRepeatRender)?;

		let mut rendered = Vec::with_capacity(items.len());
		for (index, item) in items.iter().enumerate() {
			match render(item.as_ref(), index) {
				Ok(view) => view.append_into(&mut rendered),
				Err(error) => {
					tracing::warn!(index, error = %error, "skipping repeat item that failed to render");
				}
			}
		}
		Ok(View::Fragment(rendered))
	}
}

impl fmt::Debug for Repeat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Repeat")
			.field("items", &self.len())
			.field("has_render", &self.has_render())
			.finish()
	}
}

fn downcast<T: 'static>(item: &(dyn Any + Send + Sync), index: usize) -> Result<&T, ItemError> {
	item.downcast_ref::<T>().ok_or_else(|| {
		format!(
			"repeat item {index} is not a {}",
			std::any::type_name::<T>()
		)
		.into()
	})
}
