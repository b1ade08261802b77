//! Error types for element construction.

use thiserror::Error;

/// Failures that abort a single construction call.
///
/// Only structural misuse lands here. Malformed individual properties and
/// failed repeat items are recovered locally — logged and skipped — so that
/// one bad entry never blanks a whole tree.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	/// The tag argument was empty.
	#[error("element tag must not be empty")]
	EmptyTag,
	/// A repeat directive was given without an item source.
	#[error("repeat directive has no item source")]
	MissingRepeatItems,
	/// A repeat directive was given without a render function.
	#[error("repeat directive has no render function")]
	MissingRepeatRender,
}
