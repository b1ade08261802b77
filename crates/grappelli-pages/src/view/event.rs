//! Event types and handler plumbing.
//!
//! Listeners are registered on elements under a typed [`EventType`] and
//! invoked synchronously by [`Element::dispatch`](crate::view::Element::dispatch).
//! The framework performs no asynchronous work of its own: dispatch happens
//! whenever the embedding application decides an event occurred.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A DOM-style event name, typed.
///
/// The common events carry their own variants; anything else round-trips
/// through [`EventType::Custom`] with its lowercased name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
	Click,
	Input,
	Change,
	Submit,
	Keydown,
	Keyup,
	Focus,
	Blur,
	MouseEnter,
	MouseLeave,
	/// Any other event, stored by its lowercased name.
	Custom(Cow<'static, str>),
}

impl EventType {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &str {
		match self {
			EventType::Click => "click",
			EventType::Input => "input",
			EventType::Change => "change",
			EventType::Submit => "submit",
			EventType::Keydown => "keydown",
			EventType::Keyup => "keyup",
			EventType::Focus => "focus",
			EventType::Blur => "blur",
			EventType::MouseEnter => "mouseenter",
			EventType::MouseLeave => "mouseleave",
			EventType::Custom(name) => name,
		}
	}

	/// Derives an event type from a property key of the `on...` form.
	///
	/// The event name is the remainder of the key, lowercased: `onClick`
	/// becomes `click`, `onCustomThing` becomes `customthing`. Returns `None`
	/// for keys that are not event keys (no `on` prefix, or nothing after it).
	pub fn from_prop_key(key: &str) -> Option<Self> {
		let rest = key.strip_prefix("on")?;
		if rest.is_empty() {
			return None;
		}
		Some(Self::from_name(&rest.to_ascii_lowercase()))
	}

	fn from_name(name: &str) -> Self {
		match name {
			"click" => EventType::Click,
			"input" => EventType::Input,
			"change" => EventType::Change,
			"submit" => EventType::Submit,
			"keydown" => EventType::Keydown,
			"keyup" => EventType::Keyup,
			"focus" => EventType::Focus,
			"blur" => EventType::Blur,
			"mouseenter" => EventType::MouseEnter,
			"mouseleave" => EventType::MouseLeave,
			other => EventType::Custom(Cow::Owned(other.to_owned())),
		}
	}
}

impl From<&str> for EventType {
	fn from(name: &str) -> Self {
		Self::from_name(&name.to_ascii_lowercase())
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The value passed to event handlers when an event is dispatched.
#[derive(Debug, Clone)]
pub struct Event {
	event_type: EventType,
}

impl Event {
	/// Creates an event of the given type.
	pub fn new(event_type: EventType) -> Self {
		Self { event_type }
	}

	/// Returns the type of this event.
	pub fn event_type(&self) -> &EventType {
		&self.event_type
	}

	/// No-op method for API compatibility with host events.
	pub fn prevent_default(&self) {}
}

/// Type alias for event handler functions.
pub type EventHandler = Arc<dyn Fn(Event) + Send + Sync + 'static>;
