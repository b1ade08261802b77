//! Integration tests for the fluent builder surface.

use grappelli_pages::builder::{ChildSpec, div, form, input, label, ul};
use grappelli_pages::callback::Callback;
use grappelli_pages::element::{Props, Repeat};
use grappelli_pages::view::{Event, EventType, View};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn composes_a_small_form() {
	let submitted = Arc::new(AtomicUsize::new(0));
	let el = form()
		.class("login")
		.attr("method", "post")
		.child(label().attr("for", "phone").text("Phone"))
		.child(input().id("phone").attr("type", "tel"))
		.on_submit({
			let submitted = Arc::clone(&submitted);
			move |_| {
				submitted.fetch_add(1, Ordering::SeqCst);
			}
		})
		.build();

	assert_eq!(
		View::Element(el).render_to_string(),
		"<form class=\"login\" method=\"post\">\
		 <label for=\"phone\">Phone</label>\
		 <input id=\"phone\" type=\"tel\" /></form>"
	);
}

#[test]
fn dispatch_reaches_handlers_registered_through_the_builder() {
	let clicks = Arc::new(AtomicUsize::new(0));
	let el = div()
		.on_click({
			let clicks = Arc::clone(&clicks);
			move |_| {
				clicks.fetch_add(1, Ordering::SeqCst);
			}
		})
		.build();
	assert_eq!(el.dispatch(&EventType::Click), 1);
	assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn callbacks_plug_in_through_on_handler() {
	let seen = Arc::new(AtomicUsize::new(0));
	let callback = Callback::new({
		let seen = Arc::clone(&seen);
		move |_: Event| {
			seen.fetch_add(1, Ordering::SeqCst);
		}
	});

	let el = div()
		.on_handler(EventType::Click, callback.clone())
		.on_handler("mouseenter", callback)
		.build();

	el.dispatch(&EventType::Click);
	el.dispatch(&EventType::from("mouseenter"));
	assert_eq!(seen.load(Ordering::SeqCst), 2);
}

#[test]
fn add_element_builds_children_of_the_same_kind() {
	let el = ul()
		.add_element(Props::new().class("item"), "one")
		.add_element(Props::new().class("item"), "two")
		.build();

	assert_eq!(el.children().len(), 2);
	for child in el.children() {
		let View::Element(child) = child else {
			panic!("expected an element child");
		};
		assert_eq!(child.tag_name(), "ul");
		assert_eq!(child.class_attr().as_deref(), Some("item"));
	}
}

#[test]
fn add_elements_survives_bad_entries() {
	let el = div()
		.add_elements([
			ChildSpec::element("p", Props::new(), "kept"),
			ChildSpec::element("", Props::new(), "dropped"),
			ChildSpec::node(View::Empty),
			ChildSpec::node(View::text("tail")),
		])
		.build();

	assert_eq!(el.children().len(), 2);
	assert_eq!(
		View::Element(el).render_to_string(),
		"<div><p>kept</p>tail</div>"
	);
}

#[test]
fn add_element_with_repeat_props_splices_rendered_rows() {
	let el = ul()
		.add_element(
			Props::new().repeat(Repeat::over(vec!["a", "b"]).render(|item: &&str, _| {
				grappelli_pages::create_element(
					"li",
					Props::new(),
					*item,
				)
				.unwrap()
			})),
			(),
		)
		.build();

	// The directive produced a fragment, so the rows land directly in the list.
	assert_eq!(
		View::Element(el).render_to_string(),
		"<ul><li>a</li><li>b</li></ul>"
	);
}

#[test]
fn update_props_accumulates_listeners() {
	let first = Arc::new(AtomicUsize::new(0));
	let second = Arc::new(AtomicUsize::new(0));

	let el = div()
		.on_click({
			let first = Arc::clone(&first);
			move |_| {
				first.fetch_add(1, Ordering::SeqCst);
			}
		})
		.update_props(Props::new().on(EventType::Click, {
			let second = Arc::clone(&second);
			move |_| {
				second.fetch_add(1, Ordering::SeqCst);
			}
		}))
		.build();

	assert_eq!(el.dispatch(&EventType::Click), 2);
	assert_eq!(first.load(Ordering::SeqCst), 1);
	assert_eq!(second.load(Ordering::SeqCst), 1);
}
