//! Element options
//!
//! [`ElementOptions`] is the configuration bag passed to every element
//! constructor. Its four facets are applied independently:
//!
//! - attributes (`class` goes to the class-list facet)
//! - inline styles
//! - event listeners
//! - text content, prepended as a single text node

use std::fmt;
use std::rc::Rc;

use crate::dom::{Event, EventHandler};

/// Most elements have 0-2 event listeners in practice
const TYPICAL_EVENT_COUNT: usize = 2;

/// Configuration applied to a freshly created element
///
/// Attributes and styles behave as insertion-ordered maps: setting a key
/// again replaces its value without moving it. Events are a plain list, so
/// every handler registered becomes its own listener.
///
/// ## Example
///
/// ```
/// use minivan_pages::builder::ElementOptions;
///
/// let options = ElementOptions::new()
///     .class("btn btn-primary")
///     .id("submit")
///     .style("margin-top", "4px")
///     .on_click(|_| {})
///     .content("Submit");
///
/// assert_eq!(options.attributes().len(), 2);
/// ```
#[derive(Clone)]
pub struct ElementOptions {
	attributes: Vec<(String, String)>,
	styles: Vec<(String, String)>,
	events: Vec<(String, EventHandler)>,
	content: Option<String>,
}

impl Default for ElementOptions {
	fn default() -> Self {
		Self {
			attributes: Vec::new(),
			styles: Vec::new(),
			events: Vec::with_capacity(TYPICAL_EVENT_COUNT),
			content: None,
		}
	}
}

impl ElementOptions {
	/// Empty options: a bare element
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an attribute
	///
	/// The `class` key is applied to the class-list facet instead of going
	/// through the generic attribute setter.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		insert_ordered(&mut self.attributes, name.into(), value.into());
		self
	}

	/// Set the class list (space-separated)
	pub fn class(self, class: impl Into<String>) -> Self {
		self.attr("class", class)
	}

	/// Set the id attribute
	pub fn id(self, id: impl Into<String>) -> Self {
		self.attr("id", id)
	}

	/// Set one inline style property
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::builder::ElementOptions;
	///
	/// let options = ElementOptions::new().style("color", "red");
	/// assert_eq!(options.styles()[0], ("color".to_string(), "red".to_string()));
	/// ```
	pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		insert_ordered(&mut self.styles, property.into(), value.into());
		self
	}

	/// Add an event listener for any event type
	///
	/// Handlers for the same type accumulate and fire in registration order.
	///
	/// # Arguments
	///
	/// * `event_type` - event type (e.g., "click", "mouseenter")
	/// * `handler` - called with the dispatched [`Event`]
	pub fn on<F>(mut self, event_type: impl Into<String>, handler: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		let handler: EventHandler = Rc::new(handler);
		self.events.push((event_type.into(), handler));
		self
	}

	/// Add a click event listener
	#[inline]
	pub fn on_click<F>(self, handler: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("click", handler)
	}

	/// Add an input event listener
	#[inline]
	pub fn on_input<F>(self, handler: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("input", handler)
	}

	/// Add a change event listener
	#[inline]
	pub fn on_change<F>(self, handler: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("change", handler)
	}

	/// Add a submit event listener
	#[inline]
	pub fn on_submit<F>(self, handler: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("submit", handler)
	}

	/// Set the content text
	///
	/// The content is used verbatim, followed by the concatenated text of
	/// the element's children, as one leading text node. `{name}` markers
	/// are NOT substituted; render them first with
	/// [`interpolate_named`](minivan_core::interpolate_named) if needed.
	/// An empty string adds no text node.
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Attributes in insertion order
	pub fn attributes(&self) -> &[(String, String)] {
		&self.attributes
	}

	/// Styles in insertion order
	pub fn styles(&self) -> &[(String, String)] {
		&self.styles
	}

	/// Event type of every registered handler, in insertion order
	pub fn event_types(&self) -> impl Iterator<Item = &str> {
		self.events.iter().map(|(name, _)| name.as_str())
	}

	/// The content text, if set
	pub fn content_text(&self) -> Option<&str> {
		self.content.as_deref()
	}

	pub(crate) fn into_parts(self) -> OptionParts {
		OptionParts {
			attributes: self.attributes,
			styles: self.styles,
			events: self.events,
			content: self.content,
		}
	}
}

impl fmt::Debug for ElementOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementOptions")
			.field("attributes", &self.attributes)
			.field("styles", &self.styles)
			.field("events", &self.event_types().collect::<Vec<_>>())
			.field("content", &self.content)
			.finish()
	}
}

/// Owned facets, consumed by the builder
pub(crate) struct OptionParts {
	pub(crate) attributes: Vec<(String, String)>,
	pub(crate) styles: Vec<(String, String)>,
	pub(crate) events: Vec<(String, EventHandler)>,
	pub(crate) content: Option<String>,
}

fn insert_ordered(entries: &mut Vec<(String, String)>, key: String, value: String) {
	match entries.iter_mut().find(|(existing, _)| *existing == key) {
		Some((_, existing)) => *existing = value,
		None => entries.push((key, value)),
	}
}
