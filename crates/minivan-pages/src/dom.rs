//! Rendering surface abstraction
//!
//! The element builder never talks to a concrete UI toolkit. It drives two
//! traits instead:
//!
//! - [`Surface`]: the node factory plus the selector query used for mounting
//! - [`NodeHandle`]: the per-node operations (attributes, styles, listeners,
//!   children)
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryDocument`]: an in-memory tree, used for tests and server-side
//!   construction
//! - `WebSurface` (wasm32 only): the browser DOM through `web-sys`

pub mod memory;
pub mod selector;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::fmt;
use std::rc::Rc;

pub use memory::{MemoryDocument, MemoryNode};
pub use selector::{Selector, SelectorError};
#[cfg(target_arch = "wasm32")]
pub use web::{WebNode, WebSurface};

/// An event delivered to a listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	event_type: String,
}

impl Event {
	/// Create an event of the given type (e.g. `"click"`)
	pub fn new(event_type: impl Into<String>) -> Self {
		Self {
			event_type: event_type.into(),
		}
	}

	/// The event type name
	pub fn event_type(&self) -> &str {
		&self.event_type
	}
}

/// Listener callback registered on a node
///
/// `Rc` rather than `Arc`: listeners run on the surface's UI thread only.
pub type EventHandler = Rc<dyn Fn(&Event) + 'static>;

/// Errors raised by a rendering surface
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
	/// The surface refused to create a node
	#[error("failed to create <{tag}> element: {reason}")]
	CreateElement {
		/// Requested tag
		tag: String,
		/// Surface-specific explanation
		reason: String,
	},

	/// The selector could not be parsed
	#[error("invalid selector: {0}")]
	InvalidSelector(#[from] SelectorError),

	/// The surface refused an attribute
	#[error("failed to set attribute `{name}`: {reason}")]
	SetAttribute {
		/// Attribute name
		name: String,
		/// Surface-specific explanation
		reason: String,
	},

	/// The surface refused to attach a child
	#[error("failed to append child: {0}")]
	AppendChild(String),

	/// The surface itself is missing (no window, no document)
	#[error("rendering surface unavailable: {0}")]
	Unavailable(String),
}

/// Operations on a single node of a rendering surface
///
/// Handles are cheap references into the surface's tree; cloning one does not
/// clone the node.
pub trait NodeHandle: Clone + fmt::Debug {
	/// Set a generic attribute
	///
	/// # Errors
	///
	/// Returns [`SurfaceError::SetAttribute`] if the surface rejects the
	/// name, or the node cannot carry attributes.
	fn set_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError>;

	/// Set the class-list facet (the whole space-separated list at once)
	fn set_class_name(&self, value: &str);

	/// Set one inline style property
	///
	/// The surface decides whether an unknown property is kept or dropped.
	fn set_style_property(&self, property: &str, value: &str);

	/// Register a listener; every call adds one more listener
	fn add_event_listener(&self, event: &str, handler: EventHandler);

	/// Attach `child` as the last child of this node
	///
	/// A child that already has a parent is moved.
	///
	/// # Errors
	///
	/// Returns [`SurfaceError::AppendChild`] if the surface refuses the
	/// operation (e.g. text nodes cannot have children).
	fn append_child(&self, child: &Self) -> Result<(), SurfaceError>;

	/// Concatenated text of this node and its descendants
	fn text_content(&self) -> String;
}

/// A rendering surface: node factory plus tree query
pub trait Surface {
	/// Handle type for nodes on this surface
	type Node: NodeHandle;

	/// Create a detached element node of kind `tag`
	///
	/// # Errors
	///
	/// Returns [`SurfaceError::CreateElement`] when the surface cannot create
	/// the node. This is an environment failure and is not recovered.
	fn create_element(&self, tag: &str) -> Result<Self::Node, SurfaceError>;

	/// Create a detached text node
	fn create_text_node(&self, text: &str) -> Self::Node;

	/// First node in document order matching `selector`
	///
	/// # Errors
	///
	/// Returns [`SurfaceError::InvalidSelector`] when the selector cannot be
	/// parsed.
	fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, SurfaceError>;
}
