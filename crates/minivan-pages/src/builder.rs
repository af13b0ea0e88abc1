//! Element builder
//!
//! [`Builder`] turns a tag, an [`ElementOptions`] bag and a list of
//! [`Child`]ren into a node on its rendering [`Surface`].
//!
//! ## Example
//!
//! ```
//! use minivan_pages::builder::{Builder, ElementOptions};
//! use minivan_pages::children;
//! use minivan_pages::dom::MemoryDocument;
//!
//! let builder = Builder::new(MemoryDocument::new());
//!
//! let item = builder
//!     .build("li", ElementOptions::new().class("item"), children!["first"])
//!     .unwrap();
//! let list = builder
//!     .build("ul", ElementOptions::new().id("items"), children![item])
//!     .unwrap();
//!
//! assert_eq!(
//!     list.handle().outer_html(),
//!     r#"<ul id="items"><li class="item">first</li></ul>"#
//! );
//! ```
//!
//! ## Ownership
//!
//! `build` returns a detached [`BuiltNode`]. Passing it as a child of another
//! element, to [`BuiltNode::append_child`], or to [`Builder::add`] moves it
//! into the surface's tree; from then on the parent node owns it.

mod child;
mod options;

pub use child::Child;
pub use options::ElementOptions;

pub(crate) use child::Leaf;

use minivan_core::{InterpolateError, interpolate};

use crate::debug_log;
use crate::diagnostics::{ConsoleDiagnostics, Diagnostics};
use crate::dom::{NodeHandle, Surface, SurfaceError};

/// Errors that abort element construction
///
/// Only environment failures end up here. An invalid child is reported to
/// the builder's [`Diagnostics`] and construction carries on.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// The rendering surface failed
	#[error(transparent)]
	Surface(#[from] SurfaceError),

	/// Content text could not be assembled
	///
	/// `build` always supplies both content values, so this only surfaces if
	/// the content layout and its value list fall out of step.
	#[error(transparent)]
	Interpolate(#[from] InterpolateError),
}

/// A constructed node not yet owned by any parent
///
/// Not `Clone`: a node has a single owner until it is attached.
#[must_use = "a built node does nothing until it is attached to a parent"]
#[derive(Debug)]
pub struct BuiltNode<N: NodeHandle> {
	handle: N,
}

impl<N: NodeHandle> BuiltNode<N> {
	pub(crate) fn new(handle: N) -> Self {
		Self { handle }
	}

	/// Borrow the surface handle, for inspection
	pub fn handle(&self) -> &N {
		&self.handle
	}

	/// Give up the ownership wrapper and keep the raw handle
	pub fn into_handle(self) -> N {
		self.handle
	}

	/// Attach `child` as the last child of this node
	///
	/// # Errors
	///
	/// Returns the surface's error when it refuses the append.
	pub fn append_child(&self, child: BuiltNode<N>) -> Result<(), SurfaceError> {
		self.handle.append_child(&child.handle)
	}
}

/// Element builder bound to one rendering surface
///
/// `D` is the diagnostics channel for recoverable problems. It defaults to
/// [`ConsoleDiagnostics`].
#[derive(Debug, Clone)]
pub struct Builder<S: Surface, D: Diagnostics = ConsoleDiagnostics> {
	surface: S,
	diagnostics: D,
}

impl<S: Surface> Builder<S> {
	/// Builder reporting to the console
	pub fn new(surface: S) -> Self {
		Self {
			surface,
			diagnostics: ConsoleDiagnostics,
		}
	}
}

impl<S: Surface, D: Diagnostics> Builder<S, D> {
	/// Builder reporting to `diagnostics`
	pub fn with_diagnostics(surface: S, diagnostics: D) -> Self {
		Self {
			surface,
			diagnostics,
		}
	}

	/// The rendering surface
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// The diagnostics channel
	pub fn diagnostics(&self) -> &D {
		&self.diagnostics
	}

	/// Construct a `tag` element
	///
	/// Steps, in order:
	///
	/// 1. create the element
	/// 2. apply attributes (`class` through the class-list facet)
	/// 3. apply inline styles
	/// 4. register event listeners
	/// 5. if `content` is non-empty, append one text node holding the content
	///    followed by the concatenated text of every child
	/// 6. append the children, nested lists flattened, in declaration order
	///
	/// # Errors
	///
	/// Returns [`BuildError::Surface`] when the surface fails to create the
	/// element, or rejects an attribute or an append. Invalid children are
	/// reported through [`Diagnostics`] and skipped instead.
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::builder::{Builder, Child, ElementOptions};
	/// use minivan_pages::diagnostics::CollectedDiagnostics;
	/// use minivan_pages::dom::MemoryDocument;
	///
	/// let diagnostics = CollectedDiagnostics::new();
	/// let builder = Builder::with_diagnostics(MemoryDocument::new(), diagnostics.clone());
	///
	/// let span = builder
	///     .build("span", ElementOptions::new(), vec![Child::invalid(42)])
	///     .unwrap();
	///
	/// assert_eq!(span.handle().child_count(), 0);
	/// assert_eq!(diagnostics.messages(), vec!["Invalid child type: 42".to_string()]);
	/// ```
	pub fn build<I>(
		&self,
		tag: &str,
		options: ElementOptions,
		children: I,
	) -> Result<BuiltNode<S::Node>, BuildError>
	where
		I: IntoIterator<Item = Child<S::Node>>,
	{
		let element = self.surface.create_element(tag)?;
		let options = options.into_parts();

		for (name, value) in &options.attributes {
			if name == "class" {
				element.set_class_name(value);
			} else {
				element.set_attribute(name, value)?;
			}
		}

		for (property, value) in &options.styles {
			element.set_style_property(property, value);
		}

		for (event, handler) in options.events {
			element.add_event_listener(&event, handler);
		}

		let children: Vec<Child<S::Node>> = children.into_iter().collect();

		if let Some(content) = options.content.as_deref()
			&& !content.is_empty()
		{
			let joined: String = children.iter().map(Child::joined_text).collect();
			let text = interpolate(&["", "", ""], &[content, joined.as_str()])?;
			element.append_child(&self.surface.create_text_node(&text))?;
		}

		let mut leaves = Vec::with_capacity(children.len());
		for child in children {
			child.flatten_into(&mut leaves);
		}
		debug_log!("Building <{}> with {} child nodes", tag, leaves.len());

		for leaf in leaves {
			match leaf {
				Leaf::Node(node) => element.append_child(&node.into_handle())?,
				Leaf::Text(text) => element.append_child(&self.surface.create_text_node(&text))?,
				Leaf::Invalid(description) => self
					.diagnostics
					.report(&format!("Invalid child type: {description}")),
			}
		}

		Ok(BuiltNode::new(element))
	}
}
