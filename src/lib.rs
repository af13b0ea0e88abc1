//! # Minivan
//!
//! A minimal declarative UI-construction layer. UI trees are built from nested
//! function calls, decorated with attributes, styles and event listeners, and
//! attached to a live rendering surface. A small observable value triggers
//! re-renders.
//!
//! ## Crates
//!
//! - [`core`] (`minivan-core`): [`interpolate`], [`State`]
//! - [`pages`] (`minivan-pages`, feature `pages`): the element builder, the tag
//!   factory table, mounting and rendering surfaces
//!
//! ## Feature Flags
//!
//! - `pages` (default) - element construction
//! - `debug-hooks` - debug logging of every construction step
//!
//! ## Example
//!
//! ```
//! use minivan::prelude::*;
//!
//! let builder = Builder::new(MemoryDocument::new());
//! let todo = state(vec!["milk".to_string()]);
//!
//! let items: Vec<Child<_>> = todo
//!     .get()
//!     .iter()
//!     .map(|item| Child::from(tags::li(&builder, ElementOptions::new(), children![item]).unwrap()))
//!     .collect();
//! let list = tags::ul(&builder, ElementOptions::new().id("todo"), items).unwrap();
//! assert!(builder.add("body", list));
//!
//! assert_eq!(
//!     builder.surface().root().inner_html(),
//!     r#"<ul id="todo"><li>milk</li></ul>"#
//! );
//! ```
//!
//! Each render performs a full reconstruction; there is no diffing.

pub use minivan_core as core;
pub use minivan_core::{InterpolateError, State, Subscription, interpolate, interpolate_named, state};

#[cfg(feature = "pages")]
pub use minivan_pages as pages;
#[cfg(feature = "pages")]
pub use minivan_pages::{
	BuildError, Builder, BuiltNode, Child, ElementOptions, TagConfig, TagTable, children,
};

/// Common imports
pub mod prelude {
	pub use minivan_core::{State, Subscription, interpolate, interpolate_named, state};

	#[cfg(feature = "pages")]
	pub use minivan_pages::prelude::*;
}
