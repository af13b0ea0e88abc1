//! Minivan Pages - declarative element construction
//!
//! Builds UI trees from nested calls, the way the markup reads:
//!
//! ```
//! use minivan_pages::prelude::*;
//!
//! let builder = Builder::new(MemoryDocument::new());
//! let app = builder
//!     .build("div", ElementOptions::new().id("app"), [])
//!     .unwrap();
//! builder.add("body", app);
//!
//! let greeting = tags::p(
//!     &builder,
//!     ElementOptions::new().class("greeting").style("color", "teal"),
//!     children!["Hello, ", vec!["wor", "ld"]],
//! )
//! .unwrap();
//! builder.add("#app", greeting);
//!
//! assert_eq!(
//!     builder.surface().root().inner_html(),
//!     r#"<div id="app"><p class="greeting" style="color: teal">Hello, world</p></div>"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: [`ElementOptions`](builder::ElementOptions),
//!   [`Child`](builder::Child) and [`Builder::build`](builder::Builder::build)
//! - [`tags`]: the tag factory table and one constructor per built-in tag
//! - [`mount`]: [`Builder::add`](builder::Builder::add)
//! - [`dom`]: rendering surfaces (in-memory, and the browser on wasm32)
//! - [`diagnostics`]: where recoverable problems are reported
//! - [`config`]: tag table configuration
//! - [`logging`]: logging macros for wasm and native targets
//!
//! Re-rendering is explicit: subscribe to a [`State`](minivan_core::State)
//! and build a fresh subtree in the callback. There is no diffing.

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod logging;
pub mod mount;
pub mod tags;

pub use builder::{BuildError, Builder, BuiltNode, Child, ElementOptions};
pub use config::{ConfigError, TagConfig};
pub use diagnostics::{CollectedDiagnostics, ConsoleDiagnostics, Diagnostics};
pub use dom::{Event, EventHandler, MemoryDocument, MemoryNode, NodeHandle, Surface, SurfaceError};
pub use minivan_core::{State, Subscription, interpolate, interpolate_named, state};
pub use tags::{HTML_TAGS, TagFactory, TagName, TagTable};

#[cfg(target_arch = "wasm32")]
pub use dom::{WebNode, WebSurface};

/// Common imports
pub mod prelude {
	pub use crate::builder::{BuildError, Builder, BuiltNode, Child, ElementOptions};
	pub use crate::children;
	pub use crate::diagnostics::{CollectedDiagnostics, ConsoleDiagnostics, Diagnostics};
	pub use crate::dom::{Event, MemoryDocument, NodeHandle, Surface};
	pub use crate::tags::{self, TagTable};
	pub use minivan_core::{State, Subscription, interpolate, interpolate_named, state};

	#[cfg(target_arch = "wasm32")]
	pub use crate::dom::WebSurface;
}

// Re-exports used by the logging macros
#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
