//! Tag factory table
//!
//! Every supported tag identifier maps to a [`TagFactory`], a constructor that
//! forwards to [`Builder::build`] with the tag filled in. The table is built
//! once and never mutated afterwards.
//!
//! Two ways in:
//!
//! - [`TagTable`] lookup by name, for tags chosen at runtime or configured
//!   through [`TagConfig`]
//! - free functions ([`div`], [`ul`], [`li`], ...), one per built-in tag
//!
//! ## Example
//!
//! ```
//! use minivan_pages::builder::{Builder, ElementOptions};
//! use minivan_pages::children;
//! use minivan_pages::dom::MemoryDocument;
//! use minivan_pages::tags::{self, TagTable};
//!
//! let builder = Builder::new(MemoryDocument::new());
//!
//! let title = tags::h1(&builder, ElementOptions::new(), children!["Hello"]).unwrap();
//! let section = TagTable::html()
//!     .get("section")
//!     .unwrap()
//!     .call(&builder, ElementOptions::new(), children![title])
//!     .unwrap();
//!
//! assert_eq!(section.handle().outer_html(), "<section><h1>Hello</h1></section>");
//! ```

use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::builder::{BuildError, Builder, BuiltNode, Child, ElementOptions};
use crate::config::{ConfigError, TagConfig};
use crate::diagnostics::Diagnostics;
use crate::dom::Surface;

/// Built-in tag identifiers, in their historical order
///
/// `nav` is listed twice; the table keeps a single factory for it.
pub const HTML_TAGS: &[&str] = &[
	"html",
	"head",
	"title",
	"body",
	"meta",
	"link",
	"style",
	"script",
	"noscript",
	"p",
	"span",
	"div",
	"h1",
	"h2",
	"h3",
	"h4",
	"h5",
	"h6",
	"strong",
	"em",
	"i",
	"b",
	"small",
	"sub",
	"sup",
	"blockquote",
	"q",
	"abbr",
	"cite",
	"code",
	"pre",
	"ul",
	"ol",
	"li",
	"dl",
	"dt",
	"dd",
	"a",
	"nav",
	"bdo",
	"table",
	"tr",
	"th",
	"td",
	"thead",
	"tbody",
	"tfoot",
	"caption",
	"col",
	"colgroup",
	"form",
	"input",
	"button",
	"select",
	"option",
	"label",
	"textarea",
	"fieldset",
	"legend",
	"optgroup",
	"datalist",
	"keygen",
	"output",
	"img",
	"audio",
	"video",
	"iframe",
	"object",
	"embed",
	"canvas",
	"svg",
	"math",
	"details",
	"summary",
	"menu",
	"command",
	"menuitem",
	"article",
	"aside",
	"figcaption",
	"figure",
	"footer",
	"header",
	"main",
	"mark",
	"nav",
	"section",
	"time",
];

static HTML_TABLE: Lazy<TagTable> = Lazy::new(|| {
	TagTable::from_names(HTML_TAGS.iter().copied().map(TagName::from_static))
});

/// A validated tag identifier
///
/// Starts with an ASCII letter, continues with ASCII letters, digits or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(Cow<'static, str>);

impl TagName {
	/// Validate an owned or borrowed name
	///
	/// # Errors
	///
	/// Returns [`ConfigError::EmptyTagName`] or [`ConfigError::InvalidTagName`].
	pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, ConfigError> {
		let name = name.into();
		let mut chars = name.chars();
		match chars.next() {
			None => Err(ConfigError::EmptyTagName),
			Some(first)
				if first.is_ascii_alphabetic()
					&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-') =>
			{
				Ok(Self(name))
			}
			Some(_) => Err(ConfigError::InvalidTagName(name.into_owned())),
		}
	}

	/// Trusted built-in name, not validated
	pub(crate) const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	/// The name as a string slice
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for TagName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TagName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Constructor for one tag: `build` with the tag filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFactory {
	tag: TagName,
}

impl TagFactory {
	/// Factory for `tag`
	pub fn new(tag: TagName) -> Self {
		Self { tag }
	}

	/// The tag this factory builds
	pub fn tag(&self) -> &TagName {
		&self.tag
	}

	/// Build the element
	///
	/// # Errors
	///
	/// Same as [`Builder::build`].
	pub fn call<S, D, I>(
		&self,
		builder: &Builder<S, D>,
		options: ElementOptions,
		children: I,
	) -> Result<BuiltNode<S::Node>, BuildError>
	where
		S: Surface,
		D: Diagnostics,
		I: IntoIterator<Item = Child<S::Node>>,
	{
		builder.build(self.tag.as_str(), options, children)
	}
}

/// Immutable mapping from tag identifier to [`TagFactory`]
#[derive(Debug, Clone, Default)]
pub struct TagTable {
	factories: HashMap<TagName, TagFactory>,
}

impl TagTable {
	/// The process-wide table of built-in HTML tags
	pub fn html() -> &'static TagTable {
		&HTML_TABLE
	}

	/// Table described by `config`
	///
	/// # Errors
	///
	/// Returns the first invalid tag name in `config.tags`.
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::config::TagConfig;
	/// use minivan_pages::tags::TagTable;
	///
	/// let config = TagConfig {
	///     include_defaults: false,
	///     tags: vec!["my-widget".to_string()],
	/// };
	/// let table = TagTable::from_config(&config).unwrap();
	/// assert!(table.contains("my-widget"));
	/// assert!(!table.contains("div"));
	/// ```
	pub fn from_config(config: &TagConfig) -> Result<Self, ConfigError> {
		let mut table = if config.include_defaults {
			Self::html().clone()
		} else {
			Self::default()
		};
		for tag in &config.tags {
			table.insert(TagName::new(tag.clone())?);
		}
		Ok(table)
	}

	fn from_names(names: impl IntoIterator<Item = TagName>) -> Self {
		let mut table = Self::default();
		for name in names {
			table.insert(name);
		}
		table
	}

	// Repeated names collapse: the later registration replaces the earlier.
	fn insert(&mut self, name: TagName) {
		self.factories
			.insert(name.clone(), TagFactory::new(name));
	}

	/// Factory for `tag`, if the table has one
	pub fn get(&self, tag: &str) -> Option<&TagFactory> {
		self.factories.get(tag)
	}

	/// Whether `tag` has a factory
	pub fn contains(&self, tag: &str) -> bool {
		self.factories.contains_key(tag)
	}

	/// Number of distinct tags
	pub fn len(&self) -> usize {
		self.factories.len()
	}

	/// Whether the table is empty
	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}

	/// Every tag name, sorted
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.factories.keys().map(TagName::as_str).collect();
		names.sort_unstable();
		names
	}
}

/// Define a free constructor function for one tag
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:expr) => {
		$(#[$meta])*
		pub fn $name<S, D, I>(
			builder: &Builder<S, D>,
			options: ElementOptions,
			children: I,
		) -> Result<BuiltNode<S::Node>, BuildError>
		where
			S: Surface,
			D: Diagnostics,
			I: IntoIterator<Item = Child<S::Node>>,
		{
			builder.build($tag, options, children)
		}
	};
}

/// Define constructors for a list of tags whose name is a valid identifier
macro_rules! define_elements {
	($($name:ident),+ $(,)?) => {
		$(
			define_element!(
				#[doc = concat!("Build a `<", stringify!($name), ">` element")]
				$name, stringify!($name)
			);
		)+
	};
}

define_element!(
	/// Build a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::builder::{Builder, ElementOptions};
	/// use minivan_pages::children;
	/// use minivan_pages::dom::MemoryDocument;
	/// use minivan_pages::tags::div;
	///
	/// let builder = Builder::new(MemoryDocument::new());
	/// let container = div(&builder, ElementOptions::new().class("container"), children!["Content"])
	///     .unwrap();
	/// assert_eq!(container.handle().outer_html(), r#"<div class="container">Content</div>"#);
	/// ```
	div, "div"
);

define_element!(
	/// Build an `<a>` element
	///
	/// Set the target with `ElementOptions::attr("href", ..)`.
	a, "a"
);

define_element!(
	/// Build an `<input>` element
	///
	/// A void element: children are accepted by the surface but never
	/// rendered by browsers.
	input, "input"
);

define_elements!(
	html, head, title, body, meta, link, style, script, noscript, p, span, h1, h2, h3, h4, h5,
	h6, strong, em, i, b, small, sub, sup, blockquote, q, abbr, cite, code, pre, ul, ol, li, dl,
	dt, dd, nav, bdo, table, tr, th, td, thead, tbody, tfoot, caption, col, colgroup, form,
	button, select, option, label, textarea, fieldset, legend, optgroup, datalist, keygen,
	output, img, audio, video, iframe, object, embed, canvas, svg, math, details, summary, menu,
	command, menuitem, article, aside, figcaption, figure, footer, header, main, mark, section,
	time,
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::CollectedDiagnostics;
	use crate::dom::MemoryDocument;
	use rstest::rstest;

	#[rstest]
	fn test_html_table_collapses_duplicates() {
		let table = TagTable::html();
		assert_eq!(HTML_TAGS.len(), 88);
		assert_eq!(table.len(), 87);
		assert!(HTML_TAGS.iter().all(|tag| table.contains(tag)));
	}

	#[rstest]
	fn test_builtin_names_are_valid() {
		for tag in HTML_TAGS {
			assert!(TagName::new(*tag).is_ok(), "{tag}");
		}
	}

	#[rstest]
	#[case("my-widget", true)]
	#[case("h1", true)]
	#[case("", false)]
	#[case("1h", false)]
	#[case("-x", false)]
	#[case("my widget", false)]
	#[case("x_y", false)]
	fn test_tag_name_validation(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(TagName::new(name.to_string()).is_ok(), valid);
	}

	#[rstest]
	fn test_empty_tag_name_error() {
		assert!(matches!(TagName::new(""), Err(ConfigError::EmptyTagName)));
	}

	#[rstest]
	fn test_from_config_extends_defaults() {
		let config = TagConfig {
			include_defaults: true,
			tags: vec!["my-widget".to_string(), "div".to_string()],
		};
		let table = TagTable::from_config(&config).unwrap();
		assert_eq!(table.len(), 88);
		assert!(table.contains("my-widget"));
	}

	#[rstest]
	fn test_from_config_rejects_invalid_names() {
		let config = TagConfig {
			include_defaults: false,
			tags: vec!["ok".to_string(), "not ok".to_string()],
		};
		let err = TagTable::from_config(&config).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidTagName(ref name) if name == "not ok"));
	}

	#[rstest]
	fn test_names_sorted() {
		let config = TagConfig {
			include_defaults: false,
			tags: vec!["z-b".to_string(), "a-c".to_string(), "m".to_string()],
		};
		let table = TagTable::from_config(&config).unwrap();
		assert_eq!(table.names(), vec!["a-c", "m", "z-b"]);
	}

	#[rstest]
	fn test_factory_builds_its_tag() {
		let builder = Builder::with_diagnostics(MemoryDocument::new(), CollectedDiagnostics::new());
		let factory = TagTable::html().get("nav").unwrap();
		let node = factory
			.call(&builder, ElementOptions::new(), crate::children!["menu"])
			.unwrap();
		assert_eq!(node.handle().outer_html(), "<nav>menu</nav>");
		assert_eq!(factory.tag().as_str(), "nav");
	}

	#[rstest]
	fn test_free_functions_match_table() {
		let builder = Builder::with_diagnostics(MemoryDocument::new(), CollectedDiagnostics::new());
		let item = li(&builder, ElementOptions::new(), crate::children!["one"]).unwrap();
		let list = ul(&builder, ElementOptions::new(), crate::children![item]).unwrap();
		let wrapper = main(&builder, ElementOptions::new(), crate::children![list]).unwrap();
		assert_eq!(
			wrapper.handle().outer_html(),
			"<main><ul><li>one</li></ul></main>"
		);
	}
}
