//! In-memory rendering surface
//!
//! [`MemoryDocument`] keeps a full node tree in memory: elements with
//! attributes, inline styles and listeners, plus text nodes. It implements
//! [`Surface`], so everything the builder does in a browser can be done (and
//! asserted on) without one.
//!
//! ## Example
//!
//! ```
//! use minivan_pages::dom::{MemoryDocument, NodeHandle, Surface};
//!
//! let doc = MemoryDocument::new();
//! let p = doc.create_element("p").unwrap();
//! p.append_child(&doc.create_text_node("Hello")).unwrap();
//! doc.root().append_child(&p).unwrap();
//!
//! assert_eq!(doc.root().outer_html(), "<body><p>Hello</p></body>");
//! ```

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::selector::{Selector, SelectorTarget};
use super::{Event, EventHandler, NodeHandle, Surface, SurfaceError};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "source",
	"track", "wbr",
];

enum NodeKind {
	Element(ElementData),
	Text(String),
}

#[derive(Default)]
struct ElementData {
	tag: String,
	attributes: Vec<(String, String)>,
	styles: Vec<(String, String)>,
	listeners: Vec<(String, EventHandler)>,
}

struct NodeData {
	kind: NodeKind,
	children: Vec<MemoryNode>,
	parent: Weak<RefCell<NodeData>>,
}

/// Handle to a node of a [`MemoryDocument`]
///
/// Clones refer to the same node; equality is identity.
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl MemoryNode {
	fn from_kind(kind: NodeKind) -> Self {
		Self(Rc::new(RefCell::new(NodeData {
			kind,
			children: Vec::new(),
			parent: Weak::new(),
		})))
	}

	/// Lower-case tag name, `None` for text nodes
	pub fn tag_name(&self) -> Option<String> {
		match &self.0.borrow().kind {
			NodeKind::Element(element) => Some(element.tag.clone()),
			NodeKind::Text(_) => None,
		}
	}

	/// Whether this is a text node
	pub fn is_text(&self) -> bool {
		matches!(self.0.borrow().kind, NodeKind::Text(_))
	}

	/// Attribute value, `None` when absent or for text nodes
	pub fn attribute(&self, name: &str) -> Option<String> {
		match &self.0.borrow().kind {
			NodeKind::Element(element) => element
				.attributes
				.iter()
				.find(|(key, _)| key == name)
				.map(|(_, value)| value.clone()),
			NodeKind::Text(_) => None,
		}
	}

	/// The class-list facet as a single string (empty when unset)
	pub fn class_name(&self) -> String {
		self.attribute("class").unwrap_or_default()
	}

	/// Inline style property value
	pub fn style_property(&self, property: &str) -> Option<String> {
		match &self.0.borrow().kind {
			NodeKind::Element(element) => element
				.styles
				.iter()
				.find(|(key, _)| key == property)
				.map(|(_, value)| value.clone()),
			NodeKind::Text(_) => None,
		}
	}

	/// Child nodes in order
	pub fn children(&self) -> Vec<MemoryNode> {
		self.0.borrow().children.clone()
	}

	/// Number of child nodes
	pub fn child_count(&self) -> usize {
		self.0.borrow().children.len()
	}

	/// Parent node, if attached
	pub fn parent(&self) -> Option<MemoryNode> {
		self.0.borrow().parent.upgrade().map(MemoryNode)
	}

	/// Number of listeners registered for `event`
	pub fn listener_count(&self, event: &str) -> usize {
		match &self.0.borrow().kind {
			NodeKind::Element(element) => element
				.listeners
				.iter()
				.filter(|(name, _)| name == event)
				.count(),
			NodeKind::Text(_) => 0,
		}
	}

	/// Invoke every listener registered on this node for `event`
	///
	/// Listeners run in registration order. The event does not bubble.
	/// Returns the number of listeners invoked.
	pub fn dispatch_event(&self, event: &str) -> usize {
		let handlers: Vec<EventHandler> = match &self.0.borrow().kind {
			NodeKind::Element(element) => element
				.listeners
				.iter()
				.filter(|(name, _)| name == event)
				.map(|(_, handler)| Rc::clone(handler))
				.collect(),
			NodeKind::Text(_) => Vec::new(),
		};
		let dispatched = Event::new(event);
		for handler in &handlers {
			handler(&dispatched);
		}
		handlers.len()
	}

	/// Serialize this node and its subtree to HTML
	pub fn outer_html(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	/// Serialize the children of this node to HTML
	pub fn inner_html(&self) -> String {
		let mut output = String::new();
		for child in self.0.borrow().children.iter() {
			child.write_html(&mut output);
		}
		output
	}

	fn write_html(&self, output: &mut String) {
		let data = self.0.borrow();
		let element = match &data.kind {
			NodeKind::Text(text) => {
				output.push_str(&html_escape(text));
				return;
			}
			NodeKind::Element(element) => element,
		};

		output.push('<');
		output.push_str(&element.tag);
		for (name, value) in &element.attributes {
			if name == "style" && !element.styles.is_empty() {
				continue;
			}
			push_attribute(output, name, value);
		}
		if !element.styles.is_empty() {
			let style = element
				.styles
				.iter()
				.map(|(property, value)| format!("{property}: {value}"))
				.collect::<Vec<_>>()
				.join("; ");
			push_attribute(output, "style", &style);
		}

		if VOID_ELEMENTS.contains(&element.tag.as_str()) && data.children.is_empty() {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &data.children {
			child.write_html(output);
		}
		output.push_str("</");
		output.push_str(&element.tag);
		output.push('>');
	}

	fn is_ancestor_or_self_of(&self, other: &MemoryNode) -> bool {
		let mut current = Some(other.clone());
		while let Some(node) = current {
			if node == *self {
				return true;
			}
			current = node.parent();
		}
		false
	}

	fn detach(&self) {
		let parent = self.0.borrow().parent.upgrade();
		if let Some(parent) = parent {
			parent
				.borrow_mut()
				.children
				.retain(|child| !Rc::ptr_eq(&child.0, &self.0));
		}
		self.0.borrow_mut().parent = Weak::new();
	}

	fn find_first(&self, selector: &Selector) -> Option<MemoryNode> {
		if selector.matches(self) {
			return Some(self.clone());
		}
		self.children()
			.iter()
			.find_map(|child| child.find_first(selector))
	}
}

impl PartialEq for MemoryNode {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0.borrow().kind {
			NodeKind::Element(element) => f
				.debug_struct("MemoryNode")
				.field("tag", &element.tag)
				.field("attributes", &element.attributes)
				.field("styles", &element.styles)
				.field("listeners_count", &element.listeners.len())
				.field("children_count", &self.0.borrow().children.len())
				.finish(),
			NodeKind::Text(text) => f.debug_tuple("MemoryText").field(text).finish(),
		}
	}
}

impl NodeHandle for MemoryNode {
	fn set_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
		if !is_valid_attribute_name(name) {
			return Err(SurfaceError::SetAttribute {
				name: name.to_string(),
				reason: "invalid attribute name".to_string(),
			});
		}
		match &mut self.0.borrow_mut().kind {
			NodeKind::Element(element) => {
				upsert(&mut element.attributes, name, value);
				Ok(())
			}
			NodeKind::Text(_) => Err(SurfaceError::SetAttribute {
				name: name.to_string(),
				reason: "text nodes have no attributes".to_string(),
			}),
		}
	}

	fn set_class_name(&self, value: &str) {
		if let NodeKind::Element(element) = &mut self.0.borrow_mut().kind {
			upsert(&mut element.attributes, "class", value);
		}
	}

	fn set_style_property(&self, property: &str, value: &str) {
		if let NodeKind::Element(element) = &mut self.0.borrow_mut().kind {
			upsert(&mut element.styles, property, value);
		}
	}

	fn add_event_listener(&self, event: &str, handler: EventHandler) {
		if let NodeKind::Element(element) = &mut self.0.borrow_mut().kind {
			element.listeners.push((event.to_string(), handler));
		}
	}

	fn append_child(&self, child: &Self) -> Result<(), SurfaceError> {
		if self.is_text() {
			return Err(SurfaceError::AppendChild(
				"text nodes cannot have children".to_string(),
			));
		}
		if child.is_ancestor_or_self_of(self) {
			return Err(SurfaceError::AppendChild(
				"the new child is an ancestor of the parent".to_string(),
			));
		}
		child.detach();
		child.0.borrow_mut().parent = Rc::downgrade(&self.0);
		self.0.borrow_mut().children.push(child.clone());
		Ok(())
	}

	fn text_content(&self) -> String {
		let data = self.0.borrow();
		match &data.kind {
			NodeKind::Text(text) => text.clone(),
			NodeKind::Element(_) => data.children.iter().map(|c| c.text_content()).collect(),
		}
	}
}

impl SelectorTarget for MemoryNode {
	fn tag_name(&self) -> Option<String> {
		MemoryNode::tag_name(self)
	}

	fn attribute(&self, name: &str) -> Option<String> {
		MemoryNode::attribute(self, name)
	}

	fn parent_element(&self) -> Option<Self> {
		self.parent()
	}
}

/// A document held entirely in memory
///
/// The document has a single root element (`<body>` by default). Queries
/// search the root and all of its descendants in document order.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
	root: MemoryNode,
}

impl MemoryDocument {
	/// Create a document rooted at an empty `<body>`
	pub fn new() -> Self {
		Self {
			root: MemoryNode::from_kind(NodeKind::Element(ElementData {
				tag: "body".to_string(),
				..ElementData::default()
			})),
		}
	}

	/// Create a document rooted at an element of kind `tag`
	///
	/// # Errors
	///
	/// Returns [`SurfaceError::CreateElement`] for an invalid tag name.
	pub fn with_root(tag: &str) -> Result<Self, SurfaceError> {
		let document = Self::new();
		let root = document.create_element(tag)?;
		Ok(Self { root })
	}

	/// The root element
	pub fn root(&self) -> MemoryNode {
		self.root.clone()
	}
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl Surface for MemoryDocument {
	type Node = MemoryNode;

	fn create_element(&self, tag: &str) -> Result<MemoryNode, SurfaceError> {
		if !is_valid_tag_name(tag) {
			return Err(SurfaceError::CreateElement {
				tag: tag.to_string(),
				reason: "invalid tag name".to_string(),
			});
		}
		Ok(MemoryNode::from_kind(NodeKind::Element(ElementData {
			tag: tag.to_ascii_lowercase(),
			..ElementData::default()
		})))
	}

	fn create_text_node(&self, text: &str) -> MemoryNode {
		MemoryNode::from_kind(NodeKind::Text(text.to_string()))
	}

	fn query_selector(&self, selector: &str) -> Result<Option<MemoryNode>, SurfaceError> {
		let selector = Selector::parse(selector)?;
		Ok(self.root.find_first(&selector))
	}
}

fn upsert(entries: &mut Vec<(String, String)>, key: &str, value: &str) {
	match entries.iter_mut().find(|(existing, _)| existing == key) {
		Some((_, existing)) => *existing = value.to_string(),
		None => entries.push((key.to_string(), value.to_string())),
	}
}

fn is_valid_tag_name(tag: &str) -> bool {
	let mut chars = tag.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name
			.chars()
			.any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '='))
}

fn push_attribute(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	output.push_str(&html_escape(value));
	output.push('"');
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
