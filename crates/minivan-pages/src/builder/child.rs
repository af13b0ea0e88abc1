//! Children of an element under construction

use std::fmt;

use crate::dom::NodeHandle;

use super::BuiltNode;

/// One entry of an element's child list
///
/// Lists nest to any depth and are flattened when the parent is built.
/// [`Child::Invalid`] stands for a value that is neither a node nor text: it is
/// reported to the diagnostics channel and skipped, siblings are still built.
pub enum Child<N: NodeHandle> {
	/// A node built earlier; ownership moves to the new parent
	Node(BuiltNode<N>),
	/// Text, appended as a text node
	Text(String),
	/// Ordered list of children
	List(Vec<Child<N>>),
	/// Anything else, carrying its printed form for the report
	Invalid(String),
}

impl<N: NodeHandle> Child<N> {
	/// Text child
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Invalid child described by its `Display` output
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::builder::Child;
	/// use minivan_pages::dom::MemoryNode;
	///
	/// let child: Child<MemoryNode> = Child::invalid(42);
	/// assert!(matches!(child, Child::Invalid(ref d) if d == "42"));
	/// ```
	pub fn invalid(value: impl fmt::Display) -> Self {
		Self::Invalid(value.to_string())
	}

	/// Text this child contributes to the parent's `content` line
	///
	/// Nodes contribute their text content, invalid values their printed form.
	pub(crate) fn joined_text(&self) -> String {
		let mut output = String::new();
		self.write_text(&mut output);
		output
	}

	fn write_text(&self, output: &mut String) {
		match self {
			Self::Node(node) => output.push_str(&node.handle().text_content()),
			Self::Text(text) => output.push_str(text),
			Self::List(children) => {
				for child in children {
					child.write_text(output);
				}
			}
			Self::Invalid(description) => output.push_str(description),
		}
	}

	/// Leaves in declaration order, lists flattened
	pub(crate) fn flatten_into(self, leaves: &mut Vec<Leaf<N>>) {
		match self {
			Self::Node(node) => leaves.push(Leaf::Node(node)),
			Self::Text(text) => leaves.push(Leaf::Text(text)),
			Self::List(children) => {
				for child in children {
					child.flatten_into(leaves);
				}
			}
			Self::Invalid(description) => leaves.push(Leaf::Invalid(description)),
		}
	}
}

/// A flattened child
pub(crate) enum Leaf<N: NodeHandle> {
	Node(BuiltNode<N>),
	Text(String),
	Invalid(String),
}

impl<N: NodeHandle> fmt::Debug for Child<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Node(node) => f.debug_tuple("Node").field(node.handle()).finish(),
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::List(children) => f.debug_tuple("List").field(children).finish(),
			Self::Invalid(description) => f.debug_tuple("Invalid").field(description).finish(),
		}
	}
}

impl<N: NodeHandle> From<BuiltNode<N>> for Child<N> {
	fn from(node: BuiltNode<N>) -> Self {
		Self::Node(node)
	}
}

impl<N: NodeHandle> From<&str> for Child<N> {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl<N: NodeHandle> From<String> for Child<N> {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl<N: NodeHandle> From<&String> for Child<N> {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

impl<N: NodeHandle, C: Into<Child<N>>> From<Vec<C>> for Child<N> {
	fn from(children: Vec<C>) -> Self {
		Self::List(children.into_iter().map(Into::into).collect())
	}
}

/// `None` contributes nothing
impl<N: NodeHandle, C: Into<Child<N>>> From<Option<C>> for Child<N> {
	fn from(child: Option<C>) -> Self {
		match child {
			Some(child) => child.into(),
			None => Self::List(Vec::new()),
		}
	}
}

/// Build a child list from heterogeneous values
///
/// Every item goes through [`Child::from`], so nodes, strings, vectors and
/// options can be mixed freely. The node type is inferred from the call site.
///
/// ## Example
///
/// ```
/// use minivan_pages::builder::{Builder, ElementOptions};
/// use minivan_pages::children;
/// use minivan_pages::dom::MemoryDocument;
///
/// let builder = Builder::new(MemoryDocument::new());
/// let list = builder
///     .build("ul", ElementOptions::new(), children![vec!["x", "y"], "z"])
///     .unwrap();
/// assert_eq!(list.handle().child_count(), 3);
/// ```
#[macro_export]
macro_rules! children {
	() => {
		::std::vec::Vec::<$crate::builder::Child<_>>::new()
	};
	($($child:expr),+ $(,)?) => {
		::std::vec![$($crate::builder::Child::from($child)),+]
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::{MemoryDocument, MemoryNode, Surface};
	use rstest::rstest;

	type TestChild = Child<MemoryNode>;

	#[rstest]
	fn test_flatten_nested_lists_in_order() {
		let child = TestChild::from(vec![
			TestChild::text("a"),
			TestChild::from(vec![TestChild::from(vec!["b", "c"]), TestChild::text("d")]),
			TestChild::from(Vec::<&str>::new()),
			TestChild::text("e"),
		]);

		let mut leaves = Vec::new();
		child.flatten_into(&mut leaves);

		let texts: Vec<&str> = leaves
			.iter()
			.map(|leaf| match leaf {
				Leaf::Text(text) => text.as_str(),
				_ => "?",
			})
			.collect();
		assert_eq!(texts, vec!["a", "b", "c", "d", "e"]);
	}

	#[rstest]
	#[case(TestChild::text("plain"), "plain")]
	#[case(TestChild::from(vec!["x", "y"]), "xy")]
	#[case(TestChild::invalid(42), "42")]
	#[case(TestChild::from(None::<&str>), "")]
	fn test_joined_text(#[case] child: TestChild, #[case] expected: &str) {
		assert_eq!(child.joined_text(), expected);
	}

	#[rstest]
	fn test_node_text_uses_text_content() {
		let doc = MemoryDocument::new();
		let span = doc.create_element("span").unwrap();
		span.append_child(&doc.create_text_node("inner")).unwrap();

		let child = TestChild::from(BuiltNode::new(span));
		assert_eq!(child.joined_text(), "inner");
	}

	#[rstest]
	fn test_children_macro_mixes_types() {
		let owned = String::from("owned");
		let list: Vec<TestChild> = children!["a", owned.clone(), &owned, Some("b"), vec!["c"]];
		assert_eq!(list.len(), 5);
		assert!(matches!(list[3], Child::Text(ref t) if t == "b"));
		assert!(matches!(list[4], Child::List(ref l) if l.len() == 1));
	}

	#[rstest]
	fn test_empty_children_macro() {
		let list: Vec<TestChild> = children![];
		assert!(list.is_empty());
	}
}
