//! Mounting built nodes into the live tree

use crate::builder::{BuiltNode, Builder};
use crate::diagnostics::Diagnostics;
use crate::dom::{NodeHandle, Surface};
use crate::{debug_log, info_log};

impl<S: Surface, D: Diagnostics> Builder<S, D> {
	/// Append `child` as the last child of the first node matching `selector`
	///
	/// Never fails: when nothing matches, one diagnostic is reported and the
	/// tree is left untouched. An unparsable selector or a refused append is
	/// reported the same way. Returns whether `child` was attached.
	///
	/// ## Example
	///
	/// ```
	/// use minivan_pages::builder::{Builder, ElementOptions};
	/// use minivan_pages::dom::MemoryDocument;
	///
	/// let builder = Builder::new(MemoryDocument::new());
	/// let root = builder.build("div", ElementOptions::new().id("root"), []).unwrap();
	/// assert!(builder.add("body", root));
	///
	/// let item = builder.build("p", ElementOptions::new(), []).unwrap();
	/// assert!(builder.add("#root", item));
	/// assert_eq!(builder.surface().root().inner_html(), r#"<div id="root"><p></p></div>"#);
	/// ```
	pub fn add(&self, selector: &str, child: BuiltNode<S::Node>) -> bool {
		let parent = match self.surface().query_selector(selector) {
			Ok(Some(parent)) => parent,
			Ok(None) => {
				self.diagnostics().report(&format!(
					"Parent element with selector \"{selector}\" not found."
				));
				return false;
			}
			Err(e) => {
				self.diagnostics()
					.report(&format!("Cannot mount into \"{selector}\": {e}"));
				return false;
			}
		};

		if let Err(e) = parent.append_child(child.handle()) {
			self.diagnostics()
				.report(&format!("Cannot mount into \"{selector}\": {e}"));
			return false;
		}

		debug_log!("Mounted {:?} into {}", child.handle(), selector);
		info_log!("Mounted node into \"{}\"", selector);
		true
	}
}

#[cfg(test)]
mod tests {
	use crate::builder::{BuiltNode, Builder, ElementOptions};
	use crate::diagnostics::CollectedDiagnostics;
	use crate::dom::MemoryDocument;
	use rstest::{fixture, rstest};

	type TestBuilder = Builder<MemoryDocument, CollectedDiagnostics>;

	#[fixture]
	fn builder() -> TestBuilder {
		let builder = Builder::with_diagnostics(MemoryDocument::new(), CollectedDiagnostics::new());
		let root = builder
			.build("div", ElementOptions::new().id("root"), [])
			.unwrap();
		assert!(builder.add("body", root));
		builder
	}

	#[rstest]
	fn test_add_appends_last(builder: TestBuilder) {
		for tag in ["p", "span"] {
			let node = builder.build(tag, ElementOptions::new(), []).unwrap();
			assert!(builder.add("#root", node));
		}
		assert_eq!(
			builder.surface().root().inner_html(),
			r#"<div id="root"><p></p><span></span></div>"#
		);
		assert!(builder.diagnostics().is_empty());
	}

	#[rstest]
	fn test_missing_parent_reports_once(builder: TestBuilder) {
		let before = builder.surface().root().outer_html();
		let node = builder.build("p", ElementOptions::new(), []).unwrap();

		assert!(!builder.add(".missing", node));

		assert_eq!(builder.surface().root().outer_html(), before);
		assert_eq!(
			builder.diagnostics().messages(),
			vec![r#"Parent element with selector ".missing" not found."#.to_string()]
		);
	}

	#[rstest]
	#[case("div[")]
	#[case("")]
	fn test_unparsable_selector_reports(builder: TestBuilder, #[case] selector: &str) {
		let node = builder.build("p", ElementOptions::new(), []).unwrap();

		assert!(!builder.add(selector, node));
		assert_eq!(builder.diagnostics().len(), 1);
		assert!(builder.diagnostics().messages()[0].starts_with("Cannot mount into"));
	}

	#[rstest]
	fn test_refused_append_reports(builder: TestBuilder) {
		let inner = builder
			.build("div", ElementOptions::new().class("inner"), [])
			.unwrap();
		assert!(builder.add("#root", inner));

		// the document root cannot move below its own descendant
		let root = BuiltNode::new(builder.surface().root());
		assert!(!builder.add(".inner", root));

		assert_eq!(builder.diagnostics().len(), 1);
		assert_eq!(
			builder.surface().root().inner_html(),
			r#"<div id="root"><div class="inner"></div></div>"#
		);
	}
}
