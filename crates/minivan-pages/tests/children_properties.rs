//! Property tests for child flattening

use minivan_pages::prelude::*;
use minivan_pages::MemoryNode;
use proptest::prelude::*;

fn nested(words: &[String], depth: usize) -> Child<MemoryNode> {
	if depth == 0 || words.len() < 2 {
		return Child::from(words.to_vec());
	}
	let (left, right) = words.split_at(words.len() / 2);
	Child::List(vec![nested(left, depth - 1), nested(right, depth - 1)])
}

proptest! {
	#[test]
	fn flattening_keeps_declaration_order(
		words in prop::collection::vec("[a-z]{1,6}", 0..24),
		depth in 0usize..5,
	) {
		let builder = Builder::with_diagnostics(MemoryDocument::new(), CollectedDiagnostics::new());
		let node = builder
			.build("div", ElementOptions::new(), vec![nested(&words, depth)])
			.unwrap();

		let texts: Vec<String> = node
			.handle()
			.children()
			.iter()
			.map(|child| child.text_content())
			.collect();
		prop_assert_eq!(texts, words);
		prop_assert!(builder.diagnostics().is_empty());
	}

	#[test]
	fn content_line_is_content_plus_children(
		content in "[A-Za-z ]{1,12}",
		words in prop::collection::vec("[a-z]{0,4}", 0..6),
	) {
		let builder = Builder::new(MemoryDocument::new());
		let node = builder
			.build("p", ElementOptions::new().content(content.clone()), vec![Child::from(words.clone())])
			.unwrap();

		let first = node.handle().children().first().map(|c| c.text_content());
		prop_assert_eq!(first, Some(format!("{content}{}", words.concat())));
	}
}
