//! Diagnostics channel
//!
//! Recoverable problems (an invalid child, a mount selector that matches
//! nothing) never abort construction. They are reported here as human-readable
//! messages and the operation carries on.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error_log;

/// Sink for human-readable error reports
pub trait Diagnostics {
	/// Report one problem
	fn report(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
	fn report(&self, message: &str) {
		(**self).report(message);
	}
}

impl<D: Diagnostics + ?Sized> Diagnostics for Rc<D> {
	fn report(&self, message: &str) {
		(**self).report(message);
	}
}

/// Default sink: `console.error` in the browser, `tracing::error!` elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
	fn report(&self, message: &str) {
		error_log!("{}", message);
	}
}

/// Sink that records every report
///
/// Clones share the same record, so a test can keep one clone and hand the
/// other to a [`Builder`](crate::builder::Builder).
///
/// ## Example
///
/// ```
/// use minivan_pages::diagnostics::{CollectedDiagnostics, Diagnostics};
///
/// let diagnostics = CollectedDiagnostics::new();
/// diagnostics.report("something went wrong");
/// assert_eq!(diagnostics.messages(), vec!["something went wrong".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectedDiagnostics {
	messages: Rc<RefCell<Vec<String>>>,
}

impl CollectedDiagnostics {
	/// Create an empty recorder
	pub fn new() -> Self {
		Self::default()
	}

	/// All messages reported so far, oldest first
	pub fn messages(&self) -> Vec<String> {
		self.messages.borrow().clone()
	}

	/// Number of reports
	pub fn len(&self) -> usize {
		self.messages.borrow().len()
	}

	/// Whether nothing was reported
	pub fn is_empty(&self) -> bool {
		self.messages.borrow().is_empty()
	}

	/// Forget every recorded message
	pub fn clear(&self) {
		self.messages.borrow_mut().clear();
	}
}

impl Diagnostics for CollectedDiagnostics {
	fn report(&self, message: &str) {
		self.messages.borrow_mut().push(message.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_collected_diagnostics_shared_between_clones() {
		let diagnostics = CollectedDiagnostics::new();
		let handle = diagnostics.clone();

		handle.report("first");
		(&handle).report("second");

		assert_eq!(diagnostics.len(), 2);
		assert_eq!(diagnostics.messages(), vec!["first", "second"]);

		diagnostics.clear();
		assert!(handle.is_empty());
	}

	#[rstest]
	fn test_rc_diagnostics_forward() {
		let inner = CollectedDiagnostics::new();
		let shared: Rc<dyn Diagnostics> = Rc::new(inner.clone());

		shared.report("through rc");

		assert_eq!(inner.messages(), vec!["through rc"]);
	}

	#[rstest]
	fn test_console_diagnostics_does_not_panic() {
		ConsoleDiagnostics.report("reported to the console");
	}
}
