//! Browser rendering surface (wasm32 only)
//!
//! Thin adapter from [`Surface`]/[`NodeHandle`] to `web-sys`.
//!
//! Listeners are handed to the browser with `Closure::forget`: the closure then
//! lives as long as the page, which matches a node owned by the live tree.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use super::{Event, EventHandler, NodeHandle, SelectorError, Surface, SurfaceError};

fn js_reason(value: &JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{value:?}"))
}

/// Handle to a browser DOM node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebNode(web_sys::Node);

impl WebNode {
	/// Wrap an existing DOM node
	pub fn new(node: web_sys::Node) -> Self {
		Self(node)
	}

	/// The wrapped DOM node
	pub fn inner(&self) -> &web_sys::Node {
		&self.0
	}

	fn element(&self) -> Option<&web_sys::Element> {
		self.0.dyn_ref::<web_sys::Element>()
	}
}

impl NodeHandle for WebNode {
	fn set_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
		let element = self.element().ok_or_else(|| SurfaceError::SetAttribute {
			name: name.to_string(),
			reason: "node is not an element".to_string(),
		})?;
		element
			.set_attribute(name, value)
			.map_err(|e| SurfaceError::SetAttribute {
				name: name.to_string(),
				reason: js_reason(&e),
			})
	}

	fn set_class_name(&self, value: &str) {
		if let Some(element) = self.element() {
			element.set_class_name(value);
		}
	}

	fn set_style_property(&self, property: &str, value: &str) {
		if let Some(element) = self.0.dyn_ref::<web_sys::HtmlElement>() {
			// The browser silently ignores properties it does not know.
			let _ = element.style().set_property(property, value);
		}
	}

	fn add_event_listener(&self, event: &str, handler: EventHandler) {
		let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
			handler(&Event::new(raw.type_()));
		});
		if self
			.0
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			.is_ok()
		{
			closure.forget();
		}
	}

	fn append_child(&self, child: &Self) -> Result<(), SurfaceError> {
		self.0
			.append_child(&child.0)
			.map(|_| ())
			.map_err(|e| SurfaceError::AppendChild(js_reason(&e)))
	}

	fn text_content(&self) -> String {
		self.0.text_content().unwrap_or_default()
	}
}

/// The browser document as a rendering surface
#[derive(Clone, Debug)]
pub struct WebSurface {
	document: web_sys::Document,
}

impl WebSurface {
	/// Surface over `window.document`
	///
	/// # Errors
	///
	/// Returns [`SurfaceError::Unavailable`] outside a browser window.
	pub fn global() -> Result<Self, SurfaceError> {
		let window = web_sys::window()
			.ok_or_else(|| SurfaceError::Unavailable("window object not available".to_string()))?;
		let document = window.document().ok_or_else(|| {
			SurfaceError::Unavailable("document object not available".to_string())
		})?;
		Ok(Self { document })
	}

	/// Surface over an explicit document
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}
}

impl Surface for WebSurface {
	type Node = WebNode;

	fn create_element(&self, tag: &str) -> Result<WebNode, SurfaceError> {
		self.document
			.create_element(tag)
			.map(|element| WebNode(element.into()))
			.map_err(|e| SurfaceError::CreateElement {
				tag: tag.to_string(),
				reason: js_reason(&e),
			})
	}

	fn create_text_node(&self, text: &str) -> WebNode {
		WebNode(self.document.create_text_node(text).into())
	}

	fn query_selector(&self, selector: &str) -> Result<Option<WebNode>, SurfaceError> {
		self.document
			.query_selector(selector)
			.map(|found| found.map(|element| WebNode(element.into())))
			.map_err(|e| SurfaceError::InvalidSelector(SelectorError::Rejected(js_reason(&e))))
	}
}
