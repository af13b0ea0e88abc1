//! Logging abstraction layer for minivan-pages
//!
//! This module provides logging macros that work across WASM and native targets.
//!
//! ## Macro Overview
//!
//! | Macro | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------|----------|
//! | `debug_log!` | `debug-hooks` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | None | `console.info` | `tracing::info!` |
//! | `warn_log!` | None | `console.warn` | `tracing::warn!` |
//! | `error_log!` | None | `console.error` | `tracing::error!` |
//!
//! On native targets the events carry the `minivan_pages` target, so a
//! `tracing-subscriber` filter such as `minivan_pages=debug` selects them.
//!
//! ## Example
//!
//! ```ignore
//! use minivan_pages::{debug_log, error_log, info_log, warn_log};
//!
//! // Only logged when the `debug-hooks` feature is enabled
//! debug_log!("Built <{}> with {} children", tag, count);
//!
//! info_log!("Mounted into {}", selector);
//! warn_log!("Render took {}ms", time);
//! error_log!("Invalid child type: {}", description);
//! ```

/// Logs a debug message (requires `debug-hooks` feature)
///
/// Compiles to a no-op when the feature is disabled.
#[macro_export]
#[cfg(all(feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature)
#[macro_export]
#[cfg(all(feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!(target: "minivan_pages", $($arg)*);
	}};
}

/// No-op debug_log when the `debug-hooks` feature is disabled
#[macro_export]
#[cfg(not(feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message
///
/// # Example
///
/// ```ignore
/// info_log!("Mounted into {}", selector);
/// ```
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!(target: "minivan_pages", $($arg)*);
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!(target: "minivan_pages", $($arg)*);
	}};
}

/// Logs an error message
///
/// This is the sink behind [`ConsoleDiagnostics`](crate::diagnostics::ConsoleDiagnostics).
///
/// # Example
///
/// ```ignore
/// error_log!("Parent element with selector \"{}\" not found.", selector);
/// ```
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!(target: "minivan_pages", $($arg)*);
	}};
}
