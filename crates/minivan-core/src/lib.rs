//! Minivan Core - surface-independent building blocks
//!
//! This crate holds the parts of minivan that never touch a rendering surface:
//!
//! - [`interpolate`]: pure text templating helpers
//! - [`reactive`]: the observable [`State`](reactive::State) container
//!
//! Everything here is single-threaded and synchronous. Element construction
//! lives in `minivan-pages`.

#![warn(missing_docs)]

pub mod interpolate;
pub mod reactive;

pub use interpolate::{InterpolateError, interpolate, interpolate_named};
pub use reactive::{State, Subscription, SubscriptionId};

/// Create an observable state holding `initial`
///
/// Shorthand for [`State::new`].
///
/// # Example
///
/// ```
/// let flag = minivan_core::state(false);
/// flag.set(true);
/// assert!(flag.get());
/// ```
pub fn state<T: Clone + 'static>(initial: T) -> State<T> {
	State::new(initial)
}
