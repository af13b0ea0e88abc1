//! Observable state
//!
//! A deliberately small publish/subscribe primitive: [`State<T>`] holds one
//! value, and every change is pushed synchronously to its subscribers. There is
//! no dependency tracking, batching or scheduling. Re-rendering is done by
//! subscribing a closure that rebuilds the affected subtree.
//!
//! ## Example
//!
//! ```
//! use minivan_core::reactive::State;
//!
//! let todos = State::new(Vec::<String>::new());
//! let subscription = todos.subscribe(|items| {
//!     // rebuild the list view from `items`
//!     let _ = items.len();
//! });
//!
//! todos.update(|items| items.push("write docs".into()));
//! subscription.unsubscribe();
//! ```

mod state;

pub use state::{State, Subscription, SubscriptionId};
