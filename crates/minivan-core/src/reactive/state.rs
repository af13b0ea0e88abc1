//! State - Observable Value Container
//!
//! `State<T>` holds a single value and a list of subscribers. Every `set()` or
//! `update()` synchronously notifies the subscribers, in the order they
//! subscribed, with the new value.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use minivan_core::reactive::State;
//!
//! let count = State::new(0);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let seen_clone = seen.clone();
//! let subscription = count.subscribe(move |value| seen_clone.borrow_mut().push(*value));
//!
//! count.set(5);
//! assert_eq!(count.get(), 5);
//! assert_eq!(*seen.borrow(), vec![5]);
//!
//! subscription.unsubscribe();
//! count.set(6);
//! assert_eq!(*seen.borrow(), vec![5]);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type SubscriberFn<T> = Rc<dyn Fn(&T) + 'static>;

/// Identifies one registration in a subscriber list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscribers<T> {
	next_id: Cell<u64>,
	entries: RefCell<Vec<(SubscriptionId, SubscriberFn<T>)>>,
}

impl<T> Subscribers<T> {
	fn new() -> Self {
		Self {
			next_id: Cell::new(0),
			entries: RefCell::new(Vec::new()),
		}
	}

	fn insert(&self, subscriber: SubscriberFn<T>) -> SubscriptionId {
		let id = SubscriptionId(self.next_id.get());
		self.next_id.set(id.0 + 1);
		self.entries.borrow_mut().push((id, subscriber));
		id
	}

	fn remove(&self, id: SubscriptionId) -> bool {
		let mut entries = self.entries.borrow_mut();
		let before = entries.len();
		entries.retain(|(entry_id, _)| *entry_id != id);
		entries.len() != before
	}

	fn contains(&self, id: SubscriptionId) -> bool {
		self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id)
	}

	fn snapshot(&self) -> Vec<SubscriberFn<T>> {
		self.entries
			.borrow()
			.iter()
			.map(|(_, subscriber)| Rc::clone(subscriber))
			.collect()
	}

	fn len(&self) -> usize {
		self.entries.borrow().len()
	}
}

/// An observable value with synchronous change notification
///
/// ## Cloning
///
/// `State<T>` shares its value and subscriber list through `Rc`, so clones
/// observe and mutate the same state. It is `!Send`: state lives
/// on the UI thread.
///
/// ## Notification order
///
/// Subscribers run in subscription order. The subscriber list is snapshotted
/// when a notification starts, so a subscriber added during a notification is
/// first called on the next change, and one removed during a notification
/// still receives the in-flight value.
pub struct State<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<Subscribers<T>>,
}

impl<T: 'static> Clone for State<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: Clone + 'static> State<T> {
	/// Create a new state holding `initial`
	///
	/// # Example
	///
	/// ```
	/// use minivan_core::reactive::State;
	///
	/// let name = State::new(String::from("Ada"));
	/// assert_eq!(name.get(), "Ada");
	/// ```
	pub fn new(initial: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(initial)),
			subscribers: Rc::new(Subscribers::new()),
		}
	}

	/// Get a copy of the current value
	pub fn get(&self) -> T {
		self.value.borrow().clone()
	}

	/// Borrow the current value without cloning it
	///
	/// # Panics
	///
	/// Panics if called from `f` in a way that mutates this state.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Replace the value and notify every subscriber with it
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutate the value in place, then notify subscribers once
	///
	/// # Example
	///
	/// ```
	/// use minivan_core::reactive::State;
	///
	/// let count = State::new(1);
	/// count.update(|n| *n *= 10);
	/// assert_eq!(count.get(), 10);
	/// ```
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		self.notify();
	}

	/// Register `subscriber`, returning the handle that removes it again
	///
	/// Subscribing the same closure twice creates two independent
	/// registrations; each handle only ever removes its own.
	pub fn subscribe<F>(&self, subscriber: F) -> Subscription
	where
		F: Fn(&T) + 'static,
	{
		let id = self.subscribers.insert(Rc::new(subscriber));
		let registry = Rc::downgrade(&self.subscribers);
		let registry: Weak<dyn Registry> = registry;
		Subscription { id, registry }
	}

	/// Number of live registrations
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.len()
	}

	fn notify(&self) {
		// Subscribers receive their own copy so they may call `set` re-entrantly.
		let value = self.get();
		for subscriber in self.subscribers.snapshot() {
			subscriber(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for State<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("State")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscribers.len())
			.finish()
	}
}

/// Type-erased view of a subscriber list, held weakly by [`Subscription`]
trait Registry {
	fn remove(&self, id: SubscriptionId) -> bool;
	fn contains(&self, id: SubscriptionId) -> bool;
}

impl<T> Registry for Subscribers<T> {
	fn remove(&self, id: SubscriptionId) -> bool {
		Subscribers::remove(self, id)
	}

	fn contains(&self, id: SubscriptionId) -> bool {
		Subscribers::contains(self, id)
	}
}

/// Handle returned by [`State::subscribe`]
///
/// Dropping the handle does NOT unsubscribe; call [`Subscription::unsubscribe`]
/// before discarding it if notifications should stop.
#[must_use = "dropping a Subscription keeps the subscriber registered; call `unsubscribe` to remove it"]
pub struct Subscription {
	id: SubscriptionId,
	registry: Weak<dyn Registry>,
}

impl Subscription {
	/// Identifier of this registration
	pub fn id(&self) -> SubscriptionId {
		self.id
	}

	/// Remove this registration
	///
	/// Returns `true` if it was still registered. Calling it again, or after
	/// the state has been dropped, is a no-op returning `false`.
	pub fn unsubscribe(&self) -> bool {
		self.registry
			.upgrade()
			.is_some_and(|registry| registry.remove(self.id))
	}

	/// Whether the registration is still live
	pub fn is_active(&self) -> bool {
		self.registry
			.upgrade()
			.is_some_and(|registry| registry.contains(self.id))
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
		let log = Rc::new(RefCell::new(Vec::new()));
		let log_clone = Rc::clone(&log);
		(log, move |value: &T| log_clone.borrow_mut().push(value.clone()))
	}

	#[rstest]
	fn test_state_creation() {
		let state = State::new(0);
		assert_eq!(state.get(), 0);
	}

	#[rstest]
	fn test_state_get_is_stable_without_set() {
		let state = State::new(vec![1, 2, 3]);
		assert_eq!(state.get(), state.get());
		assert_eq!(state.get(), vec![1, 2, 3]);
	}

	#[rstest]
	fn test_state_set_notifies_in_subscription_order() {
		let state = State::new(0);
		let order = Rc::new(RefCell::new(Vec::new()));

		let first = Rc::clone(&order);
		let _a = state.subscribe(move |v| first.borrow_mut().push(("first", *v)));
		let second = Rc::clone(&order);
		let _b = state.subscribe(move |v| second.borrow_mut().push(("second", *v)));

		state.set(5);

		assert_eq!(state.get(), 5);
		assert_eq!(*order.borrow(), vec![("first", 5), ("second", 5)]);
	}

	#[rstest]
	fn test_unsubscribe_stops_notifications() {
		let state = State::new(0);
		let (first_log, first) = recorder();
		let (second_log, second) = recorder();

		let a = state.subscribe(first);
		let _b = state.subscribe(second);
		assert!(a.unsubscribe());

		state.set(1);

		assert!(first_log.borrow().is_empty());
		assert_eq!(*second_log.borrow(), vec![1]);
	}

	#[rstest]
	fn test_unsubscribe_twice_is_noop() {
		let state = State::new(0);
		let (log, subscriber) = recorder();
		let subscriber = Rc::new(subscriber);

		let s1 = Rc::clone(&subscriber);
		let a = state.subscribe(move |v| s1(v));
		let s2 = Rc::clone(&subscriber);
		let _b = state.subscribe(move |v| s2(v));

		assert!(a.unsubscribe());
		assert!(!a.unsubscribe());
		assert_eq!(state.subscriber_count(), 1);

		state.set(3);
		assert_eq!(*log.borrow(), vec![3]);
	}

	#[rstest]
	fn test_update_notifies_once() {
		let state = State::new(10);
		let (log, subscriber) = recorder();
		let _s = state.subscribe(subscriber);

		state.update(|n| *n += 5);

		assert_eq!(state.get(), 15);
		assert_eq!(*log.borrow(), vec![15]);
	}

	#[rstest]
	fn test_clones_share_value_and_subscribers() {
		let state = State::new("a".to_string());
		let other = state.clone();
		let (log, subscriber) = recorder();
		let _s = other.subscribe(subscriber);

		state.set("b".to_string());

		assert_eq!(other.get(), "b");
		assert_eq!(*log.borrow(), vec!["b".to_string()]);
	}

	#[rstest]
	fn test_subscription_outlives_state() {
		let state = State::new(0);
		let subscription = state.subscribe(|_| {});
		assert!(subscription.is_active());

		drop(state);

		assert!(!subscription.is_active());
		assert!(!subscription.unsubscribe());
	}

	#[rstest]
	fn test_reentrant_set_from_subscriber() {
		let state = State::new(0);
		let inner = state.clone();
		let _s = state.subscribe(move |v| {
			if *v < 3 {
				inner.set(v + 1);
			}
		});

		state.set(1);

		assert_eq!(state.get(), 3);
	}

	#[rstest]
	fn test_subscriber_added_during_notification_waits_for_next_change() {
		let state = State::new(0);
		let late_log = Rc::new(RefCell::new(Vec::new()));
		let handles = Rc::new(RefCell::new(Vec::new()));

		let state_clone = state.clone();
		let late_clone = Rc::clone(&late_log);
		let handles_clone = Rc::clone(&handles);
		let _s = state.subscribe(move |_| {
			if handles_clone.borrow().is_empty() {
				let late = Rc::clone(&late_clone);
				let handle = state_clone.subscribe(move |v| late.borrow_mut().push(*v));
				handles_clone.borrow_mut().push(handle);
			}
		});

		state.set(1);
		assert!(late_log.borrow().is_empty());

		state.set(2);
		assert_eq!(*late_log.borrow(), vec![2]);
	}

	#[rstest]
	fn test_subscriptions_erase_the_value_type() {
		let count = State::new(0_u8);
		let name = State::new(String::from("a"));
		let subscriptions = [count.subscribe(|_| {}), name.subscribe(|_| {})];

		assert!(subscriptions.iter().all(Subscription::is_active));
		assert!(subscriptions[1].unsubscribe());

		assert!(subscriptions[0].is_active());
		assert_eq!(count.subscriber_count(), 1);
		assert_eq!(name.subscriber_count(), 0);
	}

	#[rstest]
	fn test_debug_output() {
		let state = State::new(7);
		let _s = state.subscribe(|_| {});
		assert_eq!(format!("{state:?}"), "State { value: 7, subscribers: 1 }");
	}
}
