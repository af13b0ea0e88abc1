//! Integration tests for the observable state container
//!
//! These tests exercise State the way UI code uses it:
//! 1. Subscribers observe every change in order
//! 2. Unsubscribing is precise and idempotent
//! 3. State drives re-computation of derived values

use minivan_core::{State, Subscription, interpolate, state};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;

#[fixture]
fn counter() -> State<i32> {
	state(0)
}

/// Every subscriber is called exactly once per set, with the new value
#[rstest]
fn test_all_subscribers_called_once_with_new_value(counter: State<i32>) {
	let calls = Rc::new(RefCell::new(Vec::new()));

	let subscriptions: Vec<_> = (0..3)
		.map(|n| {
			let calls = Rc::clone(&calls);
			counter.subscribe(move |v| calls.borrow_mut().push((n, *v)))
		})
		.collect();

	counter.set(5);

	assert_eq!(counter.get(), 5);
	assert_eq!(*calls.borrow(), vec![(0, 5), (1, 5), (2, 5)]);
	assert_eq!(subscriptions.len(), 3);
}

/// Subscribe two listeners, unsubscribe the first, only the second runs
#[rstest]
fn test_unsubscribed_listener_is_not_invoked(counter: State<i32>) {
	let first_calls = Rc::new(RefCell::new(0));
	let second_calls = Rc::new(RefCell::new(0));

	let first = {
		let first_calls = Rc::clone(&first_calls);
		counter.subscribe(move |_| *first_calls.borrow_mut() += 1)
	};
	let second = {
		let second_calls = Rc::clone(&second_calls);
		counter.subscribe(move |_| *second_calls.borrow_mut() += 1)
	};

	first.unsubscribe();
	counter.set(1);

	assert_eq!(*first_calls.borrow(), 0);
	assert_eq!(*second_calls.borrow(), 1);
	assert!(!first.is_active());
	assert!(second.is_active());
}

/// A subscriber removed by an earlier subscriber still sees the in-flight value
#[rstest]
fn test_removal_during_notification_uses_snapshot(counter: State<i32>) {
	let victim_calls = Rc::new(RefCell::new(Vec::new()));
	let victim_handle = Rc::new(RefCell::new(None::<Subscription>));

	let killer = {
		let victim_handle = Rc::clone(&victim_handle);
		counter.subscribe(move |_| {
			if let Some(handle) = victim_handle.borrow().as_ref() {
				handle.unsubscribe();
			}
		})
	};
	let victim = {
		let victim_calls = Rc::clone(&victim_calls);
		counter.subscribe(move |v| victim_calls.borrow_mut().push(*v))
	};
	*victim_handle.borrow_mut() = Some(victim);

	counter.set(1);
	counter.set(2);

	assert_eq!(*victim_calls.borrow(), vec![1]);
	assert_eq!(counter.subscriber_count(), 1);
	killer.unsubscribe();
	assert_eq!(counter.subscriber_count(), 0);
}

/// Derived text follows the state through a subscriber
#[rstest]
fn test_state_drives_derived_text(counter: State<i32>) {
	let label = Rc::new(RefCell::new(String::new()));

	let _subscription = {
		let label = Rc::clone(&label);
		counter.subscribe(move |v| {
			*label.borrow_mut() = interpolate(&["Clicked ", " times"], &[v.to_string()])
				.expect("two segments take one value");
		})
	};

	counter.update(|n| *n += 1);
	counter.update(|n| *n += 1);

	assert_eq!(*label.borrow(), "Clicked 2 times");
}

/// Setting without subscribers only changes the value
#[rstest]
#[case(0)]
#[case(-7)]
#[case(i32::MAX)]
fn test_set_without_subscribers(counter: State<i32>, #[case] value: i32) {
	counter.set(value);
	assert_eq!(counter.get(), value);
	assert_eq!(counter.get(), counter.get());
}
