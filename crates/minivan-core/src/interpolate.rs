//! Text interpolation
//!
//! Two pure helpers for building text:
//!
//! - [`interpolate`] zips literal segments with values, the way a tagged
//!   template literal is evaluated: `segments[0], values[0], segments[1], ...`.
//! - [`interpolate_named`] replaces `{name}` placeholders from a lookup table.
//!   It is never applied implicitly by the element builder; callers opt in
//!   by rendering a template before handing it over as content.
//!
//! ## Example
//!
//! ```
//! use minivan_core::interpolate::interpolate;
//!
//! let text = interpolate(&["Count: ", " of ", ""], &["3", "10"]).unwrap();
//! assert_eq!(text, "Count: 3 of 10");
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Errors produced while interpolating text
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpolateError {
	/// Fewer values than segment gaps
	#[error(
		"missing interpolation value at index {index}: {segments} segments need {} values, got {values}",
		.segments - 1
	)]
	MissingValue {
		/// Index of the first value slot with nothing to fill it
		index: usize,
		/// Number of literal segments supplied
		segments: usize,
		/// Number of values supplied
		values: usize,
	},
}

/// Concatenates `segments` and `values` in alternation.
///
/// `N` segments take `N - 1` values. Surplus values are ignored. An empty
/// segment list produces an empty string.
///
/// # Errors
///
/// Returns [`InterpolateError::MissingValue`] when fewer than
/// `segments.len() - 1` values are supplied.
///
/// # Example
///
/// ```
/// use minivan_core::interpolate::interpolate;
///
/// assert_eq!(interpolate(&["a", "b", "c"], &["X", "Y"]).unwrap(), "aXbYc");
/// assert!(interpolate(&["a", "b", "c"], &["X"]).is_err());
/// ```
pub fn interpolate<S, V>(segments: &[S], values: &[V]) -> Result<String, InterpolateError>
where
	S: AsRef<str>,
	V: AsRef<str>,
{
	let Some((first, rest)) = segments.split_first() else {
		return Ok(String::new());
	};

	if values.len() < rest.len() {
		return Err(InterpolateError::MissingValue {
			index: values.len(),
			segments: segments.len(),
			values: values.len(),
		});
	}

	let capacity = segments.iter().map(|s| s.as_ref().len()).sum::<usize>()
		+ values[..rest.len()]
			.iter()
			.map(|v| v.as_ref().len())
			.sum::<usize>();
	let mut result = String::with_capacity(capacity);
	result.push_str(first.as_ref());
	for (segment, value) in rest.iter().zip(values) {
		result.push_str(value.as_ref());
		result.push_str(segment.as_ref());
	}
	Ok(result)
}

/// Replaces `{name}` placeholders in `template` with entries from `values`.
///
/// - `{{` and `}}` produce literal braces.
/// - Placeholders with no entry in `values` are kept verbatim.
/// - An unterminated `{` is kept verbatim along with the rest of the text.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use minivan_core::interpolate::interpolate_named;
///
/// let values = HashMap::from([("name", "Ada")]);
/// assert_eq!(interpolate_named("Hello, {name}! {{ok}}", &values), "Hello, Ada! {ok}");
/// ```
pub fn interpolate_named<K, V>(template: &str, values: &HashMap<K, V>) -> String
where
	K: Borrow<str> + Hash + Eq,
	V: AsRef<str>,
{
	let mut result = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(pos) = rest.find(['{', '}']) {
		result.push_str(&rest[..pos]);
		let tail = &rest[pos..];

		if tail.starts_with("{{") {
			result.push('{');
			rest = &tail[2..];
		} else if tail.starts_with("}}") {
			result.push('}');
			rest = &tail[2..];
		} else if tail.starts_with('}') {
			result.push('}');
			rest = &tail[1..];
		} else if let Some(end) = tail.find('}') {
			let name = &tail[1..end];
			match values.get(name) {
				Some(value) => result.push_str(value.as_ref()),
				None => result.push_str(&tail[..=end]),
			}
			rest = &tail[end + 1..];
		} else {
			result.push_str(tail);
			rest = "";
		}
	}

	result.push_str(rest);
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_interpolate_alternates_segments_and_values() {
		assert_eq!(interpolate(&["a", "b", "c"], &["X", "Y"]).unwrap(), "aXbYc");
	}

	#[rstest]
	#[case::single_segment(&["only"], &[], "only")]
	#[case::empty_segments(&[], &[], "")]
	#[case::empty_edges(&["", ""], &["mid"], "mid")]
	#[case::surplus_values(&["a", "b"], &["1", "2", "3"], "a1b")]
	fn test_interpolate_edges(
		#[case] segments: &[&str],
		#[case] values: &[&str],
		#[case] expected: &str,
	) {
		assert_eq!(interpolate(segments, values).unwrap(), expected);
	}

	#[rstest]
	fn test_interpolate_missing_value_is_an_error() {
		let err = interpolate(&["a", "b", "c"], &["X"]).unwrap_err();

		assert_eq!(
			err,
			InterpolateError::MissingValue {
				index: 1,
				segments: 3,
				values: 1,
			}
		);
		assert_eq!(
			err.to_string(),
			"missing interpolation value at index 1: 3 segments need 2 values, got 1"
		);
	}

	#[rstest]
	fn test_interpolate_accepts_owned_strings() {
		let segments = vec![String::from("n = "), String::new()];
		let values = vec![42.to_string()];
		assert_eq!(interpolate(&segments, &values).unwrap(), "n = 42");
	}

	#[rstest]
	#[case("Hello, {name}!", "Hello, Ada!")]
	#[case("{name}{name}", "AdaAda")]
	#[case("{missing} stays", "{missing} stays")]
	#[case("{{name}}", "{name}")]
	#[case("open { never closed", "open { never closed")]
	#[case("stray } brace", "stray } brace")]
	#[case("no placeholders", "no placeholders")]
	fn test_interpolate_named(#[case] template: &str, #[case] expected: &str) {
		let values = HashMap::from([("name", "Ada")]);
		assert_eq!(interpolate_named(template, &values), expected);
	}

	#[rstest]
	fn test_interpolate_named_with_owned_keys() {
		let values: HashMap<String, String> =
			HashMap::from([("count".to_string(), "3".to_string())]);
		assert_eq!(interpolate_named("{count} items", &values), "3 items");
	}

	proptest! {
		#[test]
		fn prop_interpolate_preserves_total_length(
			segments in proptest::collection::vec(".{0,8}", 1..6),
			filler in ".{0,8}",
		) {
			let values = vec![filler.clone(); segments.len() - 1];
			let result = interpolate(&segments, &values).unwrap();
			let expected_len = segments.iter().map(String::len).sum::<usize>()
				+ filler.len() * values.len();
			prop_assert_eq!(result.len(), expected_len);
			prop_assert!(result.starts_with(segments[0].as_str()));
		}
	}
}
