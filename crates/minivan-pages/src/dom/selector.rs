//! Selector parsing and matching
//!
//! Supports the subset of CSS selectors needed to locate mount points:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `div`, `*` | type / universal |
//! | `#root` | id |
//! | `.card` | class |
//! | `[name]`, `[name=value]`, `[name="value"]` | attribute presence / equality |
//! | `a b` | descendant |
//! | `a > b` | child |
//! | `a, b` | selector list |
//!
//! Pseudo-classes and the sibling combinators are rejected with a
//! [`SelectorError`].

/// Errors produced while parsing a selector
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
	/// Nothing but whitespace
	#[error("selector is empty")]
	Empty,

	/// A character that cannot start or continue the current construct
	#[error("unexpected character '{ch}' at position {position}")]
	UnexpectedChar {
		/// Offending character
		ch: char,
		/// Character index in the selector
		position: usize,
	},

	/// The selector ended inside a construct
	#[error("unexpected end of selector")]
	UnexpectedEnd,

	/// The rendering surface refused the selector
	#[error("rejected by surface: {0}")]
	Rejected(String),
}

/// Element view needed by the matcher
pub trait SelectorTarget: Sized {
	/// Tag name, or `None` for non-element nodes
	fn tag_name(&self) -> Option<String>;

	/// Attribute value, if present
	fn attribute(&self, name: &str) -> Option<String>;

	/// Parent element, if any
	fn parent_element(&self) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
	Descendant,
	Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
	name: String,
	value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
	tag: Option<String>,
	ids: Vec<String>,
	classes: Vec<String>,
	attributes: Vec<AttributeMatch>,
}

impl Compound {
	fn matches<E: SelectorTarget>(&self, element: &E) -> bool {
		let Some(tag) = element.tag_name() else {
			return false;
		};
		if let Some(expected) = &self.tag
			&& !expected.eq_ignore_ascii_case(&tag)
		{
			return false;
		}
		if !self.ids.is_empty() {
			let id = element.attribute("id");
			if !self.ids.iter().all(|expected| id.as_deref() == Some(expected)) {
				return false;
			}
		}
		if !self.classes.is_empty() {
			let class = element.attribute("class").unwrap_or_default();
			let classes: Vec<&str> = class.split_whitespace().collect();
			if !self
				.classes
				.iter()
				.all(|expected| classes.contains(&expected.as_str()))
			{
				return false;
			}
		}
		self.attributes.iter().all(|attr| {
			match (element.attribute(&attr.name), &attr.value) {
				(Some(actual), Some(expected)) => actual == *expected,
				(Some(_), None) => true,
				(None, _) => false,
			}
		})
	}
}

/// One chain of compounds joined by combinators (`a > b c`)
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
	compounds: Vec<Compound>,
	/// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`
	combinators: Vec<Combinator>,
}

impl Complex {
	fn matches<E: SelectorTarget>(&self, element: &E) -> bool {
		self.matches_from(self.compounds.len() - 1, element)
	}

	fn matches_from<E: SelectorTarget>(&self, index: usize, element: &E) -> bool {
		if !self.compounds[index].matches(element) {
			return false;
		}
		if index == 0 {
			return true;
		}
		match self.combinators[index - 1] {
			Combinator::Child => element
				.parent_element()
				.is_some_and(|parent| self.matches_from(index - 1, &parent)),
			Combinator::Descendant => {
				let mut ancestor = element.parent_element();
				while let Some(current) = ancestor {
					if self.matches_from(index - 1, &current) {
						return true;
					}
					ancestor = current.parent_element();
				}
				false
			}
		}
	}
}

/// A parsed selector list
///
/// # Example
///
/// ```
/// use minivan_pages::dom::Selector;
///
/// assert!(Selector::parse("#root > ul.items li[data-id=\"3\"]").is_ok());
/// assert!(Selector::parse("a:hover").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	source: String,
	alternatives: Vec<Complex>,
}

impl Selector {
	/// Parse `source`
	///
	/// # Errors
	///
	/// Returns a [`SelectorError`] for empty input or unsupported syntax.
	pub fn parse(source: &str) -> Result<Self, SelectorError> {
		if source.trim().is_empty() {
			return Err(SelectorError::Empty);
		}
		let alternatives = Parser::new(source).parse_list()?;
		Ok(Self {
			source: source.to_string(),
			alternatives,
		})
	}

	/// The text this selector was parsed from
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Whether `element` matches any alternative of the list
	pub fn matches<E: SelectorTarget>(&self, element: &E) -> bool {
		self.alternatives.iter().any(|complex| complex.matches(element))
	}
}

struct Parser {
	chars: Vec<char>,
	pos: usize,
}

impl Parser {
	fn new(source: &str) -> Self {
		Self {
			chars: source.chars().collect(),
			pos: 0,
		}
	}

	fn peek(&self) -> Option<char> {
		self.chars.get(self.pos).copied()
	}

	fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += 1;
		Some(ch)
	}

	fn skip_whitespace(&mut self) -> bool {
		let start = self.pos;
		while self.peek().is_some_and(char::is_whitespace) {
			self.pos += 1;
		}
		self.pos != start
	}

	fn unexpected(&self) -> SelectorError {
		match self.peek() {
			Some(ch) => SelectorError::UnexpectedChar {
				ch,
				position: self.pos,
			},
			None => SelectorError::UnexpectedEnd,
		}
	}

	fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
		if self.peek() == Some(expected) {
			self.pos += 1;
			Ok(())
		} else {
			Err(self.unexpected())
		}
	}

	fn parse_list(&mut self) -> Result<Vec<Complex>, SelectorError> {
		let mut list = Vec::new();
		loop {
			self.skip_whitespace();
			list.push(self.parse_complex()?);
			self.skip_whitespace();
			match self.peek() {
				None => return Ok(list),
				Some(',') => {
					self.pos += 1;
				}
				Some(_) => return Err(self.unexpected()),
			}
		}
	}

	fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
		let mut compounds = vec![self.parse_compound()?];
		let mut combinators = Vec::new();
		loop {
			let had_whitespace = self.skip_whitespace();
			match self.peek() {
				Some('>') => {
					self.pos += 1;
					self.skip_whitespace();
					combinators.push(Combinator::Child);
				}
				None | Some(',') => break,
				Some(_) if had_whitespace => combinators.push(Combinator::Descendant),
				Some(_) => return Err(self.unexpected()),
			}
			compounds.push(self.parse_compound()?);
		}
		Ok(Complex {
			compounds,
			combinators,
		})
	}

	fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
		let start = self.pos;
		let mut compound = Compound::default();

		match self.peek() {
			Some('*') => {
				self.pos += 1;
			}
			Some(ch) if is_ident_start(ch) => {
				compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
			}
			_ => {}
		}

		loop {
			match self.peek() {
				Some('#') => {
					self.pos += 1;
					compound.ids.push(self.parse_ident()?);
				}
				Some('.') => {
					self.pos += 1;
					compound.classes.push(self.parse_ident()?);
				}
				Some('[') => {
					self.pos += 1;
					compound.attributes.push(self.parse_attribute()?);
				}
				_ => break,
			}
		}

		if self.pos == start {
			return Err(self.unexpected());
		}
		Ok(compound)
	}

	fn parse_attribute(&mut self) -> Result<AttributeMatch, SelectorError> {
		self.skip_whitespace();
		let name = self.parse_ident()?;
		self.skip_whitespace();
		let value = if self.peek() == Some('=') {
			self.pos += 1;
			self.skip_whitespace();
			let value = match self.peek() {
				Some(quote @ ('"' | '\'')) => {
					self.pos += 1;
					self.parse_quoted(quote)?
				}
				_ => self.parse_unquoted()?,
			};
			self.skip_whitespace();
			Some(value)
		} else {
			None
		};
		self.expect(']')?;
		Ok(AttributeMatch { name, value })
	}

	fn parse_quoted(&mut self, quote: char) -> Result<String, SelectorError> {
		let mut value = String::new();
		loop {
			match self.bump() {
				Some(ch) if ch == quote => return Ok(value),
				Some(ch) => value.push(ch),
				None => return Err(SelectorError::UnexpectedEnd),
			}
		}
	}

	fn parse_unquoted(&mut self) -> Result<String, SelectorError> {
		let start = self.pos;
		while self.peek().is_some_and(is_ident_char) {
			self.pos += 1;
		}
		if self.pos == start {
			return Err(self.unexpected());
		}
		Ok(self.chars[start..self.pos].iter().collect())
	}

	fn parse_ident(&mut self) -> Result<String, SelectorError> {
		match self.peek() {
			Some(ch) if is_ident_start(ch) => {}
			_ => return Err(self.unexpected()),
		}
		let start = self.pos;
		while self.peek().is_some_and(is_ident_char) {
			self.pos += 1;
		}
		Ok(self.chars[start..self.pos].iter().collect())
	}
}

fn is_ident_start(ch: char) -> bool {
	ch.is_ascii_alphabetic() || ch == '_' || ch == '-' || !ch.is_ascii()
}

fn is_ident_char(ch: char) -> bool {
	is_ident_start(ch) || ch.is_ascii_digit()
}
