use std::borrow::Cow;

/// Loosely-typed value as held by the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
	/// Missing or null.
	Absent,
	/// Single raw code point.
	RawScalar(char),
	/// String-like character sequence.
	CharSequence(String),
	/// Ordered sequence used for arrays, nested arrays, and collections.
	Sequence(Vec<StoredValue>),
}

impl StoredValue {
	/// Stable kind label used in mismatch errors and logs.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::RawScalar(_) => "raw scalar",
			Self::CharSequence(_) => "char sequence",
			Self::Sequence(_) => "sequence",
		}
	}

	/// Element count for sequence-like values; `None` for absent and raw scalars.
	pub fn sequence_len(&self) -> Option<usize> {
		match self {
			Self::CharSequence(text) => Some(text.chars().count()),
			Self::Sequence(items) => Some(items.len()),
			Self::Absent | Self::RawScalar(_) => None,
		}
	}

	/// View a sequence-like value as its ordered elements.
	///
	/// A char sequence yields one `RawScalar` per character; absent and raw scalars yield `None`.
	pub(crate) fn elements(&self) -> Option<Elements<'_>> {
		match self {
			Self::CharSequence(text) => Some(Elements::Chars(text.chars())),
			Self::Sequence(items) => Some(Elements::Items(items.iter())),
			Self::Absent | Self::RawScalar(_) => None,
		}
	}
}

/// Element iterator over a char sequence or sequence.
pub(crate) enum Elements<'a> {
	Chars(std::str::Chars<'a>),
	Items(std::slice::Iter<'a, StoredValue>),
}

impl<'a> Iterator for Elements<'a> {
	type Item = Cow<'a, StoredValue>;

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			Self::Chars(chars) => chars.next().map(|ch| Cow::Owned(StoredValue::RawScalar(ch))),
			Self::Items(items) => items.next().map(Cow::Borrowed),
		}
	}
}

impl From<char> for StoredValue {
	fn from(value: char) -> Self {
		Self::RawScalar(value)
	}
}

impl From<&str> for StoredValue {
	fn from(value: &str) -> Self {
		Self::CharSequence(value.to_owned())
	}
}
