/// Single-character application value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
	/// Present code point.
	Char(char),
	/// Missing nullable value.
	Absent,
}

impl Scalar {
	/// Defined zero value of an unboxed character.
	pub const ZERO: Self = Self::Char('\0');
}

/// Array of scalars, or array of nested arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayValue {
	/// Depth-1 array of scalars.
	Flat(Vec<Scalar>),
	/// Depth >= 2 array whose elements are arrays one level shallower.
	Nested(Vec<ArrayValue>),
}

impl ArrayValue {
	/// Flat array from the characters of `text`.
	pub fn from_chars(text: &str) -> Self {
		Self::Flat(text.chars().map(Scalar::Char).collect())
	}

	/// Empty array appropriate for `depth`.
	pub fn empty(depth: u32) -> Self {
		if depth <= 1 { Self::Flat(Vec::new()) } else { Self::Nested(Vec::new()) }
	}
}

/// Typed field value handed to and from the entity layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypedValue {
	/// Bare scalar field.
	Scalar(Scalar),
	/// Array field of any depth.
	Array(ArrayValue),
	/// Variable-length collection of arrays.
	Collection(Vec<ArrayValue>),
}

impl TypedValue {
	/// Stable kind label used in mismatch errors.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "typed scalar",
			Self::Array(_) => "typed array",
			Self::Collection(_) => "typed collection",
		}
	}
}
