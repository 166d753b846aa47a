use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar family carried by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
	/// Always-present character; empty input decodes to `'\0'`.
	UnboxedChar,
	/// Possibly-absent character; empty input decodes to absent.
	NullableChar,
}

impl ScalarKind {
	/// Value produced when the source holds no character.
	pub fn empty_value(self) -> crate::codec::Scalar {
		match self {
			Self::UnboxedChar => crate::codec::Scalar::ZERO,
			Self::NullableChar => crate::codec::Scalar::Absent,
		}
	}
}

/// Declared outer type of a depth-1, non-collection field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
	/// Fixed-shape array (`char[]`).
	#[default]
	Array,
	/// Variable-length list of scalars (`list<char>`).
	List,
}

/// Static shape of a field as resolved by the metadata layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeDescriptor {
	/// Scalar family at the leaves.
	pub scalar_kind: ScalarKind,
	/// Array nesting depth; `0` is a bare scalar.
	pub array_depth: u32,
	/// Whether the arrays are held in a variable-length collection.
	#[serde(default)]
	pub collection_wrapped: bool,
	/// Outer type for depth-1 shapes; does not affect conversion.
	#[serde(default)]
	pub sequence_kind: SequenceKind,
}

impl ShapeDescriptor {
	/// Bare scalar shape.
	pub fn scalar(scalar_kind: ScalarKind) -> Self {
		Self {
			scalar_kind,
			array_depth: 0,
			collection_wrapped: false,
			sequence_kind: SequenceKind::Array,
		}
	}

	/// Array shape of the given depth.
	pub fn array(scalar_kind: ScalarKind, array_depth: u32) -> Self {
		Self {
			scalar_kind,
			array_depth,
			collection_wrapped: false,
			sequence_kind: SequenceKind::Array,
		}
	}

	/// Variable-length list of bare scalars.
	pub fn list(scalar_kind: ScalarKind) -> Self {
		Self {
			scalar_kind,
			array_depth: 1,
			collection_wrapped: false,
			sequence_kind: SequenceKind::List,
		}
	}

	/// Collection whose elements are arrays of `array_depth`.
	pub fn collection(scalar_kind: ScalarKind, array_depth: u32) -> Self {
		Self {
			scalar_kind,
			array_depth,
			collection_wrapped: true,
			sequence_kind: SequenceKind::Array,
		}
	}

	/// Whether the descriptor names one of the routable shapes.
	pub fn is_well_formed(&self) -> bool {
		if self.collection_wrapped {
			return self.array_depth >= 1 && self.sequence_kind == SequenceKind::Array;
		}
		self.sequence_kind == SequenceKind::Array || self.array_depth == 1
	}
}

impl fmt::Display for ShapeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let leaf = match self.scalar_kind {
			ScalarKind::UnboxedChar => "char",
			ScalarKind::NullableChar => "char?",
		};
		let dims = "[]".repeat(self.array_depth as usize);

		if self.collection_wrapped {
			write!(f, "list<{leaf}{dims}>")
		} else if self.sequence_kind == SequenceKind::List {
			write!(f, "list<{leaf}>")
		} else {
			write!(f, "{leaf}{dims}")
		}
	}
}
