use crate::codec::array::{array_label, decode_array, encode_array};
use crate::codec::collection::{collection_label, decode_collection, encode_collection};
use crate::codec::scalar::{SCALAR_LABEL, decode_scalar, encode_scalar};
use crate::codec::{CodecError, Result, ScalarKind, ShapeDescriptor, StoredValue, TypedValue};

/// Codec path selected for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
	/// Bare scalar.
	Scalar,
	/// Array of the given depth.
	Array {
		/// Array nesting depth (>= 1).
		depth: u32,
	},
	/// Collection of arrays of the given depth.
	Collection {
		/// Element array depth (>= 1).
		depth: u32,
	},
}

impl Route {
	/// Resolve the route for a descriptor, rejecting malformed combinations.
	pub fn for_shape(shape: &ShapeDescriptor) -> Result<Self> {
		if !shape.is_well_formed() {
			return Err(CodecError::type_mismatch("well-formed shape descriptor", shape.to_string()));
		}
		Ok(match (shape.collection_wrapped, shape.array_depth) {
			(false, 0) => Self::Scalar,
			(false, depth) => Self::Array { depth },
			(true, depth) => Self::Collection { depth },
		})
	}

	fn label(self) -> String {
		match self {
			Self::Scalar => SCALAR_LABEL.to_owned(),
			Self::Array { depth } => array_label(depth),
			Self::Collection { depth } => collection_label(depth),
		}
	}
}

/// Field codec bound to one resolved descriptor.
///
/// Built once per field; the descriptor is validated here so per-value calls only see routable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCodec {
	shape: ShapeDescriptor,
	route: Route,
}

impl FieldCodec {
	/// Validate `shape` and bind a codec to it.
	pub fn new(shape: ShapeDescriptor) -> Result<Self> {
		let route = Route::for_shape(&shape)?;
		tracing::debug!(%shape, ?route, "resolved field codec");
		Ok(Self { shape, route })
	}

	/// Descriptor this codec was built from.
	pub fn shape(&self) -> &ShapeDescriptor {
		&self.shape
	}

	/// Selected codec path.
	pub fn route(&self) -> Route {
		self.route
	}

	fn kind(&self) -> ScalarKind {
		self.shape.scalar_kind
	}

	/// Encode a typed value into its stored form.
	pub fn encode(&self, value: &TypedValue) -> Result<StoredValue> {
		tracing::trace!(route = ?self.route, "encode");
		match (self.route, value) {
			(Route::Scalar, TypedValue::Scalar(scalar)) => Ok(encode_scalar(*scalar)),
			(Route::Array { depth }, TypedValue::Array(array)) => encode_array(array, depth),
			(Route::Collection { depth }, TypedValue::Collection(items)) => encode_collection(items, depth),
			(route, value) => Err(CodecError::type_mismatch(route.label(), value.kind())),
		}
	}

	/// Decode a stored value into the typed shape of this field.
	pub fn decode(&self, stored: &StoredValue) -> Result<TypedValue> {
		tracing::trace!(route = ?self.route, stored = stored.kind(), "decode");
		match self.route {
			Route::Scalar => decode_scalar(stored, self.kind()).map(TypedValue::Scalar),
			Route::Array { depth } => decode_array(stored, self.kind(), depth).map(TypedValue::Array),
			Route::Collection { depth } => decode_collection(stored, self.kind(), depth).map(TypedValue::Collection),
		}
	}
}

/// Encode `value` for a one-off descriptor.
pub fn encode(value: &TypedValue, shape: &ShapeDescriptor) -> Result<StoredValue> {
	FieldCodec::new(*shape)?.encode(value)
}

/// Decode `stored` for a one-off descriptor.
pub fn decode(stored: &StoredValue, shape: &ShapeDescriptor) -> Result<TypedValue> {
	FieldCodec::new(*shape)?.decode(stored)
}
