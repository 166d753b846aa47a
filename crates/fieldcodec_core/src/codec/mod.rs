mod array;
mod collection;
mod decl;
mod dispatch;
mod error;
mod json;
mod record;
mod scalar;
mod shape;
mod stored;
mod typed;

/// Array encode/decode over an explicit depth counter.
pub use array::{decode_array, encode_array};
/// Collection-of-arrays encode/decode.
pub use collection::{decode_collection, encode_collection};
/// Textual shape declaration parser.
pub use decl::parse_shape_decl;
/// Descriptor-driven entry points.
pub use dispatch::{FieldCodec, Route, decode, encode};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// JSON mapping for stored and typed values.
pub use json::{stored_from_json, stored_to_json, typed_from_json, typed_to_json};
/// Whole-record conversion helpers.
pub use record::{Document, Record, RecordCodec};
/// Single-scalar encode/decode.
pub use scalar::{decode_scalar, encode_scalar};
/// Field shape descriptor types.
pub use shape::{ScalarKind, SequenceKind, ShapeDescriptor};
/// Stored value model.
pub use stored::StoredValue;
/// Typed value model.
pub use typed::{ArrayValue, Scalar, TypedValue};
