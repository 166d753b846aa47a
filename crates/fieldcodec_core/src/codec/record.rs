use std::collections::BTreeMap;

use crate::codec::{CodecError, FieldCodec, Result, ShapeDescriptor, StoredValue, TypedValue};

/// Typed field values keyed by field name.
pub type Record = BTreeMap<String, TypedValue>;

/// Stored field values keyed by field name.
pub type Document = BTreeMap<String, StoredValue>;

/// Field codecs for every declared field of one entity type.
#[derive(Debug, Clone, Default)]
pub struct RecordCodec {
	fields: Vec<(String, FieldCodec)>,
}

impl RecordCodec {
	/// Build codecs for `(name, shape)` pairs, validating every descriptor up front.
	pub fn new<I, S>(fields: I) -> Result<Self>
	where
		I: IntoIterator<Item = (S, ShapeDescriptor)>,
		S: Into<String>,
	{
		let mut out: Vec<(String, FieldCodec)> = Vec::new();
		for (name, shape) in fields {
			let name = name.into();
			if out.iter().any(|(existing, _)| *existing == name) {
				return Err(CodecError::DuplicateField { field: name });
			}
			let codec = FieldCodec::new(shape).map_err(|err| field_error(&name, err))?;
			out.push((name, codec));
		}
		Ok(Self { fields: out })
	}

	/// Declared field names in declaration order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(name, _)| name.as_str())
	}

	/// Codec bound to `name`, if declared.
	pub fn field(&self, name: &str) -> Option<&FieldCodec> {
		self.fields.iter().find(|(field, _)| field == name).map(|(_, codec)| codec)
	}

	/// Encode the declared fields present in `record`; undeclared entries are ignored.
	pub fn encode_record(&self, record: &Record) -> Result<Document> {
		let mut document = Document::new();
		for (name, codec) in &self.fields {
			let Some(value) = record.get(name) else {
				continue;
			};
			let stored = codec.encode(value).map_err(|err| field_error(name, err))?;
			document.insert(name.clone(), stored);
		}
		Ok(document)
	}

	/// Decode every declared field; missing keys decode as absent.
	///
	/// The first failing field aborts the whole record.
	pub fn decode_document(&self, document: &Document) -> Result<Record> {
		let mut record = Record::new();
		for (name, codec) in &self.fields {
			let decoded = match document.get(name) {
				Some(stored) => codec.decode(stored),
				None => codec.decode(&StoredValue::Absent),
			};
			let value = decoded.map_err(|err| field_error(name, err))?;
			record.insert(name.clone(), value);
		}
		Ok(record)
	}
}

fn field_error(name: &str, err: CodecError) -> CodecError {
	tracing::debug!(field = name, error = %err, "field conversion failed");
	CodecError::Field {
		field: name.to_owned(),
		source: Box::new(err),
	}
}
