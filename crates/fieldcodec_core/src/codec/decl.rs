use crate::codec::{CodecError, Result, ScalarKind, ShapeDescriptor};

/// Parse a compact shape declaration into a validated descriptor.
///
/// Accepted forms: `char`, `char?`, `char[]`, `char?[][]`, `list<char?>`, `list<char[]>`.
pub fn parse_shape_decl(raw: &str) -> Result<ShapeDescriptor> {
	let invalid = || CodecError::InvalidShapeDecl { decl: raw.to_owned() };
	let trimmed = raw.trim();

	let shape = if let Some(rest) = trimmed.strip_prefix("list") {
		let inner = rest
			.trim_start()
			.strip_prefix('<')
			.and_then(|item| item.strip_suffix('>'))
			.ok_or_else(invalid)?;
		let (scalar_kind, depth) = parse_leaf_with_dims(inner).ok_or_else(invalid)?;
		if depth == 0 {
			ShapeDescriptor::list(scalar_kind)
		} else {
			ShapeDescriptor::collection(scalar_kind, depth)
		}
	} else {
		let (scalar_kind, depth) = parse_leaf_with_dims(trimmed).ok_or_else(invalid)?;
		ShapeDescriptor::array(scalar_kind, depth)
	};

	Ok(shape)
}

fn parse_leaf_with_dims(raw: &str) -> Option<(ScalarKind, u32)> {
	let mut tail = raw.trim().strip_prefix("char")?;
	let scalar_kind = match tail.strip_prefix('?') {
		Some(rest) => {
			tail = rest;
			ScalarKind::NullableChar
		}
		None => ScalarKind::UnboxedChar,
	};

	let mut depth = 0_u32;
	loop {
		tail = tail.trim_start();
		if tail.is_empty() {
			return Some((scalar_kind, depth));
		}
		tail = tail.strip_prefix('[')?.trim_start().strip_prefix(']')?;
		depth = depth.checked_add(1)?;
	}
}
