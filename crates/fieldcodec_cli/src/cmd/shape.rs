use fieldcodec::codec::{Route, ShapeDescriptor};

use crate::cmd::util::{codec_for_decl, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Field shape declaration.
	pub decl: String,
	/// Print the descriptor and route as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct ShapeJson {
	decl: String,
	descriptor: ShapeDescriptor,
	route: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	depth: Option<u32>,
}

/// Resolve a shape declaration and print its descriptor and codec route.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args { decl, json } = args;
	let codec = codec_for_decl(&decl)?;
	let (route, depth) = match codec.route() {
		Route::Scalar => ("scalar", None),
		Route::Array { depth } => ("array", Some(depth)),
		Route::Collection { depth } => ("collection", Some(depth)),
	};

	if json {
		return emit_json(&ShapeJson {
			decl: codec.shape().to_string(),
			descriptor: *codec.shape(),
			route,
			depth,
		});
	}

	let shape = codec.shape();
	println!("decl: {shape}");
	println!("scalar_kind: {:?}", shape.scalar_kind);
	println!("array_depth: {}", shape.array_depth);
	println!("collection_wrapped: {}", shape.collection_wrapped);
	println!("sequence_kind: {:?}", shape.sequence_kind);
	match depth {
		Some(depth) => println!("route: {route} (depth {depth})"),
		None => println!("route: {route}"),
	}
	Ok(())
}
