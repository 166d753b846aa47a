/// Stored-to-typed decode command.
pub mod decode;
/// Typed-to-stored encode command.
pub mod encode;
/// CLI error type.
pub mod error;
/// Encode-then-decode verification command.
pub mod roundtrip;
/// Shape declaration inspection command.
pub mod shape;
/// Shared argument parsing and output helpers.
pub mod util;

pub use error::{CliError, Result};
