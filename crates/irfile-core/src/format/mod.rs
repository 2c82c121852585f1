//! Text format codec for IR signal files.
//!
//! The codec follows a layered structure:
//! - `layout`: literal keys, header prefixes and tags (source of truth)
//! - `reader`: line iteration and field-value conventions
//! - `hex`: little-endian hex byte encoding of 32-bit fields
//! - `parser`: record accumulation (no direct string slicing)
//! - `writer`: inverse text form
//! - `error`: explicit, actionable errors
//!
//! Parsing and serialization are pure and perform no I/O; callers own the
//! byte buffers.

pub mod error;
pub mod hex;
pub mod layout;
pub mod parser;
pub(crate) mod reader;
pub mod writer;

pub use error::{HexError, ParseError};
pub use hex::{decode_le_hex32, encode_le_hex32};
pub use parser::{parse, parse_with};
pub use writer::serialize;
