//! jsonfmt-core - Read a JSON file, pretty-print it back as a string.
//!
//! The single operation this crate exposes is [`stringify_file`]: open a
//! file, parse its whole contents as one JSON document, and return that
//! document re-serialized with 2-space indentation, object keys and array
//! elements in their original order. Failures come back as tagged
//! [`StringifyError`] kinds rather than a bare "no output".

pub mod error;
pub mod format;
pub mod stringify;

pub use error::{StringifyError, StringifyResult};
pub use format::{from_json_str, to_json_pretty};
pub use stringify::stringify_file;
