//! The read-parse-pretty-print operation.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{StringifyError, StringifyResult};
use crate::format::{from_json_str, to_json_pretty};

/// Reads the file at `path`, parses it as one JSON document, and returns
/// the document re-serialized with 2-space indentation.
///
/// The whole document is held in memory; no streaming. The file handle is
/// closed before this returns, on every path. Each call is independent:
/// nothing is cached, and re-running on an unmodified file yields an
/// identical string.
///
/// # Errors
///
/// - [`StringifyError::NotFound`] if `path` does not resolve to a
///   readable file.
/// - [`StringifyError::PermissionDenied`] if reading is refused.
/// - [`StringifyError::MalformedJson`] if the contents are not a valid
///   JSON document (an empty file included).
/// - [`StringifyError::Io`] for any other read failure.
pub fn stringify_file(path: impl AsRef<Path>) -> StringifyResult<String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StringifyError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => StringifyError::PermissionDenied(path.to_path_buf()),
        _ => StringifyError::Io(e),
    })?;

    let document = from_json_str(&contents)?;
    to_json_pretty(&document)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("failed to write temp file");
        file
    }

    #[test]
    fn test_stringify_valid_document() {
        let file = write_temp(r#"{"name": "test"}"#);

        let out = stringify_file(file.path()).expect("stringify should work");
        assert_eq!(out, "{\n  \"name\": \"test\"\n}");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = stringify_file("/definitely/missing/path.json");
        assert!(matches!(result, Err(StringifyError::NotFound(_))));
    }

    #[test]
    fn test_not_found_names_the_path() {
        let err = stringify_file("/definitely/missing/path.json")
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("/definitely/missing/path.json"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let file = write_temp("{invalid json");

        let result = stringify_file(file.path());
        assert!(matches!(result, Err(StringifyError::MalformedJson(_))));
    }

    #[test]
    fn test_empty_file_is_malformed() {
        let file = write_temp("");

        let result = stringify_file(file.path());
        assert!(matches!(result, Err(StringifyError::MalformedJson(_))));
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let result = stringify_file(dir.path());
        assert!(matches!(result, Err(StringifyError::Io(_))));
    }
}
