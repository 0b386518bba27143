//! Shared file input and output plumbing for CLI commands.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use larder_fs::{file_is_file, open_utf8_file, write_utf8_file};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CliError;

/// Ensure `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON document from `path`.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON to `output`, or to `writer` when no file is
/// configured.
pub(crate) fn emit_json<T: Serialize>(
    value: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    payload.push('\n');
    if let Some(path) = output {
        log::debug!("writing {} bytes to {path}", payload.len());
        return write_utf8_file(path, &payload).map_err(|source| CliError::WriteOutputFile {
            path: path.to_path_buf(),
            source,
        });
    }
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)
}
