//! Loading of the json configuration files.
use crate::Error;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default location of the letter value table.
pub const DEFAULT_LETTERS_FILE: &str = "letters.json";

/// Default location of the board state.
pub const DEFAULT_BOARD_FILE: &str = "board.json";

/// Read the json file at `path` and deserialize it.
/// ## Errors
/// - [`Error::ReadError`] if the file can not be read,
/// - [`Error::ParseError`] if the contents can not be deserialized to `T`.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read config file");
    parse_json(&contents, &path.display().to_string())
}

/// Deserialize json `contents`; `origin` names the source in errors.
pub(crate) fn parse_json<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, Error> {
    serde_json::from_str(contents).map_err(|source| Error::ParseError {
        path: String::from(origin),
        source,
    })
}
