//! File-based source for offline browsing.
//!
//! Reads a saved API response from disk. The file goes through the same
//! decoding as a live response, including `message` error handling.

use crate::model::error::InputError;
use crate::model::{Country, FetchError};
use crate::source::decode::decode_response;
use std::path::{Path, PathBuf};
use tracing::info;

/// A JSON file holding an object-of-countries.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for an existing file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file.
    ///
    /// # Errors
    ///
    /// `Transport` when the file cannot be read, otherwise whatever
    /// decoding reports.
    pub fn fetch(&self) -> Result<Vec<Country>, FetchError> {
        info!(path = %self.path.display(), "Loading countries from file");
        let contents = std::fs::read_to_string(&self.path).map_err(InputError::from)?;
        decode_response(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_rejects_missing_file() {
        let missing = std::env::temp_dir().join("country_browser_missing_12345.json");
        let result = FileSource::new(&missing);
        assert!(
            matches!(result, Err(InputError::FileNotFound { ref path }) if path == &missing),
            "got: {:?}",
            result
        );
    }

    #[test]
    fn fetch_decodes_file_contents() {
        let path = std::env::temp_dir().join("country_browser_file_source_ok.json");
        fs::write(&path, r#"{"ABC": {"name": "Landia", "region": "Zed"}}"#).unwrap();

        let source = FileSource::new(&path).unwrap();
        let result = source.fetch();
        let _ = fs::remove_file(&path);

        let countries = result.unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name(), Some("Landia"));
    }

    #[test]
    fn fetch_surfaces_message_as_api_error() {
        let path = std::env::temp_dir().join("country_browser_file_source_msg.json");
        fs::write(&path, r#"{"message": "Invalid API key"}"#).unwrap();

        let result = FileSource::new(&path).unwrap().fetch();
        let _ = fs::remove_file(&path);

        assert_eq!(
            result.unwrap_err(),
            FetchError::Api {
                message: "Invalid API key".into()
            }
        );
    }

    #[test]
    fn fetch_of_deleted_file_is_transport_error() {
        let path = std::env::temp_dir().join("country_browser_file_source_gone.json");
        fs::write(&path, "{}").unwrap();
        let source = FileSource::new(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(matches!(source.fetch(), Err(FetchError::Transport(_))));
    }
}
