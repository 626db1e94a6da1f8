//! On-disk document format: a JSON object holding properties, the session log
//! and the body lines.

use super::properties::DocumentProperties;
use super::session_log::SessionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    pub version: u32,
    #[serde(default)]
    pub properties: DocumentProperties,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug)]
pub enum DocumentFileError {
    Io { path: PathBuf, err: std::io::Error },
    Parse { path: PathBuf, err: serde_json::Error },
    Version { path: PathBuf, found: u32 },
}

impl fmt::Display for DocumentFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFileError::Io { path, err } => write!(f, "{}: {err}", path.display()),
            DocumentFileError::Parse { path, err } => {
                write!(f, "{}: not a document file ({err})", path.display())
            }
            DocumentFileError::Version { path, found } => write!(
                f,
                "{}: format version {found} is newer than {FORMAT_VERSION}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DocumentFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentFileError::Io { err, .. } => Some(err),
            DocumentFileError::Parse { err, .. } => Some(err),
            DocumentFileError::Version { .. } => None,
        }
    }
}

impl DocumentFile {
    /// `Ok(None)` when `path` does not exist yet.
    pub fn load(path: &Path) -> Result<Option<Self>, DocumentFileError> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(DocumentFileError::Io {
                    path: path.to_path_buf(),
                    err,
                })
            }
        };
        let file: DocumentFile =
            serde_json::from_str(&data).map_err(|err| DocumentFileError::Parse {
                path: path.to_path_buf(),
                err,
            })?;
        if file.version > FORMAT_VERSION {
            return Err(DocumentFileError::Version {
                path: path.to_path_buf(),
                found: file.version,
            });
        }
        Ok(Some(file))
    }

    /// Writes next to `path` first, then renames over it.
    pub fn save(&self, path: &Path) -> Result<(), DocumentFileError> {
        let io_err = |err| DocumentFileError::Io {
            path: path.to_path_buf(),
            err,
        };
        let json = serde_json::to_string_pretty(self).map_err(|err| DocumentFileError::Parse {
            path: path.to_path_buf(),
            err,
        })?;

        let tmp = tmp_path(path);
        {
            let mut file = std::fs::File::create(&tmp).map_err(io_err)?;
            file.write_all(json.as_bytes()).map_err(io_err)?;
            file.write_all(b"\n").map_err(io_err)?;
            file.sync_all().map_err(io_err)?;
        }
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/models/document_file.rs"]
mod tests;
