//! File records attached to a notebook

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FileListError;

/// Ids arrive from the API either as JSON strings or as integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "RawId")]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<RawId> for $name {
            fn from(raw: RawId) -> Self {
                Self(raw.into())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// Identifier of a file attached to a notebook
    FileId
}

string_id! {
    /// Identifier of a notebook
    NotebookId
}

/// A single file's metadata as shown in a notebook's file list.
///
/// Filenames double as row keys and URL segments, so they must be unique
/// within one list. Nothing here enforces that; see [`check_unique_filenames`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub filename: String,
    /// Size in bytes, when known
    #[serde(default)]
    pub size: Option<i64>,
}

impl FileRecord {
    pub fn new(id: impl Into<FileId>, filename: impl Into<String>, size: Option<i64>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            size,
        }
    }
}

/// Parse a JSON array of file records.
///
/// Sizes must be integers or `null`; anything else is rejected here rather
/// than reaching the formatter.
pub fn parse_file_records(json: &str) -> Result<Vec<FileRecord>, FileListError> {
    Ok(serde_json::from_str(json)?)
}

/// Filenames that occur more than once, in order of their second occurrence
pub fn duplicate_filenames(files: &[FileRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for file in files {
        let name = file.filename.as_str();
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name);
        }
    }
    duplicates
}

/// Fail on the first filename that appears twice in the list
pub fn check_unique_filenames(files: &[FileRecord]) -> Result<(), FileListError> {
    match duplicate_filenames(files).first() {
        Some(name) => Err(FileListError::DuplicateFilename(name.to_string())),
        None => Ok(()),
    }
}
