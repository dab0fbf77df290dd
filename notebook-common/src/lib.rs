//! notebook-common - Pure types and logic for notebook file lists
//!
//! No UI framework here: records, size formatting, and the display model the
//! view renders from.

mod byte_size;
mod error;
mod file_list;
mod file_record;

pub use byte_size::{format_bytes, format_file_size};
pub use error::FileListError;
pub use file_list::{
    build_file_list, file_href, FileActions, FileListDisplay, FileRow, RowActions, FILES_HEADING,
    NO_FILES_TEXT,
};
pub use file_record::{
    check_unique_filenames, duplicate_filenames, parse_file_records, FileId, FileRecord,
    NotebookId,
};
