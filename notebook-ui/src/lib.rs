//! notebook-ui - Dioxus components for a notebook's attached files
//!
//! Pure view components: they take records and callbacks as props and hold no
//! data of their own beyond transient menu state.

pub mod components;

pub use components::*;
pub use notebook_common::{format_bytes, format_file_size, FileId, FileRecord, NotebookId};
