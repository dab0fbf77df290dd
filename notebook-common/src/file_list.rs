//! Display model for a notebook's file list
//!
//! `build_file_list` decides everything the view shows: placeholder or table,
//! row order, link targets, size labels, and whether a row gets an actions
//! menu. The UI layer only turns this model into markup.

use crate::byte_size::format_file_size;
use crate::file_record::{duplicate_filenames, FileId, FileRecord, NotebookId};

pub const FILES_HEADING: &str = "Files";
pub const NO_FILES_TEXT: &str = "No Files";

/// What the file list renders for one set of props
#[derive(Debug, Clone, PartialEq)]
pub enum FileListDisplay {
    /// Shown instead of the table when there are no files
    Placeholder { text: &'static str },
    Table {
        heading: &'static str,
        rows: Vec<FileRow>,
    },
}

impl FileListDisplay {
    pub fn rows(&self) -> &[FileRow] {
        match self {
            FileListDisplay::Placeholder { .. } => &[],
            FileListDisplay::Table { rows, .. } => rows,
        }
    }
}

/// One table row: icon, link, size, and optionally an actions menu
#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    /// Stable identity across renders (the filename)
    pub key: String,
    pub file_id: FileId,
    pub filename: String,
    pub href: String,
    pub size_label: String,
    pub actions: RowActions,
}

/// Whether a row carries the actions column
#[derive(Debug, Clone, PartialEq)]
pub enum RowActions {
    Hidden,
    Menu(FileActions),
}

/// Parameters handed to a row's actions menu
#[derive(Debug, Clone, PartialEq)]
pub struct FileActions {
    pub file_id: FileId,
    pub notebook_id: NotebookId,
    pub filename: String,
}

impl FileActions {
    /// Invoke `on_delete` with this row's file id
    pub fn delete(&self, on_delete: impl FnOnce(FileId)) {
        tracing::debug!(
            "Deleting file {} ({}) from notebook {}",
            self.file_id,
            self.filename,
            self.notebook_id
        );
        on_delete(self.file_id.clone());
    }
}

/// Link target for a file. Segments are inserted as given; routing owns escaping.
pub fn file_href(notebook_id: &NotebookId, filename: &str) -> String {
    format!("/notebooks/{}/files/{}", notebook_id, filename)
}

/// Build the display model for a notebook's files, keeping the caller's order
pub fn build_file_list(
    files: &[FileRecord],
    is_user_account: bool,
    notebook_id: &NotebookId,
) -> FileListDisplay {
    if files.is_empty() {
        return FileListDisplay::Placeholder {
            text: NO_FILES_TEXT,
        };
    }

    let duplicates = duplicate_filenames(files);
    if !duplicates.is_empty() {
        tracing::warn!(
            "Notebook {} has duplicate filenames, row identity is ambiguous: {:?}",
            notebook_id,
            duplicates
        );
    }

    let rows = files
        .iter()
        .map(|file| FileRow {
            key: file.filename.clone(),
            file_id: file.id.clone(),
            filename: file.filename.clone(),
            href: file_href(notebook_id, &file.filename),
            size_label: format_file_size(file.size),
            actions: if is_user_account {
                RowActions::Menu(FileActions {
                    file_id: file.id.clone(),
                    notebook_id: notebook_id.clone(),
                    filename: file.filename.clone(),
                })
            } else {
                RowActions::Hidden
            },
        })
        .collect();

    FileListDisplay::Table {
        heading: FILES_HEADING,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn notebook() -> NotebookId {
        NotebookId::new("nb-1")
    }

    #[test]
    fn empty_list_is_placeholder() {
        let display = build_file_list(&[], true, &notebook());
        assert_eq!(
            display,
            FileListDisplay::Placeholder {
                text: NO_FILES_TEXT
            }
        );
        assert!(display.rows().is_empty());
    }

    #[test]
    fn guest_rows_have_no_actions() {
        let files = vec![FileRecord::new("1", "a.txt", Some(10))];
        let display = build_file_list(&files, false, &notebook());

        let FileListDisplay::Table { heading, rows } = display else {
            panic!("expected a table");
        };
        assert_eq!(heading, "Files");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "a.txt");
        assert_eq!(rows[0].filename, "a.txt");
        assert_eq!(rows[0].href, "/notebooks/nb-1/files/a.txt");
        assert_eq!(rows[0].size_label, "10 b");
        assert_eq!(rows[0].actions, RowActions::Hidden);
    }

    #[test]
    fn owner_rows_get_actions_bound_to_file() {
        let files = vec![FileRecord::new("1", "a.txt", Some(10))];
        let display = build_file_list(&files, true, &notebook());

        let rows = display.rows();
        assert_eq!(rows.len(), 1);
        let RowActions::Menu(actions) = &rows[0].actions else {
            panic!("expected an actions menu");
        };
        assert_eq!(actions.file_id, FileId::new("1"));
        assert_eq!(actions.notebook_id, notebook());
        assert_eq!(actions.filename, "a.txt");

        let deleted = RefCell::new(Vec::new());
        actions.delete(|id| deleted.borrow_mut().push(id));
        assert_eq!(deleted.into_inner(), vec![FileId::new("1")]);
    }

    #[test]
    fn rows_keep_input_order() {
        let files = vec![
            FileRecord::new("3", "zeta.csv", None),
            FileRecord::new("1", "alpha.csv", None),
            FileRecord::new("2", "mid.csv", None),
        ];
        let display = build_file_list(&files, false, &notebook());

        let names: Vec<&str> = display.rows().iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["zeta.csv", "alpha.csv", "mid.csv"]);
    }

    #[test]
    fn unknown_size_renders_empty_label() {
        let files = vec![FileRecord::new("1", "a.txt", None)];
        let display = build_file_list(&files, false, &notebook());
        assert_eq!(display.rows()[0].size_label, "");
    }

    #[test]
    fn href_is_not_escaped() {
        let href = file_href(&NotebookId::new("42"), "my report.pdf");
        assert_eq!(href, "/notebooks/42/files/my report.pdf");
    }

    #[test]
    fn duplicate_filenames_still_render() {
        let files = vec![
            FileRecord::new("1", "a.txt", None),
            FileRecord::new("2", "a.txt", None),
        ];
        let display = build_file_list(&files, true, &notebook());
        assert_eq!(display.rows().len(), 2);
        assert_eq!(display.rows()[1].file_id, FileId::new("2"));
    }
}
