//! Files attached to a notebook, as a table

use crate::components::icons::{EllipsisIcon, FileIcon};
use crate::components::{FileActionsMenu, SmallAttentionBlock};
use dioxus::prelude::*;
use notebook_common::{
    build_file_list, FileId, FileListDisplay, FileRecord, FileRow, NotebookId, RowActions,
};

/// Renders a notebook's files, or a "No Files" notice when there are none.
///
/// Rows appear in the order given and are keyed by filename. The actions
/// column only exists for the notebook owner (`is_user_account`).
#[component]
pub fn FilesListView(
    files: Vec<FileRecord>,
    is_user_account: bool,
    notebook_id: NotebookId,
    on_delete: EventHandler<FileId>,
) -> Element {
    let (heading, rows) = match build_file_list(&files, is_user_account, &notebook_id) {
        FileListDisplay::Placeholder { text } => {
            return rsx! {
                SmallAttentionBlock { "{text}" }
            };
        }
        FileListDisplay::Table { heading, rows } => (heading, rows),
    };

    rsx! {
        h3 { class: "text-lg font-semibold text-white mb-2", "{heading}" }
        table { class: "border-collapse",
            tbody {
                for row in rows {
                    FileRowView { key: "{row.key}", row: row.clone(), on_delete }
                }
            }
        }
    }
}

/// One file: icon, link, size, and the owner's actions cell
#[component]
fn FileRowView(row: FileRow, on_delete: EventHandler<FileId>) -> Element {
    let actions_cell = match row.actions {
        RowActions::Hidden => None,
        RowActions::Menu(actions) => {
            let file_id = actions.file_id.clone();
            let notebook_id = actions.notebook_id.clone();
            let filename = actions.filename.clone();
            Some(rsx! {
                td { class: "p-1 align-middle",
                    FileActionsMenu {
                        trigger_element: rsx! {
                            EllipsisIcon { class: "w-4 h-4" }
                        },
                        file_id,
                        notebook_id,
                        filename,
                        on_delete: move |_| actions.delete(|id| on_delete.call(id)),
                    }
                }
            })
        }
    };

    rsx! {
        tr { class: "text-sm",
            td { class: "w-6 p-1 align-middle text-gray-500", FileIcon {} }
            td { class: "px-3 py-1 align-middle min-w-32",
                a { class: "text-white hover:underline", href: "{row.href}", "{row.filename}" }
            }
            td { class: "p-1 align-middle text-xs italic text-gray-500", "{row.size_label}" }
            {actions_cell}
        }
    }
}
