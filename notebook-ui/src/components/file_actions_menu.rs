//! Per-file actions menu (download, delete)

use crate::components::icons::{DownloadIcon, TrashIcon};
use crate::components::{ChromelessButton, MenuDropdown, MenuItem, MenuLinkItem};
use dioxus::prelude::*;
use notebook_common::{file_href, FileId, NotebookId};

/// Actions for one file, opened from `trigger_element`
#[component]
pub fn FileActionsMenu(
    /// Content of the button that opens the menu
    trigger_element: Element,
    file_id: FileId,
    notebook_id: NotebookId,
    filename: String,
    /// Called when the user picks Delete
    on_delete: EventHandler<()>,
) -> Element {
    let mut show_menu = use_signal(|| false);
    let is_open: ReadSignal<bool> = show_menu.into();
    // Keyed on the file id so recycled rows never share an anchor
    let anchor_id = format!("file-menu-{}", file_id);
    let href = file_href(&notebook_id, &filename);

    rsx! {
        ChromelessButton {
            id: Some(anchor_id.clone()),
            class: Some(
                "px-2 py-1 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                    .to_string(),
            ),
            aria_label: Some(format!("Actions for {filename}")),
            aria_expanded: Some(is_open()),
            onclick: move |_| show_menu.set(!show_menu()),
            {trigger_element}
        }

        MenuDropdown {
            anchor_id: anchor_id.clone(),
            is_open,
            on_close: move |_| show_menu.set(false),

            MenuLinkItem {
                href,
                download: Some(filename.clone()),
                onclick: move |_| show_menu.set(false),
                DownloadIcon { class: "w-4 h-4" }
                "Download"
            }
            MenuItem {
                danger: true,
                onclick: move |_| {
                    show_menu.set(false);
                    on_delete.call(());
                },
                TrashIcon { class: "w-4 h-4" }
                "Delete"
            }
        }
    }
}
