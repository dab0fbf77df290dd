//! notebook-mocks - Web demo for the notebook files list
//!
//! Renders `FilesListView` with fixture data. The page owns the file list,
//! so deleting from the actions menu removes the row.

mod demo_data;

use demo_data::{demo_files, demo_notebook_id};
use dioxus::prelude::*;
use notebook_ui::{FileId, FilesListView};

#[component]
pub fn App() -> Element {
    let mut files = use_signal(demo_files);
    let mut is_user_account = use_signal(|| true);
    let notebook_id = demo_notebook_id();

    rsx! {
        style {
            r#"
            body {{ margin: 0; background: #111827; color: #e5e7eb; font-family: system-ui; }}
            "#
        }
        div { style: "padding: 24px; max-width: 720px;",
            div { style: "display: flex; gap: 16px; margin-bottom: 24px;",
                label {
                    input {
                        r#type: "checkbox",
                        checked: is_user_account(),
                        onchange: move |e| is_user_account.set(e.checked()),
                    }
                    " Notebook owner"
                }
                button { onclick: move |_| files.set(demo_files()), "Reset files" }
                button { onclick: move |_| files.set(Vec::new()), "Clear files" }
            }
            FilesListView {
                files: files(),
                is_user_account: is_user_account(),
                notebook_id,
                on_delete: move |id: FileId| {
                    tracing::info!("Removing file {} from demo notebook", id);
                    files.write().retain(|file| file.id != id);
                },
            }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
