//! Menu pieces for dropdown menus
//!
//! - `MenuDropdown` - anchored dropdown with menu styling
//! - `MenuItem` - clickable item
//! - `MenuLinkItem` - item that navigates or downloads

use crate::components::{ChromelessButton, Dropdown};
use dioxus::prelude::*;

const ITEM_BASE: &str =
    "w-full text-left px-3 py-2 text-sm rounded-md transition-colors flex items-center gap-2";

fn item_variant(danger: bool) -> &'static str {
    if danger {
        "text-red-400 hover:bg-red-500/10"
    } else {
        "text-gray-300 hover:bg-gray-700 hover:text-white"
    }
}

/// Dropdown menu with standard styling
#[component]
pub fn MenuDropdown(
    anchor_id: String,
    is_open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        Dropdown {
            anchor_id,
            is_open,
            on_close,
            class: "bg-gray-800 rounded-lg shadow-lg border border-gray-700 p-1 min-w-40",
            div { role: "menu", {children} }
        }
    }
}

/// Individual menu item
#[component]
pub fn MenuItem(
    /// Destructive action (red text)
    #[props(default)]
    danger: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant = item_variant(danger);

    rsx! {
        ChromelessButton {
            class: Some(format!("{ITEM_BASE} {variant}")),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(e);
            },
            {children}
        }
    }
}

/// Menu item rendered as a link
#[component]
pub fn MenuLinkItem(
    href: String,
    /// Ask the browser to download the target instead of opening it
    #[props(default)]
    download: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant = item_variant(false);

    rsx! {
        a {
            role: "menuitem",
            class: "{ITEM_BASE} {variant}",
            href,
            download,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
