//! Muted notice box for empty states

use dioxus::prelude::*;

#[component]
pub fn SmallAttentionBlock(children: Element) -> Element {
    rsx! {
        div { class: "inline-block px-3 py-2 text-sm text-gray-400 bg-gray-800/50 border border-gray-700 rounded",
            {children}
        }
    }
}
