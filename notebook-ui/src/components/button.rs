//! Unstyled button base

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without visual styling.
/// Callers supply every class.
#[component]
pub fn ChromelessButton(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            id: id.as_deref(),
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_haspopup: if aria_expanded.is_some() { Some("menu") } else { None },
            aria_expanded: aria_expanded.map(|open| if open { "true" } else { "false" }),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
