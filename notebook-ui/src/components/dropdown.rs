//! Dropdown anchored to a trigger element, rendered with the native popover API
//!
//! The popover gives us top-layer rendering and light dismiss (click outside,
//! Escape). Position is computed from the anchor's bounding rect each time the
//! dropdown opens.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

/// Counter for generating unique dropdown IDs
static DROPDOWN_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const HIDDEN_STYLE: &str = "position: fixed; top: 0; left: 0; margin: 0; opacity: 0;";

/// Top-left corner for the floating element, in viewport pixels.
/// Sits below the anchor with right edges aligned, clamped to the viewport's left edge.
fn compute_position(anchor: &web_sys_x::DomRect, floating_width: f64, offset: f64) -> (f64, f64) {
    let top = anchor.bottom() + offset;
    let left = anchor.right() - floating_width;
    (left.max(offset), top)
}

/// Call a zero-argument method (`showPopover`, `hidePopover`) on an element if it exists
fn call_popover_method(element: &web_sys_x::Element, name: &str) {
    if let Ok(method) = js_sys_x::Reflect::get(element, &name.into()) {
        if let Some(func) = method.dyn_ref::<js_sys_x::Function>() {
            if let Err(err) = func.call0(element) {
                tracing::debug!("{} failed: {:?}", name, err);
            }
        }
    }
}

/// Dropdown component that positions content relative to an anchor element
#[component]
pub fn Dropdown(
    /// ID of the anchor element to position relative to
    anchor_id: String,
    /// Controls whether the dropdown is visible
    is_open: ReadSignal<bool>,
    /// Called when the dropdown should close (light dismiss)
    on_close: EventHandler<()>,
    /// Gap between anchor and dropdown in pixels
    #[props(default = 4.0)]
    offset: f64,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    // Set before we show/hide so ontoggle can tell our toggles from light dismiss
    let mut programmatic_toggle = use_signal(|| false);

    let popover_id = use_hook(|| {
        let id = DROPDOWN_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("dropdown-{}", id)
    });
    let popover_id_for_effect = popover_id.clone();

    use_effect(move || {
        let open = is_open();

        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(floating) = document.get_element_by_id(&popover_id_for_effect) else {
            return;
        };

        programmatic_toggle.set(true);

        if !open {
            call_popover_method(&floating, "hidePopover");
            return;
        }

        let _ = floating.set_attribute("style", HIDDEN_STYLE);
        call_popover_method(&floating, "showPopover");

        let Some(anchor) = document.get_element_by_id(&anchor_id) else {
            tracing::warn!("Dropdown anchor #{} not found", anchor_id);
            return;
        };
        let width = floating.get_bounding_client_rect().width();
        let (x, y) = compute_position(&anchor.get_bounding_client_rect(), width, offset);
        let style = format!(
            "position: fixed; top: {y}px; left: {x}px; margin: 0; width: max-content; opacity: 1;"
        );
        let _ = floating.set_attribute("style", &style);
    });

    let dropdown_class = class.unwrap_or_default();

    rsx! {
        div {
            id: "{popover_id}",
            popover: "auto",
            class: "{dropdown_class}",
            style: HIDDEN_STYLE,
            ontoggle: move |_| {
                if programmatic_toggle() {
                    programmatic_toggle.set(false);
                    return;
                }
                on_close.call(());
            },
            {children}
        }
    }
}
