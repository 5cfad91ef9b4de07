//! Click-outside-to-close dropdown.
//!
//! Each dropdown owns its open flag. A document-level `mousedown` listener is
//! registered only while the dropdown is open and removed when it closes or
//! the component unmounts.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Whether a pointer press should close an open dropdown
pub fn closes_on_press(is_open: bool, pressed_inside: bool) -> bool {
    is_open && !pressed_inside
}

#[component]
pub fn Dropdown(
    /// Open flag, owned by the caller so menu items can close it
    open: RwSignal<bool>,
    /// Extra class for the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Trigger button(s), always rendered
    #[prop(into)]
    trigger: ViewFn,
    /// Menu content, rendered only while open
    children: ChildrenFn,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let handle = window_event_listener(ev::mousedown, move |event| {
            let pressed_inside = match (
                container.get_untracked(),
                event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()),
            ) {
                (Some(root), Some(target)) => root.contains(Some(&target)),
                _ => false,
            };
            if closes_on_press(open.get_untracked(), pressed_inside) {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let children = StoredValue::new(children);

    view! {
        <div
            node_ref=container
            class=move || format!("dropdown {}", class.get().unwrap_or_default())
        >
            {trigger.run()}
            <Show when=move || open.get()>
                <div class="dropdown__menu">
                    {children.with_value(|c| c())}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outside_presses_close_an_open_dropdown() {
        assert!(closes_on_press(true, false));
        assert!(!closes_on_press(true, true));
        assert!(!closes_on_press(false, false));
    }
}
