//! Sidebar navigation. Only "All Orders" is a live page; the other entries
//! are placeholders for sections this dashboard does not ship.

use super::global_context::use_layout;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct NavGroup {
    label: &'static str,
    icon: &'static str,
    items: &'static [&'static str],
}

const ACTIVE_ITEM: &str = "All Orders";

const MAIN_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        icon: "layout-grid",
        items: &[],
    },
    NavGroup {
        label: "Products",
        icon: "package",
        items: &["All Products", "Categories", "Inventory"],
    },
    NavGroup {
        label: "Orders",
        icon: "orders",
        items: &["All Orders", "Returns", "Order Tracking"],
    },
    NavGroup {
        label: "Customers",
        icon: "users",
        items: &[],
    },
];

#[component]
fn NavGroupItem(group: &'static NavGroup) -> impl IntoView {
    let has_active = group.items.contains(&ACTIVE_ITEM);
    let open = RwSignal::new(has_active);

    view! {
        <li class="sidebar__group">
            <div
                class="sidebar__item"
                class:sidebar__item--active=has_active
                on:click=move |_| {
                    if !group.items.is_empty() {
                        open.update(|o| *o = !*o);
                    }
                }
            >
                {icon(group.icon)}
                <span class="sidebar__label">{group.label}</span>
                {(!group.items.is_empty()).then(|| icon("chevron-down"))}
            </div>
            <Show when=move || open.get() && !group.items.is_empty()>
                <ul class="sidebar__children">
                    {group
                        .items
                        .iter()
                        .map(|item| {
                            view! {
                                <li
                                    class="sidebar__child"
                                    class:sidebar__child--active=*item == ACTIVE_ITEM
                                >
                                    {*item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_layout();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || ctx.sidebar_collapsed.get()>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"O"</span>
                <span class="sidebar__brand-name">"Orders Admin"</span>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {MAIN_NAV
                        .iter()
                        .map(|group| view! { <NavGroupItem group=group /> })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
