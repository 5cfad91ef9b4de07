pub mod global_context;
pub mod sidebar;
pub mod top_bar;

use global_context::LayoutContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use top_bar::TopBar;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |           TopBar             |
/// |  Sidebar  +------------------------------+
/// |           |           content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = LayoutContext::new();
    provide_context(ctx);

    view! {
        <div class="app-layout" class:app-layout--dark=move || ctx.dark_mode.get()>
            <Sidebar />
            <div class="app-body">
                <TopBar />
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
