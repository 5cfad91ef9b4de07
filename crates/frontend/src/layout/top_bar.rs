use super::global_context::use_layout;
use crate::shared::components::ui::{Avatar, Button};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_layout();

    view! {
        <header class="top-bar">
            <div class="top-bar__left">
                <Button
                    variant="ghost"
                    size="icon"
                    title="Toggle sidebar"
                    on_click=Callback::new(move |_| ctx.toggle_sidebar())
                >
                    {icon("panel-left")}
                </Button>
                <h1 class="top-bar__title">"Orders"</h1>
            </div>
            <div class="top-bar__right">
                <Button
                    variant="ghost"
                    size="icon"
                    title=Signal::derive(move || {
                        if ctx.dark_mode.get() { "Light mode" } else { "Dark mode" }.to_string()
                    })
                    on_click=Callback::new(move |_| ctx.toggle_dark_mode())
                >
                    {move || if ctx.dark_mode.get() { icon("sun") } else { icon("moon") }}
                </Button>
                <Avatar name="Admin" />
            </div>
        </header>
    }
}
