use leptos::prelude::*;

/// Shell-wide UI flags, provided once by [`super::Shell`].
/// Nothing here is persisted; a reload starts from the defaults.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_collapsed: RwSignal<bool>,
    pub dark_mode: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: RwSignal::new(false),
            dark_mode: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|c| *c = !*c);
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|d| *d = !*d);
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context provided by the shell. Components outside it get a detached default.
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().unwrap_or_else(|| {
        log::warn!("LayoutContext not provided, using defaults");
        LayoutContext::new()
    })
}
