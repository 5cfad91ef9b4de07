use crate::shared::icons::icon;
use leptos::prelude::*;

/// Entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons for `current` of `total` (1-indexed).
///
/// Up to 7 pages are all shown; otherwise the first and last page stay
/// visible around a window near the current page.
pub fn page_numbers(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

/// 1-based (start, end) of the entries shown on `page`; (0, 0) when empty
pub fn entry_range(page: u32, limit: u32, total: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let start = u64::from(page.saturating_sub(1)) * u64::from(limit) + 1;
    let end = (u64::from(page) * u64::from(limit)).min(total);
    (start, end)
}

/// PaginationControls component: summary, previous/next and page numbers
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Page size
    page_size: u32,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let summary = move || {
        let (start, end) = entry_range(current_page.get(), page_size, total_count.get());
        format!("Showing {}-{} of {} entries", start, end, total_count.get())
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{summary}</span>
            <div class="pagination-controls__pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    {icon("chevron-left")}
                    "Previous"
                </button>
                {move || {
                    let current = current_page.get();
                    page_numbers(current, total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Ellipsis => {
                                view! { <span class="pagination-ellipsis">"..."</span> }.into_any()
                            }
                            PageItem::Page(page) => {
                                view! {
                                    <button
                                        class="pagination-btn"
                                        class:pagination-btn--active={page == current}
                                        on:click=move |_| on_page_change.run(page)
                                    >
                                        {page.to_string()}
                                    </button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Next"
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn few_pages_are_all_listed() {
        assert_eq!(page_numbers(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_numbers(1, 7).len(), 7);
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn window_near_start() {
        assert_eq!(
            page_numbers(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn window_near_end() {
        assert_eq!(
            page_numbers(19, 20),
            vec![Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_numbers(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn entry_range_for_partial_last_page() {
        assert_eq!(entry_range(1, 10, 23), (1, 10));
        assert_eq!(entry_range(3, 10, 23), (21, 23));
        assert_eq!(entry_range(1, 10, 0), (0, 0));
    }
}
