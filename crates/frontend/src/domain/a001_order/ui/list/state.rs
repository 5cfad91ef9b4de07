use contracts::domain::a001_order::{
    Order, OrderId, OrderStats, OrdersListQuery, OrdersResponse, ORDERS_PAGE_SIZE,
};
use contracts::enums::OrderFilterTab;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Identifies one `load()` attempt; only the latest ticket may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct OrdersListState {
    pub orders: Vec<Order>,
    pub stats: Option<OrderStats>,
    /// Selected ids; may include ids from other pages
    pub selected_ids: BTreeSet<OrderId>,
    pub active_tab: OrderFilterTab,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub is_loading: bool,
    pub is_loaded: bool,
    load_seq: u64,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            stats: None,
            selected_ids: BTreeSet::new(),
            active_tab: OrderFilterTab::All,
            page: 1,
            total_pages: 1,
            total_count: 0,
            is_loading: false,
            is_loaded: false,
            load_seq: 0,
        }
    }
}

impl OrdersListState {
    /// Switch the filter: back to page 1 with an empty selection
    pub fn change_tab(&mut self, tab: OrderFilterTab) {
        self.active_tab = tab;
        self.page = 1;
        self.selected_ids.clear();
    }

    /// Move to `page`. Returns false (and changes nothing) for page 0 or the current page.
    /// The selection is kept across pages.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn toggle_select(&mut self, id: OrderId) {
        if !self.selected_ids.remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    /// Every loaded row is selected (false for an empty page)
    pub fn all_selected(&self) -> bool {
        !self.orders.is_empty()
            && self
                .orders
                .iter()
                .all(|order| self.selected_ids.contains(&order.id))
    }

    /// Header checkbox: clear everything when the whole page is selected,
    /// otherwise add the visible rows to the selection
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected_ids.clear();
        } else {
            self.selected_ids
                .extend(self.orders.iter().map(|order| order.id));
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    pub fn deselect(&mut self, id: OrderId) {
        self.selected_ids.remove(&id);
    }

    pub fn is_selected(&self, id: OrderId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Selection in ascending id order
    pub fn selected_ids(&self) -> Vec<OrderId> {
        self.selected_ids.iter().copied().collect()
    }

    pub fn list_query(&self) -> OrdersListQuery {
        OrdersListQuery {
            status: self.active_tab,
            page: self.page,
            limit: ORDERS_PAGE_SIZE,
        }
    }

    /// Start a load; any earlier ticket becomes stale
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.is_loading = true;
        LoadTicket(self.load_seq)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_seq
    }

    /// Commit a finished load. Stale tickets are ignored; returns whether the result was applied.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        response: OrdersResponse,
        stats: OrderStats,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.orders = response.orders;
        self.total_count = response.total;
        self.total_pages = response.total_pages;
        self.stats = Some(stats);
        self.is_loading = false;
        self.is_loaded = true;
        true
    }

    /// A load failed: keep the previous data, stop the spinner if this was the latest load
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        true
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_order::{OrderCustomer, OrderStatus, PaymentStatus};

    pub(crate) fn order(id: u64, name: &str, amount: f64) -> Order {
        Order {
            id: OrderId(id),
            order_number: format!("#ORD{}", 1000 + id),
            customer: OrderCustomer {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                avatar: String::new(),
            },
            order_date: NaiveDate::from_ymd_opt(2024, 3, (id % 28 + 1) as u32).unwrap(),
            status: OrderStatus::Pending,
            total_amount: amount,
            payment_status: PaymentStatus::Unpaid,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub(crate) fn page_of(
        ids: std::ops::RangeInclusive<u64>,
        total: u64,
        total_pages: u32,
    ) -> OrdersResponse {
        OrdersResponse {
            orders: ids.map(|id| order(id, "Customer", id as f64)).collect(),
            total,
            page: 1,
            limit: ORDERS_PAGE_SIZE,
            total_pages,
        }
    }

    fn loaded(ids: std::ops::RangeInclusive<u64>) -> OrdersListState {
        let mut state = OrdersListState::default();
        let ticket = state.begin_load();
        state.apply_load(ticket, page_of(ids, 23, 3), OrderStats::default());
        state
    }

    #[test]
    fn tab_change_resets_page_and_selection() {
        let mut state = loaded(1..=10);
        state.go_to_page(3);
        state.toggle_select(OrderId(4));

        state.change_tab(OrderFilterTab::Pending);

        assert_eq!(state.page, 1);
        assert!(state.selected_ids.is_empty());
        assert_eq!(state.list_query().status, OrderFilterTab::Pending);
        assert_eq!(state.list_query().page, 1);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut state = loaded(1..=10);
        state.toggle_select(OrderId(2));
        let before = state.selected_ids.clone();

        state.toggle_select(OrderId(5));
        state.toggle_select(OrderId(5));

        assert_eq!(state.selected_ids, before);
    }

    #[test]
    fn all_selected_requires_non_empty_page() {
        let mut state = OrdersListState::default();
        assert!(!state.all_selected());
        state.toggle_select_all();
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn select_all_then_toggle_clears() {
        let mut state = loaded(1..=10);
        state.toggle_select_all();
        assert!(state.all_selected());
        assert_eq!(state.selected_ids.len(), 10);

        state.toggle_select_all();
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn select_all_keeps_ids_from_other_pages() {
        let mut state = loaded(1..=10);
        state.toggle_select(OrderId(42));

        state.toggle_select_all();

        assert!(state.is_selected(OrderId(42)));
        assert_eq!(state.selected_ids.len(), 11);
        assert!(state.all_selected());
    }

    #[test]
    fn page_change_keeps_selection() {
        let mut state = loaded(1..=10);
        state.toggle_select(OrderId(3));
        assert!(state.go_to_page(2));
        assert!(state.is_selected(OrderId(3)));
        assert!(!state.go_to_page(2));
        assert!(!state.go_to_page(0));
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut state = OrdersListState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.apply_load(second, page_of(11..=20, 23, 3), OrderStats::default()));
        assert!(!state.apply_load(first, page_of(1..=10, 23, 3), OrderStats::default()));

        assert_eq!(state.orders.first().map(|o| o.id), Some(OrderId(11)));
        assert!(!state.is_loading);
    }

    #[test]
    fn stale_failure_keeps_newer_load_spinning() {
        let mut state = OrdersListState::default();
        let first = state.begin_load();
        let _second = state.begin_load();

        assert!(!state.fail_load(first));
        assert!(state.is_loading);
    }

    #[test]
    fn failed_load_keeps_previous_data() {
        let mut state = loaded(1..=10);
        let ticket = state.begin_load();
        assert!(state.fail_load(ticket));
        assert_eq!(state.orders.len(), 10);
        assert_eq!(state.total_count, 23);
        assert!(!state.is_loading);
    }

    #[test]
    fn selected_ids_are_sorted() {
        let mut state = OrdersListState::default();
        state.toggle_select(OrderId(7));
        state.toggle_select(OrderId(3));
        assert_eq!(state.selected_ids(), vec![OrderId(3), OrderId(7)]);
    }
}
