//! Orders list controller
//!
//! Async operations over [`OrdersListState`]: loading, filter and page changes,
//! single-order mutations and bulk actions. Nothing is applied optimistically;
//! every successful mutation is followed by a full reload of list and stats.

use super::state::OrdersListState;
use crate::domain::a001_order::api::OrdersApi;
use crate::shared::api_utils::ApiError;
use contracts::domain::a001_order::{CreateOrderDto, Order, OrderId, OrderStatus, UpdateOrderDto};
use contracts::enums::OrderFilterTab;
use leptos::prelude::*;

/// Where the list state lives. `None` means the state is gone (view unmounted).
pub trait ListStore: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&OrdersListState) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut OrdersListState) -> R) -> Option<R>;
}

impl ListStore for RwSignal<OrdersListState> {
    fn read<R>(&self, f: impl FnOnce(&OrdersListState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut OrdersListState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Result of a `load()` that did not fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load started meanwhile, or the view is gone
    Discarded,
}

#[derive(Clone, Copy)]
pub struct OrdersController<A, S> {
    api: A,
    store: S,
}

impl<A, S> OrdersController<A, S>
where
    A: OrdersApi + Clone + 'static,
    S: ListStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the current page and the stats together; commit both or neither
    pub async fn load(&self) -> Result<LoadOutcome, ApiError> {
        let Some((ticket, query)) = self.store.write(|s| (s.begin_load(), s.list_query())) else {
            return Ok(LoadOutcome::Discarded);
        };
        log::debug!(
            "loading orders: status={} page={} limit={}",
            query.status,
            query.page,
            query.limit
        );

        let result =
            futures::future::try_join(self.api.list_orders(&query), self.api.order_stats()).await;

        match result {
            Ok((page, stats)) => {
                let applied = self
                    .store
                    .write(|s| s.apply_load(ticket, page, stats))
                    .unwrap_or(false);
                if applied {
                    Ok(LoadOutcome::Applied)
                } else {
                    log::debug!("discarding stale orders response");
                    Ok(LoadOutcome::Discarded)
                }
            }
            Err(e) => {
                log::error!("Failed to load orders: {}", e);
                self.store.write(|s| s.fail_load(ticket));
                Err(e)
            }
        }
    }

    /// Reload after a mutation; a failed reload is already logged by `load`
    async fn reload(&self) {
        let _ = self.load().await;
    }

    pub async fn change_tab(&self, tab: OrderFilterTab) {
        if self.store.write(|s| s.change_tab(tab)).is_some() {
            self.reload().await;
        }
    }

    pub async fn go_to_page(&self, page: u32) {
        if self.store.write(|s| s.go_to_page(page)).unwrap_or(false) {
            self.reload().await;
        }
    }

    pub fn toggle_select(&self, id: OrderId) {
        self.store.write(|s| s.toggle_select(id));
    }

    pub fn toggle_select_all(&self) {
        self.store.write(|s| s.toggle_select_all());
    }

    pub fn clear_selection(&self) {
        self.store.write(|s| s.clear_selection());
    }

    pub fn selected_ids(&self) -> Vec<OrderId> {
        self.store.read(|s| s.selected_ids()).unwrap_or_default()
    }

    pub async fn create_order(&self, dto: CreateOrderDto) -> Result<Order, ApiError> {
        let order = self.api.create_order(&dto).await.map_err(|e| {
            log::error!("Failed to create order: {}", e);
            e
        })?;
        self.reload().await;
        Ok(order)
    }

    pub async fn edit_order(&self, id: OrderId, patch: UpdateOrderDto) -> Result<Order, ApiError> {
        let order = self.api.update_order(id, &patch).await.map_err(|e| {
            log::error!("Failed to update order {}: {}", id, e);
            e
        })?;
        self.reload().await;
        Ok(order)
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.api.delete_order(id).await.map_err(|e| {
            log::error!("Failed to delete order {}: {}", id, e);
            e
        })?;
        self.store.write(|s| s.deselect(id));
        self.reload().await;
        Ok(())
    }

    /// Row menu duplicate; the selection is left as it is
    pub async fn duplicate_order(&self, id: OrderId) -> Result<u64, ApiError> {
        let response = self.api.bulk_duplicate(&[id]).await.map_err(|e| {
            log::error!("Failed to duplicate order {}: {}", id, e);
            e
        })?;
        self.reload().await;
        Ok(response.duplicated_count)
    }

    /// Duplicate `ids`; returns how many copies the server made
    pub async fn bulk_duplicate(&self, ids: Vec<OrderId>) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let response = self.api.bulk_duplicate(&ids).await.map_err(|e| {
            log::error!("Failed to duplicate orders: {}", e);
            e
        })?;
        self.finish_bulk().await;
        Ok(response.duplicated_count)
    }

    pub async fn bulk_delete(&self, ids: Vec<OrderId>) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let response = self.api.bulk_delete(&ids).await.map_err(|e| {
            log::error!("Failed to bulk delete: {}", e);
            e
        })?;
        self.finish_bulk().await;
        Ok(response.deleted_count)
    }

    pub async fn bulk_update_status(
        &self,
        ids: Vec<OrderId>,
        status: OrderStatus,
    ) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let response = self
            .api
            .bulk_update_status(&ids, &status)
            .await
            .map_err(|e| {
                log::error!("Failed to bulk update status: {}", e);
                e
            })?;
        self.finish_bulk().await;
        Ok(response.updated_count)
    }

    async fn finish_bulk(&self) {
        self.store.write(|s| s.clear_selection());
        self.reload().await;
    }
}
