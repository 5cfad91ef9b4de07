//! Orders API client
//!
//! `OrdersApi` is the seam the list controller and the modals talk to;
//! `HttpOrdersApi` is the browser implementation over the REST endpoints.

use crate::shared::api_utils::{
    api_url, fetch_empty, fetch_required, with_body, without_body, ApiError,
};
use async_trait::async_trait;
use contracts::domain::a001_order::{
    BulkDeleteResponse, BulkDuplicateResponse, BulkOrderIdsRequest, BulkStatusRequest,
    BulkStatusResponse, CreateOrderDto, Order, OrderId, OrderStats, OrderStatus, OrdersListQuery,
    OrdersResponse, UpdateOrderDto,
};
use gloo_net::http::Request;

#[async_trait(?Send)]
pub trait OrdersApi {
    async fn list_orders(&self, query: &OrdersListQuery) -> Result<OrdersResponse, ApiError>;

    async fn order_stats(&self) -> Result<OrderStats, ApiError>;

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError>;

    async fn create_order(&self, dto: &CreateOrderDto) -> Result<Order, ApiError>;

    async fn update_order(&self, id: OrderId, patch: &UpdateOrderDto) -> Result<Order, ApiError>;

    async fn delete_order(&self, id: OrderId) -> Result<(), ApiError>;

    async fn bulk_update_status(
        &self,
        ids: &[OrderId],
        status: &OrderStatus,
    ) -> Result<BulkStatusResponse, ApiError>;

    async fn bulk_duplicate(&self, ids: &[OrderId]) -> Result<BulkDuplicateResponse, ApiError>;

    async fn bulk_delete(&self, ids: &[OrderId]) -> Result<BulkDeleteResponse, ApiError>;
}

/// `GET /orders` query string, e.g. `status=pending&page=2&limit=10`
pub fn list_query_string(query: &OrdersListQuery) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))
}

/// REST client against [`crate::shared::api_utils::api_base`]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpOrdersApi;

#[async_trait(?Send)]
impl OrdersApi for HttpOrdersApi {
    async fn list_orders(&self, query: &OrdersListQuery) -> Result<OrdersResponse, ApiError> {
        let url = api_url(&format!("/orders?{}", list_query_string(query)?));
        fetch_required(without_body(Request::get(&url))?).await
    }

    async fn order_stats(&self) -> Result<OrderStats, ApiError> {
        fetch_required(without_body(Request::get(&api_url("/orders/stats")))?).await
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let url = api_url(&format!("/orders/{}", id));
        fetch_required(without_body(Request::get(&url))?).await
    }

    async fn create_order(&self, dto: &CreateOrderDto) -> Result<Order, ApiError> {
        fetch_required(with_body(Request::post(&api_url("/orders")), dto)?).await
    }

    async fn update_order(&self, id: OrderId, patch: &UpdateOrderDto) -> Result<Order, ApiError> {
        let url = api_url(&format!("/orders/{}", id));
        fetch_required(with_body(Request::put(&url), patch)?).await
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        let url = api_url(&format!("/orders/{}", id));
        fetch_empty(without_body(Request::delete(&url))?).await
    }

    async fn bulk_update_status(
        &self,
        ids: &[OrderId],
        status: &OrderStatus,
    ) -> Result<BulkStatusResponse, ApiError> {
        let body = BulkStatusRequest {
            order_ids: ids.to_vec(),
            status: status.clone(),
        };
        fetch_required(with_body(Request::put(&api_url("/orders/bulk/status")), &body)?).await
    }

    async fn bulk_duplicate(&self, ids: &[OrderId]) -> Result<BulkDuplicateResponse, ApiError> {
        let body = BulkOrderIdsRequest {
            order_ids: ids.to_vec(),
        };
        fetch_required(with_body(Request::post(&api_url("/orders/bulk/duplicate")), &body)?).await
    }

    async fn bulk_delete(&self, ids: &[OrderId]) -> Result<BulkDeleteResponse, ApiError> {
        let body = BulkOrderIdsRequest {
            order_ids: ids.to_vec(),
        };
        fetch_required(with_body(Request::delete(&api_url("/orders/bulk")), &body)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OrderFilterTab;

    #[test]
    fn list_query_string_uses_tab_code() {
        let query = OrdersListQuery {
            status: OrderFilterTab::Pending,
            page: 2,
            limit: 10,
        };
        assert_eq!(
            list_query_string(&query).unwrap(),
            "status=pending&page=2&limit=10"
        );
    }
}
