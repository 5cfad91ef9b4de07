use super::aggregate::{Order, OrderId, OrderStatus, PaymentStatus};
use crate::enums::OrderFilterTab;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Page size of the orders list
pub const ORDERS_PAGE_SIZE: u32 = 10;

/// Query parameters of `GET /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersListQuery {
    pub status: OrderFilterTab,
    pub page: u32,
    pub limit: u32,
}

impl Default for OrdersListQuery {
    fn default() -> Self {
        Self {
            status: OrderFilterTab::All,
            page: 1,
            limit: ORDERS_PAGE_SIZE,
        }
    }
}

/// Page envelope returned by `GET /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Snapshot returned by `GET /orders/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders_this_month: u64,
    pub pending_orders: u64,
    pub shipped_orders: u64,
    pub refunded_orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    pub customer: CreateCustomerDto,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub order_date: NaiveDate,
}

/// Partial patch for `PUT /orders/{id}`; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

/// Body of `PUT /orders/bulk/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkStatusRequest {
    pub order_ids: Vec<OrderId>,
    pub status: OrderStatus,
}

/// Body of `POST /orders/bulk/duplicate` and `DELETE /orders/bulk`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkOrderIdsRequest {
    pub order_ids: Vec<OrderId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub updated_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDuplicateResponse {
    pub duplicated_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bulk_status_request_sends_numeric_ids() {
        let request = BulkStatusRequest {
            order_ids: vec![OrderId(3), OrderId(7)],
            status: OrderStatus::Completed,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "order_ids": [3, 7], "status": "completed" })
        );
    }

    #[test]
    fn update_patch_omits_unset_fields() {
        let patch = UpdateOrderDto {
            status: Some(OrderStatus::Refunded),
            payment_status: Some(PaymentStatus::Unpaid),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "status": "refunded", "payment_status": "unpaid" })
        );
    }

    #[test]
    fn create_order_body_shape() {
        let dto = CreateOrderDto {
            customer: CreateCustomerDto {
                name: "Esther Howard".to_string(),
                email: "esther@example.com".to_string(),
            },
            total_amount: 42.0,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            order_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "customer": { "name": "Esther Howard", "email": "esther@example.com" },
                "total_amount": 42.0,
                "status": "pending",
                "payment_status": "unpaid",
                "order_date": "2024-06-02"
            })
        );
    }

    #[test]
    fn orders_response_parses_server_envelope() {
        let response: OrdersResponse = serde_json::from_value(json!({
            "orders": [],
            "total": 23,
            "page": 1,
            "limit": 10,
            "total_pages": 3
        }))
        .unwrap();
        assert_eq!(response.total, 23);
        assert_eq!(response.total_pages, 3);
        assert!(response.orders.is_empty());
    }

    #[test]
    fn default_query_is_first_page_of_all() {
        let query = OrdersListQuery::default();
        assert_eq!(query.status, OrderFilterTab::All);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, ORDERS_PAGE_SIZE);
    }
}
