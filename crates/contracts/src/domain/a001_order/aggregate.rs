use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order identifier.
///
/// The server sends ids as decimal strings (`"12"`) and expects numbers in
/// bulk requests. The id is numeric on our side; both JSON forms are accepted
/// on input and a number is always written on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(OrderId)
            .map_err(|e| format!("Invalid order id '{}': {}", s, e))
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(OrderId(n)),
            RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Fulfilment status of an order.
///
/// Unknown server values are kept in `Other` and rendered with the default style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Completed,
    Refunded,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Other(value) => value.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Other(value) => value.as_str(),
        }
    }

    /// Statuses an order can be set to
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Completed,
            OrderStatus::Refunded,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        OrderStatus::from_code(&value).unwrap_or(OrderStatus::Other(value))
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment state of an order; unknown server values are kept in `Other`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Other(value) => value.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Other(value) => value.as_str(),
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![PaymentStatus::Paid, PaymentStatus::Unpaid]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "paid" => Some(PaymentStatus::Paid),
            "unpaid" => Some(PaymentStatus::Unpaid),
            _ => None,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        PaymentStatus::from_code(&value).unwrap_or(PaymentStatus::Other(value))
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

/// Commerce order as returned by `GET /orders` and `GET /orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Display code, e.g. `#ORD1024`
    pub order_number: String,
    pub customer: OrderCustomer,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json(id: serde_json::Value, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "order_number": "#ORD1001",
            "customer": { "name": "Jane Cooper", "email": "jane@example.com", "avatar": "" },
            "order_date": "2024-03-15",
            "status": status,
            "total_amount": 125.5,
            "payment_status": "paid",
            "created_at": "2024-03-15 10:00:00",
            "updated_at": "2024-03-15 10:00:00"
        })
    }

    #[test]
    fn order_id_accepts_string_and_number() {
        let from_text: Order = serde_json::from_value(order_json(json!("12"), "pending")).unwrap();
        let from_number: Order = serde_json::from_value(order_json(json!(12), "pending")).unwrap();
        assert_eq!(from_text.id, OrderId(12));
        assert_eq!(from_number.id, OrderId(12));
    }

    #[test]
    fn non_numeric_order_id_is_rejected() {
        let result: Result<Order, _> =
            serde_json::from_value(order_json(json!("3f2a-uuid"), "pending"));
        assert!(result.is_err());
    }

    #[test]
    fn order_id_serializes_as_number() {
        assert_eq!(serde_json::to_value(OrderId(7)).unwrap(), json!(7));
        assert_eq!("42".parse::<OrderId>().unwrap(), OrderId(42));
        assert_eq!(OrderId(42).to_string(), "42");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let order: Order = serde_json::from_value(order_json(json!("1"), "on_hold")).unwrap();
        assert_eq!(order.status, OrderStatus::Other("on_hold".to_string()));
        assert_eq!(order.status.as_str(), "on_hold");
        assert_eq!(serde_json::to_value(&order.status).unwrap(), json!("on_hold"));
    }

    #[test]
    fn known_status_round_trips_through_string() {
        let status: OrderStatus = serde_json::from_value(json!("refunded")).unwrap();
        assert_eq!(status, OrderStatus::Refunded);
        assert_eq!(serde_json::to_value(OrderStatus::Completed).unwrap(), json!("completed"));
    }

    #[test]
    fn unknown_payment_status_does_not_reject_the_order() {
        let mut value = order_json(json!("3"), "pending");
        value["payment_status"] = json!("partial");

        let order: Order = serde_json::from_value(value).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Other("partial".to_string()));
        assert_eq!(order.payment_status.label(), "partial");
        assert_eq!(serde_json::to_value(&order.payment_status).unwrap(), json!("partial"));
    }

    #[test]
    fn missing_timestamps_default_to_empty() {
        let mut value = order_json(json!("5"), "completed");
        let obj = value.as_object_mut().unwrap();
        obj.remove("created_at");
        obj.remove("updated_at");
        let order: Order = serde_json::from_value(value).unwrap();
        assert!(order.created_at.is_empty());
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(order.payment_status, PaymentStatus::Paid);
    }
}
