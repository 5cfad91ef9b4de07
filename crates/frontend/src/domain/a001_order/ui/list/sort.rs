//! Client-side sort of the loaded page.
//!
//! Sorting only reorders what the server returned; it never triggers a fetch.

use crate::shared::list_utils::locale_compare;
use contracts::domain::a001_order::Order;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSortKey {
    OrderNumber,
    CustomerName,
    OrderDate,
    Status,
    TotalAmount,
    PaymentStatus,
}

impl OrderSortKey {
    pub fn label(&self) -> &'static str {
        match self {
            OrderSortKey::OrderNumber => "Order Number",
            OrderSortKey::CustomerName => "Customer Name",
            OrderSortKey::OrderDate => "Order Date",
            OrderSortKey::Status => "Status",
            OrderSortKey::TotalAmount => "Total Amount",
            OrderSortKey::PaymentStatus => "Payment Status",
        }
    }

    /// Header order of the sortable columns
    pub fn all() -> [OrderSortKey; 6] {
        [
            OrderSortKey::OrderNumber,
            OrderSortKey::CustomerName,
            OrderSortKey::OrderDate,
            OrderSortKey::Status,
            OrderSortKey::TotalAmount,
            OrderSortKey::PaymentStatus,
        ]
    }

    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderSortKey::OrderNumber => locale_compare(&a.order_number, &b.order_number),
            OrderSortKey::CustomerName => locale_compare(
                &a.customer.name.to_lowercase(),
                &b.customer.name.to_lowercase(),
            ),
            OrderSortKey::OrderDate => a.order_date.cmp(&b.order_date),
            OrderSortKey::Status => locale_compare(a.status.as_str(), b.status.as_str()),
            OrderSortKey::TotalAmount => a.total_amount.total_cmp(&b.total_amount),
            OrderSortKey::PaymentStatus => {
                locale_compare(a.payment_status.as_str(), b.payment_status.as_str())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Active sort column; `key == None` keeps server order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<OrderSortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: a new column sorts ascending, the same column cycles
    /// ascending -> descending -> unsorted
    pub fn toggle(self, key: OrderSortKey) -> SortState {
        match (self.key, self.direction) {
            (Some(current), SortDirection::Asc) if current == key => SortState {
                key: Some(key),
                direction: SortDirection::Desc,
            },
            (Some(current), SortDirection::Desc) if current == key => SortState::default(),
            _ => SortState {
                key: Some(key),
                direction: SortDirection::Asc,
            },
        }
    }

    pub fn is_active(&self, key: OrderSortKey) -> bool {
        self.key == Some(key)
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }
}

/// Stable sort of `orders` by `sort`; input order when no column is active
pub fn sort_orders(orders: &[Order], sort: SortState) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    if let Some(key) = sort.key {
        sorted.sort_by(|a, b| {
            let cmp = key.compare(a, b);
            match sort.direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::super::state::tests::order;
    use super::*;
    use contracts::domain::a001_order::OrderStatus;

    fn asc(key: OrderSortKey) -> SortState {
        SortState {
            key: Some(key),
            direction: SortDirection::Asc,
        }
    }

    fn ids(orders: &[Order]) -> Vec<u64> {
        orders.iter().map(|o| o.id.value()).collect()
    }

    #[test]
    fn amounts_sort_numerically() {
        let orders = vec![order(1, "A", 50.0), order(2, "B", 5.0), order(3, "C", 100.0)];

        let up = sort_orders(&orders, asc(OrderSortKey::TotalAmount));
        assert_eq!(ids(&up), vec![2, 1, 3]);

        let desc = asc(OrderSortKey::TotalAmount).toggle(OrderSortKey::TotalAmount);
        let down = sort_orders(&orders, desc);
        assert_eq!(ids(&down), vec![3, 1, 2]);
    }

    #[test]
    fn nine_sorts_before_ten() {
        let orders = vec![order(1, "A", 10.0), order(2, "B", 9.0)];
        let sorted = sort_orders(&orders, asc(OrderSortKey::TotalAmount));
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn order_numbers_compare_as_text() {
        let mut a = order(1, "A", 1.0);
        a.order_number = "10".to_string();
        let mut b = order(2, "B", 1.0);
        b.order_number = "9".to_string();

        let sorted = sort_orders(&[b, a], asc(OrderSortKey::OrderNumber));
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn customer_names_ignore_case() {
        let orders = vec![
            order(1, "zoe", 1.0),
            order(2, "Adam", 1.0),
            order(3, "bella", 1.0),
        ];
        let sorted = sort_orders(&orders, asc(OrderSortKey::CustomerName));
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn equal_keys_keep_server_order() {
        let mut orders = vec![order(5, "A", 1.0), order(3, "B", 1.0), order(8, "C", 1.0)];
        for o in &mut orders {
            o.status = OrderStatus::Completed;
        }
        let sorted = sort_orders(&orders, asc(OrderSortKey::Status));
        assert_eq!(ids(&sorted), vec![5, 3, 8]);
    }

    #[test]
    fn sorting_is_a_permutation() {
        let orders: Vec<Order> = (1..=10)
            .map(|id| order(id, "Customer", (id * 37 % 11) as f64))
            .collect();
        for key in OrderSortKey::all() {
            let mut sorted = ids(&sort_orders(&orders, asc(key)));
            sorted.sort_unstable();
            assert_eq!(sorted, ids(&orders));
        }
    }

    #[test]
    fn header_labels() {
        let labels: Vec<&str> = OrderSortKey::all().iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Order Number",
                "Customer Name",
                "Order Date",
                "Status",
                "Total Amount",
                "Payment Status",
            ]
        );
    }

    #[test]
    fn third_click_restores_server_order() {
        let orders = vec![order(1, "A", 50.0), order(2, "B", 5.0), order(3, "C", 100.0)];
        let sort = SortState::default()
            .toggle(OrderSortKey::TotalAmount)
            .toggle(OrderSortKey::TotalAmount)
            .toggle(OrderSortKey::TotalAmount);

        assert_eq!(sort, SortState::default());
        assert_eq!(ids(&sort_orders(&orders, sort)), vec![1, 2, 3]);
    }

    #[test]
    fn switching_column_starts_ascending() {
        let sort = asc(OrderSortKey::TotalAmount)
            .toggle(OrderSortKey::TotalAmount)
            .toggle(OrderSortKey::OrderDate);
        assert_eq!(sort, asc(OrderSortKey::OrderDate));
        assert!(sort.is_active(OrderSortKey::OrderDate));
        assert!(sort.is_ascending());
    }
}
