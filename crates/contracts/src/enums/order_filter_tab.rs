use serde::{Deserialize, Serialize};

/// Filter tabs of the orders list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilterTab {
    #[default]
    All,
    Pending,
    Overdue,
    Ongoing,
    Completed,
}

impl OrderFilterTab {
    /// Value of the `status` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            OrderFilterTab::All => "all",
            OrderFilterTab::Pending => "pending",
            OrderFilterTab::Overdue => "overdue",
            OrderFilterTab::Ongoing => "ongoing",
            OrderFilterTab::Completed => "completed",
        }
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            OrderFilterTab::All => "All",
            OrderFilterTab::Pending => "Incomplete",
            OrderFilterTab::Overdue => "Overdue",
            OrderFilterTab::Ongoing => "Ongoing",
            OrderFilterTab::Completed => "Finished",
        }
    }

    /// All tabs in display order
    pub fn all() -> Vec<OrderFilterTab> {
        vec![
            OrderFilterTab::All,
            OrderFilterTab::Pending,
            OrderFilterTab::Overdue,
            OrderFilterTab::Ongoing,
            OrderFilterTab::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(OrderFilterTab::All),
            "pending" => Some(OrderFilterTab::Pending),
            "overdue" => Some(OrderFilterTab::Overdue),
            "ongoing" => Some(OrderFilterTab::Ongoing),
            "completed" => Some(OrderFilterTab::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderFilterTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for tab in OrderFilterTab::all() {
            assert_eq!(OrderFilterTab::from_code(tab.code()), Some(tab));
        }
        assert_eq!(OrderFilterTab::from_code("archived"), None);
    }

    #[test]
    fn default_tab_is_all() {
        assert_eq!(OrderFilterTab::default(), OrderFilterTab::All);
        assert_eq!(OrderFilterTab::Pending.label(), "Incomplete");
        assert_eq!(OrderFilterTab::Completed.label(), "Finished");
    }
}
