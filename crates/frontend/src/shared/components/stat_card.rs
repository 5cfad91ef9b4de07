use leptos::prelude::*;

/// Counter value, or "—" while no snapshot has arrived
pub fn format_count(value: Option<u64>) -> String {
    match value {
        Some(v) => format_thousands(v),
        None => "—".to_string(),
    }
}

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Accent modifier: "info", "warning", "success" or "error"
    #[prop(into)]
    accent: String,
    /// Counter value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<u64>>,
) -> impl IntoView {
    let class = format!("stat-card stat-card--{}", accent);

    view! {
        <div class=class>
            <div class="stat-card__marker"></div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_count(value.get())}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_renders_dash() {
        assert_eq!(format_count(None), "—");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(Some(999)), "999");
        assert_eq!(format_count(Some(1234567)), "1,234,567");
    }
}
