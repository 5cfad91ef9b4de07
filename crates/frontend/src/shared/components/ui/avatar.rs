use leptos::prelude::*;

const AVATAR_COLORS: [&str; 8] = [
    "avatar--blue",
    "avatar--green",
    "avatar--purple",
    "avatar--pink",
    "avatar--indigo",
    "avatar--teal",
    "avatar--cyan",
    "avatar--rose",
];

/// Up to two upper-cased initials: first letters of the first two words,
/// otherwise the first two characters
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
        _ => name.trim().chars().take(2).collect::<String>().to_uppercase(),
    }
}

/// Stable colour class derived from the name
pub fn color_class(name: &str) -> &'static str {
    let hash = name.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add((hash << 5).wrapping_sub(hash))
    });
    AVATAR_COLORS[(hash.unsigned_abs() as usize) % AVATAR_COLORS.len()]
}

#[component]
pub fn Avatar(
    /// Person name; drives initials and colour
    #[prop(into)]
    name: String,
    /// "sm" (default) or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
) -> impl IntoView {
    let size_class = move || match size.get().as_deref() {
        Some("lg") => "avatar--lg",
        _ => "avatar--sm",
    };
    let color = color_class(&name);
    let text = initials(&name);

    view! {
        <div class=move || format!("avatar {} {}", size_class(), color) title=name.clone()>
            {text}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_two_words() {
        assert_eq!(initials("jane cooper"), "JC");
        assert_eq!(initials("Ada Lovelace Byron"), "AL");
    }

    #[test]
    fn initials_from_single_word() {
        assert_eq!(initials("madonna"), "MA");
        assert_eq!(initials("X"), "X");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn color_is_stable_per_name() {
        assert_eq!(color_class("Jane Cooper"), color_class("Jane Cooper"));
        assert!(AVATAR_COLORS.contains(&color_class("")));
    }
}
