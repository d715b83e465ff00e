use contracts::enums::subscription_status::SubscriptionStatus;
use leptos::prelude::*;

/// Map a status label to a pill variant.
///
/// Labels outside the known set get no variant and render undecorated.
pub fn status_variant(status: &str) -> Option<&'static str> {
    match SubscriptionStatus::from_label(status)? {
        SubscriptionStatus::Created | SubscriptionStatus::Renewal => Some("primary"),
        SubscriptionStatus::Approved => Some("warning"),
        SubscriptionStatus::Active => Some("success"),
        SubscriptionStatus::Rejected | SubscriptionStatus::Ended | SubscriptionStatus::Expired => {
            Some("destructive")
        }
    }
}

/// Pill component with different variants
#[component]
pub fn Pill(
    /// Pill variant: "primary", "success", "warning", "destructive";
    /// anything else renders the bare pill
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Pill content
    children: Children,
) -> impl IntoView {
    let pill_class = move || match variant.get().as_deref() {
        Some("primary") => "pill pill--primary",
        Some("success") => "pill pill--success",
        Some("warning") => "pill pill--warning",
        Some("destructive") => "pill pill--destructive",
        _ => "pill",
    };

    view! {
        <span class=pill_class>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_fixed_variants() {
        assert_eq!(status_variant("Created"), Some("primary"));
        assert_eq!(status_variant("Renewal"), Some("primary"));
        assert_eq!(status_variant("Approved"), Some("warning"));
        assert_eq!(status_variant("Active"), Some("success"));
        assert_eq!(status_variant("Rejected"), Some("destructive"));
        assert_eq!(status_variant("Ended"), Some("destructive"));
        assert_eq!(status_variant("Expired"), Some("destructive"));
    }

    #[test]
    fn unknown_statuses_get_no_variant() {
        assert_eq!(status_variant("Pending"), None);
        assert_eq!(status_variant("active"), None);
        assert_eq!(status_variant(""), None);
    }
}
