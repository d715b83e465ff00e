use serde::{Deserialize, Serialize};

/// Known subscription lifecycle statuses.
///
/// The sheet stores the status as a free-form label; rows with a label
/// outside this set are still valid records, they just get no decoration
/// in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Created,
    Renewal,
    Approved,
    Active,
    Rejected,
    Ended,
    Expired,
}

impl SubscriptionStatus {
    /// Label as it appears in the sheet and in the status column.
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Created => "Created",
            SubscriptionStatus::Renewal => "Renewal",
            SubscriptionStatus::Approved => "Approved",
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Rejected => "Rejected",
            SubscriptionStatus::Ended => "Ended",
            SubscriptionStatus::Expired => "Expired",
        }
    }

    /// All known statuses in display order.
    pub fn all() -> Vec<SubscriptionStatus> {
        vec![
            SubscriptionStatus::Created,
            SubscriptionStatus::Renewal,
            SubscriptionStatus::Approved,
            SubscriptionStatus::Active,
            SubscriptionStatus::Rejected,
            SubscriptionStatus::Ended,
            SubscriptionStatus::Expired,
        ]
    }

    /// Parse a sheet label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Created" => Some(SubscriptionStatus::Created),
            "Renewal" => Some(SubscriptionStatus::Renewal),
            "Approved" => Some(SubscriptionStatus::Approved),
            "Active" => Some(SubscriptionStatus::Active),
            "Rejected" => Some(SubscriptionStatus::Rejected),
            "Ended" => Some(SubscriptionStatus::Ended),
            "Expired" => Some(SubscriptionStatus::Expired),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips() {
        for status in SubscriptionStatus::all() {
            assert_eq!(SubscriptionStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn unknown_labels_yield_none() {
        assert_eq!(SubscriptionStatus::from_label("Pending"), None);
        assert_eq!(SubscriptionStatus::from_label("active"), None);
        assert_eq!(SubscriptionStatus::from_label(""), None);
    }
}
