use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One subscription row as delivered by the sheet backend.
///
/// The wire payload uses camelCase field names. Dates arrive as plain
/// strings because the sheet does not guarantee a valid calendar date;
/// use [`SubscriptionDto::start_date`] / [`SubscriptionDto::end_date`]
/// to get a parsed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub subscription_no: String,
    pub company_name: String,
    pub subscriber_name: String,

    /// Product name shown in the "Product Name" column.
    pub subscription_name: String,

    pub policy_no: String,
    pub agent_name: String,

    /// Public link to the uploaded policy file, if one was attached.
    pub file_upload: Option<String>,

    pub price: String,

    /// "YYYY-MM-DD" (possibly with a time suffix) or empty/garbage.
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    /// Status label, see `SubscriptionStatus` for the known set.
    pub status: String,

    /// Original sheet row, carried through untouched.
    #[serde(default)]
    pub raw: Option<serde_json::Value>,
}

impl SubscriptionDto {
    /// Parsed start date; `None` when the wire value is absent or not a
    /// valid calendar date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_wire_date(self.start_date.as_deref())
    }

    /// Parsed end date, same degradation rules as [`Self::start_date`].
    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_wire_date(self.end_date.as_deref())
    }
}

/// Parse a sheet date cell. Accepts "YYYY-MM-DD" and ISO datetime strings
/// ("2024-03-15T00:00:00Z"); everything else degrades to `None`.
pub fn parse_wire_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
