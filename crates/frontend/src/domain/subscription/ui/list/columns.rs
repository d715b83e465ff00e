//! Column rules for the subscriptions table.
//!
//! The table view consumes this list generically: every column declares how
//! its header is presented, how its cell is produced from a row and whether
//! the global text filter may look at it. The list is built once and shared
//! read-only by every render pass; all rules are pure.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::SubscriptionRow;

/// How a column header is presented.
pub enum HeaderRule {
    /// Plain header label.
    Label(&'static str),
    /// Centered header label.
    Centered(&'static str),
    /// Clickable label that toggles sorting on the column's field.
    Sortable(&'static str),
}

/// How a column cell is produced from a row.
#[derive(Clone, Copy)]
pub enum CellRule {
    /// Raw field value.
    Text(fn(&SubscriptionRow) -> String),
    /// Field value with emphasized styling.
    Emphasis(fn(&SubscriptionRow) -> String),
    /// Medium-format date, or the placeholder when the date is absent.
    Date(fn(&SubscriptionRow) -> Option<NaiveDate>),
    /// Colored status pill.
    Status,
    /// Link to the uploaded file.
    FileLink,
    /// Row-level action buttons.
    Actions,
}

/// One column of the subscriptions table.
pub struct ColumnRule {
    /// Field key; doubles as the sort key for sortable headers.
    pub field: &'static str,
    pub header: HeaderRule,
    pub cell: CellRule,
    /// Whether the global text filter may match against this column.
    pub global_filter: bool,
}

impl ColumnRule {
    /// Text the global filter sees for this column.
    ///
    /// `None` when the column is excluded from filtering or carries no
    /// textual value.
    pub fn filter_text(&self, row: &SubscriptionRow) -> Option<String> {
        if !self.global_filter {
            return None;
        }
        match self.cell {
            CellRule::Text(value) | CellRule::Emphasis(value) => Some(value(row)),
            CellRule::Status => Some(row.status.clone()),
            CellRule::FileLink => Some(row.file_upload.clone().unwrap_or_default()),
            CellRule::Date(_) | CellRule::Actions => None,
        }
    }
}

fn subscription_no(row: &SubscriptionRow) -> String {
    row.subscription_no.clone()
}

fn company_name(row: &SubscriptionRow) -> String {
    row.company_name.clone()
}

fn subscriber_name(row: &SubscriptionRow) -> String {
    row.subscriber_name.clone()
}

fn product_name(row: &SubscriptionRow) -> String {
    row.subscription_name.clone()
}

fn policy_no(row: &SubscriptionRow) -> String {
    row.policy_no.clone()
}

fn agent_name(row: &SubscriptionRow) -> String {
    row.agent_name.clone()
}

fn start_date(row: &SubscriptionRow) -> Option<NaiveDate> {
    row.start_date
}

fn end_date(row: &SubscriptionRow) -> Option<NaiveDate> {
    row.end_date
}

static COLUMNS: Lazy<Vec<ColumnRule>> = Lazy::new(|| {
    vec![
        ColumnRule {
            field: "action",
            header: HeaderRule::Centered("Action"),
            cell: CellRule::Actions,
            global_filter: false,
        },
        ColumnRule {
            field: "subscriptionNo",
            header: HeaderRule::Label("Subscription No."),
            cell: CellRule::Text(subscription_no),
            global_filter: false,
        },
        ColumnRule {
            field: "companyName",
            header: HeaderRule::Label("Company Name"),
            cell: CellRule::Text(company_name),
            global_filter: true,
        },
        ColumnRule {
            field: "subscriberName",
            header: HeaderRule::Label("Subscriber Name"),
            cell: CellRule::Text(subscriber_name),
            global_filter: true,
        },
        ColumnRule {
            field: "subscriptionName",
            header: HeaderRule::Label("Product Name"),
            cell: CellRule::Emphasis(product_name),
            global_filter: true,
        },
        ColumnRule {
            field: "policyNo",
            header: HeaderRule::Label("Policy No."),
            cell: CellRule::Text(policy_no),
            global_filter: true,
        },
        ColumnRule {
            field: "agentName",
            header: HeaderRule::Label("Agent Name"),
            cell: CellRule::Text(agent_name),
            global_filter: true,
        },
        ColumnRule {
            field: "fileUpload",
            header: HeaderRule::Label("Upload File"),
            cell: CellRule::FileLink,
            global_filter: true,
        },
        ColumnRule {
            field: "startDate",
            header: HeaderRule::Sortable("Start Date"),
            cell: CellRule::Date(start_date),
            global_filter: false,
        },
        ColumnRule {
            field: "endDate",
            header: HeaderRule::Sortable("End Date"),
            cell: CellRule::Date(end_date),
            global_filter: false,
        },
        ColumnRule {
            field: "status",
            header: HeaderRule::Centered("Status"),
            cell: CellRule::Status,
            global_filter: true,
        },
    ]
});

/// The subscriptions table column set, in display order.
pub fn subscription_columns() -> &'static [ColumnRule] {
    &COLUMNS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::Searchable;

    fn sample_row() -> SubscriptionRow {
        SubscriptionRow {
            subscription_no: "SUB-42".to_string(),
            company_name: "Acme Insurance".to_string(),
            subscriber_name: "R. Sharma".to_string(),
            subscription_name: "Gold Plan".to_string(),
            policy_no: "POL-7".to_string(),
            agent_name: "K. Iyer".to_string(),
            file_upload: Some("https://drive.google.com/uc?id=f1".to_string()),
            price: "1200".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            end_date: None,
            status: "Active".to_string(),
        }
    }

    #[test]
    fn column_order_matches_the_table() {
        let fields: Vec<&str> = subscription_columns().iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                "action",
                "subscriptionNo",
                "companyName",
                "subscriberName",
                "subscriptionName",
                "policyNo",
                "agentName",
                "fileUpload",
                "startDate",
                "endDate",
                "status",
            ]
        );
    }

    #[test]
    fn excluded_columns_yield_no_filter_text() {
        let row = sample_row();
        for column in subscription_columns() {
            if matches!(
                column.field,
                "action" | "subscriptionNo" | "startDate" | "endDate"
            ) {
                assert!(
                    column.filter_text(&row).is_none(),
                    "column {} should be excluded from the global filter",
                    column.field
                );
            }
        }
    }

    #[test]
    fn filter_never_matches_excluded_columns() {
        let row = sample_row();
        assert!(!row.matches_filter("SUB-42"));
        assert!(!row.matches_filter("2024"));
        assert!(!row.matches_filter("Not yet decided"));
    }

    #[test]
    fn filter_matches_included_columns_case_insensitively() {
        let row = sample_row();
        assert!(row.matches_filter("acme"));
        assert!(row.matches_filter("gold plan"));
        assert!(row.matches_filter("POL-7"));
        assert!(row.matches_filter("active"));
        assert!(row.matches_filter("uc?id=f1"));
    }

    #[test]
    fn product_cell_degrades_to_empty_string() {
        let mut row = sample_row();
        row.subscription_name = String::new();
        let column = subscription_columns()
            .iter()
            .find(|c| c.field == "subscriptionName")
            .unwrap();
        match column.cell {
            CellRule::Emphasis(value) => assert_eq!(value(&row), ""),
            _ => panic!("product column should use an emphasis cell"),
        }
    }
}
