pub mod columns;
pub mod file_cell;
pub mod row_actions;
pub mod state;

use self::columns::{subscription_columns, CellRule, ColumnRule, HeaderRule};
use self::file_cell::FileCell;
use self::row_actions::RowActions;
use self::state::create_state;
use crate::shared::components::ui::pill::{status_variant, Pill};
use crate::shared::date_utils::format_medium_date;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use chrono::NaiveDate;
use contracts::domain::subscription::SubscriptionDto;
use leptos::prelude::*;
use std::cmp::Ordering;

/// One row of the subscriptions table, with dates already parsed.
#[derive(Clone, Debug)]
pub struct SubscriptionRow {
    pub subscription_no: String,
    pub company_name: String,
    pub subscriber_name: String,
    pub subscription_name: String,
    pub policy_no: String,
    pub agent_name: String,
    pub file_upload: Option<String>,
    pub price: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

impl From<SubscriptionDto> for SubscriptionRow {
    fn from(dto: SubscriptionDto) -> Self {
        let start_date = dto.start_date();
        let end_date = dto.end_date();

        Self {
            subscription_no: dto.subscription_no,
            company_name: dto.company_name,
            subscriber_name: dto.subscriber_name,
            subscription_name: dto.subscription_name,
            policy_no: dto.policy_no,
            agent_name: dto.agent_name,
            file_upload: dto.file_upload,
            price: dto.price,
            start_date,
            end_date,
            status: dto.status,
        }
    }
}

impl Searchable for SubscriptionRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        subscription_columns()
            .iter()
            .filter_map(|column| column.filter_text(self))
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

impl Sortable for SubscriptionRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "startDate" => self.start_date.cmp(&other.start_date),
            "endDate" => self.end_date.cmp(&other.end_date),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SubscriptionList(
    /// Records to display; the caller owns fetching and mutation.
    #[prop(into)]
    items: Signal<Vec<SubscriptionDto>>,
    /// Row-level edit action.
    on_edit: Callback<SubscriptionRow>,
    /// Row-level delete action.
    on_delete: Callback<SubscriptionRow>,
) -> impl IntoView {
    let state = create_state();
    let (filter, set_filter) = signal(String::new());

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let visible_rows = move || {
        let rows: Vec<SubscriptionRow> = items.get().into_iter().map(Into::into).collect();
        let mut rows = filter_list(rows, &filter.get());
        let s = state.get();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"My Subscriptions"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |value| set_filter.set(value))
                        placeholder="Search subscriptions..."
                    />
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {subscription_columns().iter().map(|column| {
                                match &column.header {
                                    HeaderRule::Label(label) => view! {
                                        <th class="table__header-cell">{*label}</th>
                                    }.into_any(),
                                    HeaderRule::Centered(label) => view! {
                                        <th class="table__header-cell table__header-cell--centered">{*label}</th>
                                    }.into_any(),
                                    HeaderRule::Sortable(label) => {
                                        let field = column.field;
                                        view! {
                                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                                                {*label}
                                                <span class={move || get_sort_class(&state.get().sort_field, field)}>
                                                    {move || get_sort_indicator(&state.get().sort_field, field, state.get().sort_ascending)}
                                                </span>
                                            </th>
                                        }.into_any()
                                    }
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    {subscription_columns().iter().map(|column| {
                                        cell_view(column, &row, on_edit, on_delete)
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Render one cell according to its column rule.
fn cell_view(
    column: &ColumnRule,
    row: &SubscriptionRow,
    on_edit: Callback<SubscriptionRow>,
    on_delete: Callback<SubscriptionRow>,
) -> AnyView {
    match &column.cell {
        CellRule::Text(value) => view! {
            <td class="table__cell">{value(row)}</td>
        }
        .into_any(),
        CellRule::Emphasis(value) => view! {
            <td class="table__cell">
                <span class="table__cell--emphasis">{value(row)}</span>
            </td>
        }
        .into_any(),
        CellRule::Date(value) => view! {
            <td class="table__cell">{format_medium_date(value(row))}</td>
        }
        .into_any(),
        CellRule::Status => {
            let status = row.status.clone();
            let variant = status_variant(&status).map(str::to_string);
            view! {
                <td class="table__cell table__cell--centered">
                    <Pill variant=variant>{status}</Pill>
                </td>
            }
            .into_any()
        }
        CellRule::FileLink => view! {
            <td class="table__cell">
                <FileCell url=row.file_upload.clone().unwrap_or_default() />
            </td>
        }
        .into_any(),
        CellRule::Actions => {
            let row = row.clone();
            view! {
                <td class="table__cell table__cell--centered">
                    <RowActions row=row on_edit=on_edit on_delete=on_delete />
                </td>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(no: &str, start: Option<NaiveDate>) -> SubscriptionRow {
        SubscriptionRow {
            subscription_no: no.to_string(),
            company_name: "Acme".to_string(),
            subscriber_name: "R. Sharma".to_string(),
            subscription_name: "Gold Plan".to_string(),
            policy_no: "POL-1".to_string(),
            agent_name: "K. Iyer".to_string(),
            file_upload: None,
            price: "1200".to_string(),
            start_date: start,
            end_date: None,
            status: "Active".to_string(),
        }
    }

    fn dto(start: Option<&str>, end: Option<&str>) -> SubscriptionDto {
        SubscriptionDto {
            subscription_no: "SUB-1".to_string(),
            company_name: "Acme".to_string(),
            subscriber_name: "R. Sharma".to_string(),
            subscription_name: "Gold Plan".to_string(),
            policy_no: "POL-1".to_string(),
            agent_name: "K. Iyer".to_string(),
            file_upload: None,
            price: "1200".to_string(),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            status: "Active".to_string(),
            raw: None,
        }
    }

    #[test]
    fn sorts_by_start_date_with_absent_dates_first() {
        let mut rows = vec![
            row("b", NaiveDate::from_ymd_opt(2024, 6, 1)),
            row("a", None),
            row("c", NaiveDate::from_ymd_opt(2024, 1, 1)),
        ];
        sort_list(&mut rows, "startDate", true);
        let order: Vec<&str> = rows.iter().map(|r| r.subscription_no.as_str()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn descending_sort_reverses_the_order() {
        let mut rows = vec![
            row("a", NaiveDate::from_ymd_opt(2024, 1, 1)),
            row("b", NaiveDate::from_ymd_opt(2024, 6, 1)),
        ];
        sort_list(&mut rows, "startDate", false);
        let order: Vec<&str> = rows.iter().map(|r| r.subscription_no.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn unknown_sort_field_keeps_the_order() {
        let mut rows = vec![
            row("b", NaiveDate::from_ymd_opt(2024, 6, 1)),
            row("a", NaiveDate::from_ymd_opt(2024, 1, 1)),
        ];
        sort_list(&mut rows, "price", true);
        let order: Vec<&str> = rows.iter().map(|r| r.subscription_no.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn row_conversion_parses_dates_and_degrades_garbage() {
        let row = SubscriptionRow::from(dto(Some("2024-03-15"), Some("garbage")));
        assert_eq!(row.start_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(row.end_date, None);
    }
}
