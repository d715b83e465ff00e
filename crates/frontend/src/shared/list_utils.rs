/// Generic list utilities (search, sorting, header indicators)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for row types the global text filter can look at.
pub trait Searchable {
    /// Does the record match the filter query?
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types supporting column sorting.
pub trait Sortable {
    /// Compare two records by the given field key.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the given field key.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by the global search query. An empty query keeps all rows.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a header cell.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a header sort indicator.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Text input driving the global table filter.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback for filter updates
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <input
            type="text"
            class="search-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item(i32);

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.0.cmp(&other.0),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_string().contains(filter)
        }
    }

    #[test]
    fn sorts_both_directions() {
        let mut items = vec![Item(3), Item(1), Item(2)];
        sort_list(&mut items, "value", true);
        assert_eq!(items.iter().map(|i| i.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut items, "value", false);
        assert_eq!(items.iter().map(|i| i.0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn empty_filter_keeps_all_rows() {
        let items = vec![Item(1), Item(2)];
        assert_eq!(filter_list(items, "   ").len(), 2);
    }

    #[test]
    fn sort_indicator_tracks_active_field() {
        assert_eq!(get_sort_indicator("startDate", "startDate", true), " ▲");
        assert_eq!(get_sort_indicator("startDate", "startDate", false), " ▼");
        assert_eq!(get_sort_indicator("startDate", "endDate", true), " ⇅");
    }
}
