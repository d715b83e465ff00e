use leptos::prelude::*;

use super::SubscriptionRow;
use crate::shared::icons::icon;

/// Edit/delete buttons for one table row.
///
/// The actions themselves live with the caller; this component only
/// dispatches the full row.
#[component]
pub fn RowActions(
    row: SubscriptionRow,
    on_edit: Callback<SubscriptionRow>,
    on_delete: Callback<SubscriptionRow>,
) -> impl IntoView {
    let row_for_edit = row.clone();
    let row_for_delete = row;

    view! {
        <div class="table__row-actions">
            <button
                class="button button--icon"
                title="Edit"
                on:click=move |_| on_edit.run(row_for_edit.clone())
            >
                {icon("edit")}
            </button>
            <button
                class="button button--icon"
                title="Delete"
                on:click=move |_| on_delete.run(row_for_delete.clone())
            >
                {icon("delete")}
            </button>
        </div>
    }
}
