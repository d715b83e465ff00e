use leptos::prelude::*;

use crate::shared::icons::icon;

/// Cell linking to the uploaded policy file.
///
/// Rows without a file render a muted dash.
#[component]
pub fn FileCell(#[prop(into)] url: String) -> impl IntoView {
    if url.is_empty() {
        view! { <span class="table__cell--muted">{"-"}</span> }.into_any()
    } else {
        view! {
            <a class="table__file-link" href=url target="_blank" rel="noreferrer">
                {icon("file")}
                {"View file"}
            </a>
        }
        .into_any()
    }
}
