use leptos::prelude::*;

use crate::domain::subscription::ui::list::{SubscriptionList, SubscriptionRow};
use crate::shared::components::file_upload_button::FileUploadButton;
use contracts::domain::subscription::SubscriptionDto;

/// Drive folder receiving policy uploads, baked in at build time.
const UPLOAD_FOLDER_ID: Option<&str> = option_env!("UPLOAD_FOLDER_ID");

#[component]
pub fn App() -> impl IntoView {
    // The record source lives with the hosting page; the shell starts empty.
    let (subscriptions, _set_subscriptions) = signal(Vec::<SubscriptionDto>::new());
    let (last_upload, set_last_upload) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);

    view! {
        <main class="app">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || last_upload.get().map(|url| view! {
                <div class="notice">
                    {"Uploaded: "}
                    <a href=url.clone() target="_blank" rel="noreferrer">{url.clone()}</a>
                </div>
            })}

            <FileUploadButton
                folder_id=UPLOAD_FOLDER_ID.unwrap_or("")
                on_uploaded=Callback::new(move |url| {
                    set_error.set(None);
                    set_last_upload.set(Some(url));
                })
                on_error=Callback::new(move |message| set_error.set(Some(message)))
            />

            <SubscriptionList
                items=subscriptions
                on_edit=Callback::new(|row: SubscriptionRow| {
                    log::info!("edit requested for subscription {}", row.subscription_no);
                })
                on_delete=Callback::new(|row: SubscriptionRow| {
                    log::info!("delete requested for subscription {}", row.subscription_no);
                })
            />
        </main>
    }
}
