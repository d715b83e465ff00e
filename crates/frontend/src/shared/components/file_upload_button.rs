use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::file_upload::upload_file;
use crate::shared::icons::icon;

/// Button wrapping a hidden file input.
///
/// Reads the selected file, uploads it to the Apps Script endpoint and
/// reports the public link through `on_uploaded`. Failures go to
/// `on_error` as display text.
#[component]
pub fn FileUploadButton(
    /// Destination Drive folder
    #[prop(into)]
    folder_id: String,
    /// Receives the public link after a successful upload
    on_uploaded: Callback<String>,
    /// Receives the error text when the upload fails
    #[prop(optional)]
    on_error: Option<Callback<String>>,
) -> impl IntoView {
    let (is_uploading, set_is_uploading) = signal(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        let Some(input) = input else { return };
        let Some(files) = input.files() else { return };
        let Some(file) = files.get(0) else { return };

        let folder_id = folder_id.clone();
        set_is_uploading.set(true);
        leptos::task::spawn_local(async move {
            match upload_file(&file, &folder_id).await {
                Ok(url) => on_uploaded.run(url),
                Err(e) => {
                    log::error!("File upload failed: {}", e);
                    if let Some(on_error) = on_error {
                        on_error.run(e.to_string());
                    }
                }
            }
            set_is_uploading.set(false);
        });
    };

    view! {
        <label class="button button--secondary">
            {icon("upload")}
            <span>
                {move || if is_uploading.get() { "Uploading..." } else { "Upload file" }}
            </span>
            <input
                type="file"
                style="display: none;"
                disabled=move || is_uploading.get()
                on:change=handle_file_select
            />
        </label>
    }
}
