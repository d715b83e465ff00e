//! Deployment configuration for the Apps Script collaborator.

/// Web-app URL of the Apps Script deployment, baked in at build time from
/// the `APPS_SCRIPT_URL` environment variable.
const APPS_SCRIPT_URL: Option<&str> = option_env!("APPS_SCRIPT_URL");

/// Endpoint receiving the `action=upload` form posts.
///
/// Empty when the build was made without `APPS_SCRIPT_URL`; the upload
/// call then fails at the transport step.
pub fn upload_endpoint() -> &'static str {
    APPS_SCRIPT_URL.unwrap_or("")
}
