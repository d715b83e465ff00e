pub mod file_upload_button;
pub mod ui;
