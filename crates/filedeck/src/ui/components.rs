pub mod file_table;
pub mod footer_bar;
pub mod location_tabs;
pub mod toasts;
pub mod upload_bar;
