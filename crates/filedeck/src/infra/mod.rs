pub mod download;
pub mod file_store;
pub mod local_store;
pub mod logging;
