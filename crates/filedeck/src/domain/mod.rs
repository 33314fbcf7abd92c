pub mod file;
pub mod notification;
