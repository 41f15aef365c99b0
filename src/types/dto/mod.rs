// API request and response models
pub mod common;
pub mod users;
