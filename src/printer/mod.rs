pub mod models;
pub mod version;
