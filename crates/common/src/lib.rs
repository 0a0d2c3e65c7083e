pub mod types;
pub mod utils;
pub mod metrics;

pub const SERVICE_NAME: &str = "content-portal-api";
