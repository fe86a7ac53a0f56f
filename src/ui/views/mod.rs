pub mod analytics;
pub mod dashboard;
pub mod orders;
pub mod services;
