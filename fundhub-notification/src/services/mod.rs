pub mod funding_service;
pub mod notification_service;
