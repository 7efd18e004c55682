// src/service/mod.rs

pub mod aggregation;
pub mod analytics_service;

pub use analytics_service::AnalyticsService;
