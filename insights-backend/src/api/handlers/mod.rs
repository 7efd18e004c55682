// src/api/handlers/mod.rs

pub mod activity_handler;
pub mod analytics_handler;
pub mod system_handler;
pub mod teacher_handler;
