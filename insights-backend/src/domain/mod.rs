// src/domain/mod.rs

pub mod activity_model;
pub mod activity_type;

pub use activity_model::ActivityRecord;
pub use activity_type::ActivityType;
