// src/api/dto/mod.rs

pub mod activity_dto;
pub mod analytics_dto;
pub mod teacher_dto;
