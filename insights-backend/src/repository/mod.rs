// src/repository/mod.rs

pub mod activity_repository;

pub use activity_repository::ActivityStore;
