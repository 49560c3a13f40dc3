// Application layer - Use cases over the dataset repository
pub mod dashboard_service;
pub mod dataset_repository;
pub mod dataset_service;
