// Application layer - Use cases and repository seams
pub mod chart_builder;
pub mod dashboard_service;
pub mod football_repository;
pub mod table_builder;
