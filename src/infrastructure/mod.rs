// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod football_api;
pub mod http_response;
pub mod plotly_mapper;
