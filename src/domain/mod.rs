// Domain layer - Core data types, free of I/O
pub mod chart;
pub mod dashboard;
pub mod standings;
