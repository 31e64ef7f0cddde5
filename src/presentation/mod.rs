// Presentation layer - Report rendering and chart series for outside consumers
pub mod chart_mapper;
pub mod report;
