// Application layer - Detection algorithms and analysis use cases
pub mod boundary_resolver;
pub mod daily_aggregator;
pub mod dataset_repository;
pub mod household;
pub mod peak_detector;
pub mod significant_change;
pub mod study_service;
