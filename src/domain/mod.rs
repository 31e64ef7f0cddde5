// Domain layer - Plain data types shared by every other layer
pub mod daily;
pub mod dataset;
pub mod error;
pub mod events;
pub mod subject;
pub mod telemetry;
