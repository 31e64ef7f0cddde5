// Repository trait for study dataset access
use crate::domain::dataset::TimeSeriesDataset;

pub trait DatasetRepository: Send + Sync {
    /// Load the full timestamped sensor table for one household study.
    fn load_dataset(&self) -> anyhow::Result<TimeSeriesDataset>;
}
