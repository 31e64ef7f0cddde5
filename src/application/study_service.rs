// Study service - Use case for analysing one household study end to end
use crate::application::dataset_repository::DatasetRepository;
use crate::application::household::{Household, HouseholdReport};
use crate::infrastructure::config::Thresholds;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudyService {
    repository: Arc<dyn DatasetRepository>,
    stoves: Vec<String>,
    fuels: Vec<String>,
    thresholds: Thresholds,
}

impl StudyService {
    pub fn new(
        repository: Arc<dyn DatasetRepository>,
        stoves: Vec<String>,
        fuels: Vec<String>,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            repository,
            stoves,
            fuels,
            thresholds,
        }
    }

    pub fn load_household(&self) -> anyhow::Result<Household> {
        let dataset = self.repository.load_dataset()?;
        let household = Household::new(
            dataset,
            self.stoves.clone(),
            self.fuels.clone(),
            self.thresholds,
        )
        .context("Invalid study setup")?;
        Ok(household)
    }

    pub fn analyze(&self) -> anyhow::Result<HouseholdReport> {
        let household = self.load_household()?;
        let report = household.report().context("Household analysis failed")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Channel, TimeSeriesDataset};
    use chrono::{Duration, NaiveDate};

    struct InMemoryRepository {
        dataset: TimeSeriesDataset,
    }

    impl DatasetRepository for InMemoryRepository {
        fn load_dataset(&self) -> anyhow::Result<TimeSeriesDataset> {
            Ok(self.dataset.clone())
        }
    }

    fn repository() -> Arc<dyn DatasetRepository> {
        let start = NaiveDate::from_ymd_opt(2018, 8, 26)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let timestamps = (0..=48).map(|h| start + Duration::hours(h)).collect();

        let mut stove = vec![0.0; 49];
        stove[3] = 40.0;
        let mut fuel = vec![8.0; 49];
        fuel[20..].iter_mut().for_each(|w| *w = 7.0);

        let dataset = TimeSeriesDataset::new(
            timestamps,
            vec![Channel::new("LPG", stove), Channel::new("Gas", fuel)],
        )
        .unwrap();
        Arc::new(InMemoryRepository { dataset })
    }

    #[test]
    fn test_analyze_builds_report() {
        let service = StudyService::new(
            repository(),
            vec!["LPG".to_string()],
            vec!["Gas".to_string()],
            Thresholds::default(),
        );

        let report = service.analyze().unwrap();
        assert_eq!(report.study_days, 2);
        assert_eq!(report.cooking_events[0].count, 1);
        assert_eq!(report.cooking_minutes.row("LPG"), Some(&[120.0, 0.0][..]));
        assert_eq!(report.fuel_usage.row("Gas"), Some(&[0.0, 1.0][..]));
    }

    #[test]
    fn test_unknown_column_fails_setup() {
        let service = StudyService::new(
            repository(),
            vec!["Wood".to_string()],
            vec!["Gas".to_string()],
            Thresholds::default(),
        );

        let err = service.analyze().unwrap_err();
        assert!(format!("{:#}", err).contains("'Wood'"));
    }
}
