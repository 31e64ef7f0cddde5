// Household analysis - cooking events, cooking time and fuel usage for one study
use crate::application::boundary_resolver::resolve_boundaries;
use crate::application::daily_aggregator::{daily_cooking_minutes, daily_fuel_usage};
use crate::application::peak_detector::{find_peaks, PeakPolicy};
use crate::application::significant_change::find_significant_changes;
use crate::domain::daily::SubjectDayTable;
use crate::domain::dataset::{StudyDuration, TimeSeriesDataset};
use crate::domain::error::{AnalysisError, Result};
use crate::domain::events::{BoundaryResolution, CookingEvent, WeightChangePoint};
use crate::domain::subject::{SubjectKind, SubjectSelection};
use crate::infrastructure::config::Thresholds;
use serde::Serialize;

/// Peak indices detected on one stove.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StovePeaks {
    pub subject: String,
    pub peaks: Vec<usize>,
}

/// Result of a cooking-event detection pass. Feed it to
/// [`Household::cooking_duration_for`] or a chart mapper.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CookingDetection {
    pub stoves: Vec<StovePeaks>,
}

impl CookingDetection {
    /// Number of cooking events per stove, in detection order.
    pub fn counts(&self) -> Vec<(String, usize)> {
        self.stoves
            .iter()
            .map(|s| (s.subject.clone(), s.peaks.len()))
            .collect()
    }

    pub fn count(&self, subject: &str) -> Option<usize> {
        self.peaks(subject).map(<[usize]>::len)
    }

    pub fn peaks(&self, subject: &str) -> Option<&[usize]> {
        self.stoves
            .iter()
            .find(|s| s.subject == subject)
            .map(|s| s.peaks.as_slice())
    }
}

/// Significant weight changes detected on one fuel store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelChanges {
    pub subject: String,
    pub changes: Vec<WeightChangePoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FuelDetection {
    pub fuels: Vec<FuelChanges>,
}

impl FuelDetection {
    pub fn indices(&self, subject: &str) -> Option<Vec<usize>> {
        self.fuels
            .iter()
            .find(|f| f.subject == subject)
            .map(|f| f.changes.iter().map(|c| c.index).collect())
    }
}

/// Daily fuel consumption plus the weight changes it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelUsage {
    pub table: SubjectDayTable,
    pub detection: FuelDetection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCount {
    pub subject: String,
    pub count: usize,
}

/// All three analysis outputs for a household.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdReport {
    pub study_days: u32,
    pub cooking_events: Vec<EventCount>,
    pub cooking_minutes: SubjectDayTable,
    pub fuel_usage: SubjectDayTable,
}

/// A validated study dataset together with its stoves, fuels and
/// detection thresholds. Immutable once built; every analysis returns
/// fresh values.
#[derive(Debug, Clone)]
pub struct Household {
    dataset: TimeSeriesDataset,
    stoves: Vec<String>,
    fuels: Vec<String>,
    thresholds: Thresholds,
    duration: StudyDuration,
}

impl Household {
    pub fn new(
        dataset: TimeSeriesDataset,
        stoves: Vec<String>,
        fuels: Vec<String>,
        thresholds: Thresholds,
    ) -> Result<Self> {
        thresholds.validate()?;

        for (kind, names) in [(SubjectKind::Stove, &stoves), (SubjectKind::Fuel, &fuels)] {
            if names.is_empty() {
                return Err(AnalysisError::EmptySubjects(kind));
            }
            if let Some(name) = names.iter().find(|n| dataset.readings(n).is_none()) {
                return Err(AnalysisError::MissingChannel {
                    kind,
                    name: name.clone(),
                });
            }
        }

        let duration = dataset.study_duration();
        tracing::info!(
            "Study spans {} day(s) + {} min over {} samples ({} stove(s), {} fuel(s))",
            duration.whole_days,
            duration.remainder.num_minutes(),
            dataset.len(),
            stoves.len(),
            fuels.len()
        );

        Ok(Self {
            dataset,
            stoves,
            fuels,
            thresholds,
            duration,
        })
    }

    pub fn dataset(&self) -> &TimeSeriesDataset {
        &self.dataset
    }

    pub fn stoves(&self) -> &[String] {
        &self.stoves
    }

    pub fn fuels(&self) -> &[String] {
        &self.fuels
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn study_duration(&self) -> StudyDuration {
        self.duration
    }

    /// Number of day columns in every subject x day table.
    pub fn study_days(&self) -> u32 {
        self.duration.days()
    }

    /// Validate a subject selection against the configured stoves or fuels.
    pub fn resolve(&self, kind: SubjectKind, selection: &SubjectSelection) -> Result<Vec<String>> {
        let configured = match kind {
            SubjectKind::Stove => &self.stoves,
            SubjectKind::Fuel => &self.fuels,
        };
        selection.resolve(kind, configured)
    }

    fn channel(&self, kind: SubjectKind, name: &str) -> Result<&[f64]> {
        self.dataset
            .readings(name)
            .ok_or_else(|| AnalysisError::MissingChannel {
                kind,
                name: name.to_string(),
            })
    }

    fn cooking_policy(&self) -> PeakPolicy {
        PeakPolicy::new(
            self.thresholds.temp_threshold,
            self.thresholds.time_between_events,
        )
    }

    /// Detect cooking peaks on the selected stoves.
    pub fn cooking_events(&self, selection: &SubjectSelection) -> Result<CookingDetection> {
        let stoves = self.resolve(SubjectKind::Stove, selection)?;
        let policy = self.cooking_policy();

        let mut detection = CookingDetection::default();
        for stove in stoves {
            let peaks = find_peaks(self.channel(SubjectKind::Stove, &stove)?, policy);
            tracing::info!("{}: {} cooking event(s)", stove, peaks.len());
            detection.stoves.push(StovePeaks {
                subject: stove,
                peaks,
            });
        }

        Ok(detection)
    }

    /// Resolve the zero-to-zero extent of every detected peak on `stove`.
    pub fn resolve_events(&self, stove: &str, peaks: &[usize]) -> Result<Vec<CookingEvent>> {
        let readings = self.channel(SubjectKind::Stove, stove)?;

        peaks
            .iter()
            .map(|&peak| match resolve_boundaries(readings, peak) {
                BoundaryResolution::Found { start, end } => {
                    Ok(CookingEvent::new(stove.to_string(), peak, start, end))
                }
                BoundaryResolution::Unbounded { side } => Err(AnalysisError::BoundaryNotFound {
                    subject: stove.to_string(),
                    peak,
                    side,
                }),
            })
            .collect()
    }

    /// Minutes of cooking per stove per day. Detection is re-run for the
    /// selected stoves.
    pub fn cooking_duration(&self, selection: &SubjectSelection) -> Result<SubjectDayTable> {
        let detection = self.cooking_events(selection)?;
        self.cooking_duration_for(&detection)
    }

    /// Minutes of cooking per stove per day for an existing detection.
    pub fn cooking_duration_for(&self, detection: &CookingDetection) -> Result<SubjectDayTable> {
        let days = self.study_days();
        let mut table = SubjectDayTable::new(days);

        for stove in &detection.stoves {
            let events = self.resolve_events(&stove.subject, &stove.peaks)?;
            let series = daily_cooking_minutes(&self.dataset, &events, days);
            tracing::debug!("{}: {:.1} cooking min in total", stove.subject, series.total());
            table.push(stove.subject.clone(), &series);
        }

        Ok(table)
    }

    /// Detect significant weight changes on the selected fuels and total
    /// the consumption per day.
    pub fn fuel_usage(&self, selection: &SubjectSelection) -> Result<FuelUsage> {
        let fuels = self.resolve(SubjectKind::Fuel, selection)?;
        let days = self.study_days();

        let mut table = SubjectDayTable::new(days);
        let mut detection = FuelDetection::default();

        for fuel in fuels {
            let readings = self.channel(SubjectKind::Fuel, &fuel)?;
            let candidates = find_peaks(readings, PeakPolicy::WEIGHT);
            let changes = find_significant_changes(
                readings,
                &candidates,
                self.thresholds.weight_threshold,
            );
            tracing::info!(
                "{}: {} significant weight change(s) from {} candidate(s)",
                fuel,
                changes.len(),
                candidates.len()
            );

            let series = daily_fuel_usage(&self.dataset, readings, &changes, days);
            table.push(fuel.clone(), &series);

            let points = changes
                .iter()
                .map(|&i| WeightChangePoint::new(fuel.clone(), i, readings[i]))
                .collect();
            detection.fuels.push(FuelChanges {
                subject: fuel,
                changes: points,
            });
        }

        Ok(FuelUsage { table, detection })
    }

    /// Run all three analyses over every configured stove and fuel.
    pub fn report(&self) -> Result<HouseholdReport> {
        let detection = self.cooking_events(&SubjectSelection::All)?;
        let cooking_minutes = self.cooking_duration_for(&detection)?;
        let fuel_usage = self.fuel_usage(&SubjectSelection::All)?;

        let cooking_events = detection
            .counts()
            .into_iter()
            .map(|(subject, count)| EventCount { subject, count })
            .collect();

        Ok(HouseholdReport {
            study_days: self.study_days(),
            cooking_events,
            cooking_minutes,
            fuel_usage: fuel_usage.table,
        })
    }
}
