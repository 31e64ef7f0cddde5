// Mapper from household readings and detections to chart series
use crate::application::household::{CookingDetection, FuelDetection, Household};
use crate::domain::error::Result;
use crate::domain::subject::{SubjectKind, SubjectSelection};
use crate::domain::telemetry::{ChartData, SeriesData, SeriesMode, TimeSeriesPoint};

/// Stove temperature lines, plus one marker per detected cooking peak when
/// a detection is supplied.
pub fn stove_chart(
    household: &Household,
    selection: &SubjectSelection,
    detection: Option<&CookingDetection>,
) -> Result<ChartData> {
    let stoves = household.resolve(SubjectKind::Stove, selection)?;

    let mut series = line_series(household, &stoves);
    if let Some(detection) = detection {
        for stove in &stoves {
            if let Some(peaks) = detection.peaks(stove) {
                series.push(marker_series(
                    household,
                    stove,
                    format!("{} Cooking Events", stove),
                    peaks,
                ));
            }
        }
    }

    Ok(ChartData::new(
        format!("{} Stove Temperature", selection_label(selection)),
        "Temp".to_string(),
        series,
    ))
}

/// Fuel weight lines, plus one marker per significant weight change when a
/// detection is supplied.
pub fn fuel_chart(
    household: &Household,
    selection: &SubjectSelection,
    detection: Option<&FuelDetection>,
) -> Result<ChartData> {
    let fuels = household.resolve(SubjectKind::Fuel, selection)?;

    let mut series = line_series(household, &fuels);
    if let Some(detection) = detection {
        for fuel in &fuels {
            if let Some(indices) = detection.indices(fuel) {
                series.push(marker_series(
                    household,
                    fuel,
                    format!("{} Weight Change", fuel),
                    &indices,
                ));
            }
        }
    }

    Ok(ChartData::new(
        format!("{} Weight Readings", selection_label(selection)),
        "Weight".to_string(),
        series,
    ))
}

fn line_series(household: &Household, subjects: &[String]) -> Vec<SeriesData> {
    let timestamps = household.dataset().timestamps();

    subjects
        .iter()
        .filter_map(|subject| {
            let readings = household.dataset().readings(subject)?;
            let points = timestamps
                .iter()
                .zip(readings)
                .map(|(t, &v)| TimeSeriesPoint::new(t.and_utc().timestamp_millis(), v))
                .collect();
            Some(SeriesData::new(short_name(subject), SeriesMode::Lines, points))
        })
        .collect()
}

fn marker_series(household: &Household, subject: &str, name: String, indices: &[usize]) -> SeriesData {
    let dataset = household.dataset();
    let readings = dataset.readings(subject).unwrap_or_default();

    let points = indices
        .iter()
        .filter(|&&i| i < readings.len())
        .map(|&i| TimeSeriesPoint::new(dataset.timestamp(i).and_utc().timestamp_millis(), readings[i]))
        .collect();

    SeriesData::new(name, SeriesMode::Markers, points)
}

// Legend shows the first word of a column name ("LPG stove" -> "LPG")
fn short_name(subject: &str) -> String {
    subject.split(' ').next().unwrap_or(subject).to_string()
}

fn selection_label(selection: &SubjectSelection) -> String {
    match selection {
        SubjectSelection::All => "All".to_string(),
        SubjectSelection::Named(names) => names.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Channel, TimeSeriesDataset};
    use crate::infrastructure::config::Thresholds;
    use chrono::{Duration, NaiveDate};

    fn household() -> Household {
        let start = NaiveDate::from_ymd_opt(2018, 8, 26)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let timestamps = (0..10).map(|m| start + Duration::minutes(m)).collect();
        let mut stove = vec![0.0; 10];
        stove[4] = 30.0;
        let fuel = vec![5.0, 5.0, 5.0, 5.0, 5.0, 4.0, 4.0, 4.0, 4.0, 4.0];

        let dataset = TimeSeriesDataset::new(
            timestamps,
            vec![Channel::new("LPG stove", stove), Channel::new("Gas", fuel)],
        )
        .unwrap();
        Household::new(
            dataset,
            vec!["LPG stove".to_string()],
            vec!["Gas".to_string()],
            Thresholds::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_stove_chart_with_events() {
        let household = household();
        let detection = household.cooking_events(&SubjectSelection::All).unwrap();
        let chart = stove_chart(&household, &SubjectSelection::All, Some(&detection)).unwrap();

        assert_eq!(chart.title, "All Stove Temperature");
        assert_eq!(chart.y_title, "Temp");
        assert_eq!(chart.series.len(), 2);

        let line = chart.series_named("LPG").unwrap();
        assert_eq!(line.mode, SeriesMode::Lines);
        assert_eq!(line.points.len(), 10);

        let markers = chart.series_named("LPG stove Cooking Events").unwrap();
        assert_eq!(markers.mode, SeriesMode::Markers);
        assert_eq!(markers.points.len(), 1);
        assert_eq!(markers.points[0].value, 30.0);
        assert_eq!(markers.points[0].time_ms - line.points[0].time_ms, 4 * 60_000);
    }

    #[test]
    fn test_fuel_chart_without_detection_has_lines_only() {
        let household = household();
        let chart = fuel_chart(&household, &SubjectSelection::one("Gas"), None).unwrap();
        assert_eq!(chart.title, "Gas Weight Readings");
        assert_eq!(chart.series.len(), 1);
    }

    #[test]
    fn test_fuel_chart_marks_weight_changes() {
        let household = household();
        let usage = household.fuel_usage(&SubjectSelection::All).unwrap();
        let chart = fuel_chart(&household, &SubjectSelection::All, Some(&usage.detection)).unwrap();

        let markers = chart.series_named("Gas Weight Change").unwrap();
        let values: Vec<f64> = markers.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![5.0, 4.0]);
    }

    #[test]
    fn test_unknown_subject_is_rejected() {
        let household = household();
        assert!(stove_chart(&household, &SubjectSelection::one("Wood"), None).is_err());
    }
}
