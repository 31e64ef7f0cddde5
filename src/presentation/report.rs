// Report rendering for analysis results
use crate::application::household::HouseholdReport;
use crate::domain::daily::SubjectDayTable;

pub fn render_json(report: &HouseholdReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Plain-text rendering: event counts, then one table per quantity.
pub fn render_text(report: &HouseholdReport) -> String {
    let mut lines = vec![format!("Study days: {}", report.study_days), String::new()];

    lines.push("Cooking events".to_string());
    lines.extend(
        report
            .cooking_events
            .iter()
            .map(|event| format!("  {:<16} {}", event.subject, event.count)),
    );

    lines.push(String::new());
    lines.push("Cooking duration (min)".to_string());
    lines.extend(table_lines(&report.cooking_minutes, 1));

    lines.push(String::new());
    lines.push("Fuel usage (kg)".to_string());
    lines.extend(table_lines(&report.fuel_usage, 2));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn table_lines(table: &SubjectDayTable, precision: usize) -> Vec<String> {
    let mut header = format!("  {:<16}", "");
    for day in 1..=table.days {
        header.push_str(&format!(" {:>9}", format!("Day {}", day)));
    }

    let rows = table.rows.iter().map(|row| {
        let mut line = format!("  {:<16}", row.subject);
        for value in &row.values {
            line.push_str(&format!(" {:>9.*}", precision, value));
        }
        line
    });

    std::iter::once(header).chain(rows).collect()
}
