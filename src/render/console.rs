//! Console summary output for multi-range reports

use crate::render::format_number;
use chrono::{DateTime, NaiveDate, Utc};

const RULE_WIDTH: usize = 70;

/// One fetched range in a multi-range report
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub downloads: u64,
}

/// Report header with package name and generation time
pub fn render_header(package: &str, generated_at: DateTime<Utc>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\nNPM Download Report for: {package}\nGenerated: {}\n{rule}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Fixed-width summary table of all successfully fetched ranges
pub fn render_summary(rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let dash = "-".repeat(RULE_WIDTH);

    out.push_str(&format!("{rule}\nSUMMARY\n{rule}\n"));
    out.push_str(&format!(
        "{:<20} {:<12} {:<12} {:>15}\n",
        "Period", "Start Date", "End Date", "Downloads"
    ));
    out.push_str(&format!("{dash}\n"));

    for row in rows {
        out.push_str(&format!(
            "{:<20} {:<12} {:<12} {:>15}\n",
            row.label,
            row.start.to_string(),
            row.end.to_string(),
            format_number(row.downloads)
        ));
    }

    out.push_str(&format!("{dash}\n"));
    out.push_str("Note: Periods may overlap\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary_contains_rows_and_separators() {
        let rows = vec![
            SummaryRow {
                label: "Last 7 Days".to_string(),
                start: date(2025, 11, 27),
                end: date(2025, 12, 3),
                downloads: 4521,
            },
            SummaryRow {
                label: "Year to Date".to_string(),
                start: date(2025, 1, 1),
                end: date(2025, 12, 3),
                downloads: 1234567,
            },
        ];

        let out = render_summary(&rows);
        assert!(out.contains("SUMMARY"));
        assert!(out.contains("Last 7 Days"));
        assert!(out.contains("4,521"));
        assert!(out.contains("1,234,567"));
        assert!(out.contains("Periods may overlap"));
    }

    #[test]
    fn test_header_names_package() {
        let at = DateTime::parse_from_rfc3339("2025-12-03T10:15:30Z")
            .unwrap()
            .with_timezone(&Utc);
        let out = render_header("mcp-server-kubernetes", at);
        assert!(out.contains("NPM Download Report for: mcp-server-kubernetes"));
        assert!(out.contains("2025-12-03 10:15:30"));
    }
}
