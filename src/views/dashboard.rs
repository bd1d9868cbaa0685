//! Dashboard aggregation over the record collection

use crate::records::SurgicalRecord;
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;
use std::fmt::Write as _;

/// How many procedures the ranking shows
const TOP_PROCEDURES: usize = 8;

/// Aggregate statistics for the dashboard screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// Total records held
    pub total: usize,

    /// Records whose timestamp falls in the current calendar month
    pub this_month: usize,

    /// Procedure names ranked by count, most frequent first, capped
    pub top_procedures: Vec<(String, usize)>,
}

impl DashboardStats {
    /// Aggregate the collection. Records with unparseable timestamps count
    /// toward the total but not toward the monthly figure.
    pub fn from_records(records: &[SurgicalRecord]) -> Self {
        let now = Utc::now();

        let this_month = records
            .iter()
            .filter_map(|r| DateTime::parse_from_rfc3339(&r.timestamp).ok())
            .filter(|t| t.year() == now.year() && t.month() == now.month())
            .count();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in records {
            let procedure = if record.operative_procedure.is_empty() {
                "Unknown"
            } else {
                &record.operative_procedure
            };
            *counts.entry(procedure).or_insert(0) += 1;
        }

        let mut top_procedures: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        // Ties break alphabetically so the ranking is stable
        top_procedures.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_procedures.truncate(TOP_PROCEDURES);

        Self {
            total: records.len(),
            this_month,
            top_procedures,
        }
    }
}

/// Plain-text rendering of the dashboard screen
pub fn render(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Surgical Dashboard");
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "Total patients:   {}", stats.total);
    let _ = writeln!(out, "Procedures done:  {}", stats.total);
    let _ = writeln!(out, "This month:       {}", stats.this_month);
    let _ = writeln!(out);

    if stats.top_procedures.is_empty() {
        let _ = writeln!(out, "No records found to display");
    } else {
        let _ = writeln!(out, "Top operative procedures:");
        for (name, count) in &stats.top_procedures {
            let _ = writeln!(out, "  {:>4}  {}", count, name);
        }
    }
    out
}
