//! Record search over the collection

use crate::auth::Role;
use crate::records::SurgicalRecord;
use std::fmt::Write as _;

/// Case-insensitive substring filter over hospital number, patient name
/// and operative procedure. An empty query matches everything.
pub fn search<'a>(records: &'a [SurgicalRecord], query: &str) -> Vec<&'a SurgicalRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.hospital_number.to_lowercase().contains(&query)
                || r.patient_name.to_lowercase().contains(&query)
                || r.operative_procedure.to_lowercase().contains(&query)
        })
        .collect()
}

/// Plain-text table of search results with role-gated action hints.
///
/// The delete action is shown to admins only. It is display-gated, not
/// enforced anywhere; the store client has no delete operation.
pub fn render(results: &[&SurgicalRecord], role: Role) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Search Records");
    let _ = writeln!(out, "==============");

    if results.is_empty() {
        let _ = writeln!(out, "No matching records found");
        return out;
    }

    let actions = if role == Role::Admin {
        "view print delete"
    } else {
        "view print"
    };

    for record in results {
        let date = record.timestamp.split('T').next().unwrap_or("");
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:<28} {:<20} {:<10} [{}]",
            record.hospital_number,
            record.patient_name,
            record.operative_procedure,
            record.surgeon,
            date,
            actions
        );
    }
    out
}
