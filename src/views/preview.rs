//! Print preview: the fixed two-page operative report
//!
//! Page 1 carries the clinical fields, the wound-classification checklist
//! and the intra-operative flags; page 2 the image slots and the surgeon
//! signature line. The layout follows the clinic's Form 6 sheet.

use crate::records::{SurgicalRecord, WoundClassification};
use std::fmt::Write as _;

const PAGE_WIDTH: usize = 78;

fn rule(out: &mut String) {
    let _ = writeln!(out, "{}", "=".repeat(PAGE_WIDTH));
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Render the full two-page report for a record
pub fn render(record: &SurgicalRecord) -> String {
    let mut out = String::new();
    render_page_one(record, &mut out);
    let _ = writeln!(out);
    render_page_two(record, &mut out);
    out
}

fn render_page_one(record: &SurgicalRecord, out: &mut String) {
    rule(out);
    let _ = writeln!(out, "FORM 6{:>width$}", "OPERATIVE RECORD", width = PAGE_WIDTH - 6);
    rule(out);

    let date = record.timestamp.split('T').next().unwrap_or("");
    let _ = writeln!(
        out,
        "Date of operation: {}    Time: {} - {}",
        date, record.start_time, record.end_time
    );
    let _ = writeln!(
        out,
        "Surgeon: {}    Assistant: {}, {}",
        record.surgeon, record.assistant1, record.assistant2
    );
    let _ = writeln!(
        out,
        "Anesthesiologist: {}    Anesthesia: {}    Surgical nurse: {}",
        record.anesthesiologist, record.anesthesia_type, record.surgical_nurse
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Clinical diagnosis:       {}", record.clinical_diagnosis);
    let _ = writeln!(out, "Post-operative diagnosis: {}", record.post_op_diagnosis);
    let _ = writeln!(out, "Operative procedure:      {}", record.operative_procedure);
    let _ = writeln!(out);

    let _ = writeln!(out, "Finding:");
    let _ = writeln!(out, "  {}", or_default(&record.operative_note, "N/A"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Description of operation:");
    let _ = writeln!(out, "  Position: {}", record.position);
    let _ = writeln!(out, "  Incision: {}", record.incision);
    let _ = writeln!(out);

    let _ = writeln!(out, "Surgical wound classification:");
    for class in WoundClassification::all() {
        let marker = if class == record.wound_classification {
            "[x]"
        } else {
            "[ ]"
        };
        let _ = writeln!(out, "  {} {}", marker, class.label());
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Epidural anesthesia: {}", yes_no(record.epidural));
    let _ = writeln!(out, "A-Line:              {}", yes_no(record.a_line));
    let _ = writeln!(out, "Central line:        {}", yes_no(record.central_line));
    let _ = writeln!(out, "Foley catheter:      {}", yes_no(record.foley_catheter));
    let _ = writeln!(out, "Hair removed:        {}", yes_no(record.hair_removed));
    let _ = writeln!(out, "Antibiotic:          {}", or_default(&record.antibiotic, "Prophylaxis"));
    let _ = writeln!(out, "Skin prep - scrub: {}  antiseptic: {}",
        if record.skin_scrub { "Done" } else { "N/A" },
        if record.skin_antiseptic { "Done" } else { "N/A" },
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Intraoperative blood transfusion (PRC): {}",
        or_default(&record.blood_transfusion, "No")
    );
    let _ = writeln!(
        out,
        "Intraoperative complication: {}",
        or_default(&record.complications, "None")
    );
    let _ = writeln!(
        out,
        "Estimated blood loss: {} ml    Specimen for pathology: {}",
        or_default(&record.blood_loss, "0"),
        if record.specimen.is_empty() {
            "No".to_string()
        } else {
            format!("Yes ({})", record.specimen)
        }
    );
    let _ = writeln!(out);

    rule(out);
    let _ = writeln!(
        out,
        "Patient: {}    HN: {}    Department/Ward: {} / {}",
        record.patient_name, record.hospital_number, record.department, record.ward
    );
    let _ = writeln!(out, "{:^width$}", "OPERATIVE RECORD SHEET", width = PAGE_WIDTH);
    rule(out);
}

fn render_page_two(record: &SurgicalRecord, out: &mut String) {
    rule(out);
    let _ = writeln!(out, "FORM 6 (PAGE 2)");
    rule(out);

    let _ = writeln!(out, "Photo 1: {}", image_slot(&record.image1_url));
    let _ = writeln!(out, "Photo 2: {}", image_slot(&record.image2_url));
    let _ = writeln!(out);
    let _ = writeln!(out, "Description of operation (continue):");
    let _ = writeln!(out, "  {}", ".".repeat(PAGE_WIDTH - 2));
    let _ = writeln!(out);
    let _ = writeln!(out, "{:>width$}", format!("( {} )", record.surgeon), width = PAGE_WIDTH);
    let _ = writeln!(out, "{:>width$}", "Surgeon Signature", width = PAGE_WIDTH);
}

fn image_slot(data_uri: &str) -> String {
    if data_uri.is_empty() {
        "No image provided".to_string()
    } else {
        format!("[embedded image, {} bytes]", data_uri.len())
    }
}
