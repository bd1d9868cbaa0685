//! Operative record types

use crate::error::Error;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix marking a draft record assembled for print preview only
pub const DRAFT_ID_PREFIX: &str = "temp-";

/// Surgical-site contamination risk, the 4-level ordinal wound coding.
/// Serialized as the bare digit strings the sheet stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum WoundClassification {
    /// Class I / Clean
    #[default]
    #[serde(rename = "1")]
    Clean,
    /// Class II / Clean-Contaminated
    #[serde(rename = "2")]
    CleanContaminated,
    /// Class III / Contaminated
    #[serde(rename = "3")]
    Contaminated,
    /// Class IV / Dirty
    #[serde(rename = "4")]
    Dirty,
}

impl WoundClassification {
    /// The printed checklist label
    pub fn label(self) -> &'static str {
        match self {
            WoundClassification::Clean => "Class I / Clean",
            WoundClassification::CleanContaminated => "Class II / Clean-Contam",
            WoundClassification::Contaminated => "Class III / Contam",
            WoundClassification::Dirty => "Class IV / Dirty",
        }
    }

    /// All classes in checklist order
    pub fn all() -> [WoundClassification; 4] {
        [
            WoundClassification::Clean,
            WoundClassification::CleanContaminated,
            WoundClassification::Contaminated,
            WoundClassification::Dirty,
        ]
    }
}

/// One operative record, the flat row shape the remote sheet stores.
/// Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurgicalRecord {
    pub id: String,
    /// ISO-8601 creation timestamp
    pub timestamp: String,
    pub start_time: String,
    pub end_time: String,
    pub hospital_number: String,
    pub patient_name: String,
    pub ward: String,
    pub department: String,
    pub surgeon: String,
    pub assistant1: String,
    pub assistant2: String,
    pub anesthesiologist: String,
    pub anesthesia_type: String,
    pub surgical_nurse: String,
    pub clinical_diagnosis: String,
    pub post_op_diagnosis: String,
    pub operative_procedure: String,
    pub position: String,
    pub incision: String,
    pub operative_note: String,
    pub blood_loss: String,
    pub specimen: String,
    pub complications: String,
    pub wound_classification: WoundClassification,
    pub epidural: bool,
    pub a_line: bool,
    pub central_line: bool,
    pub foley_catheter: bool,
    pub hair_removed: bool,
    pub antibiotic: String,
    pub skin_scrub: bool,
    pub skin_antiseptic: bool,
    pub blood_transfusion: String,
    /// Embedded data URI, or empty
    pub image1_url: String,
    /// Embedded data URI, or empty
    pub image2_url: String,
}

impl SurgicalRecord {
    /// Whether this record is a print-only draft that was never submitted
    pub fn is_draft(&self) -> bool {
        self.id.starts_with(DRAFT_ID_PREFIX)
    }
}

/// Form input for one operative record, before an identifier and timestamp
/// are stamped on it.
///
/// `build_draft` produces a record for print preview only; `build_submission`
/// produces the record actually sent to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordDraft {
    pub start_time: String,
    pub end_time: String,
    pub hospital_number: String,
    pub patient_name: String,
    pub ward: String,
    pub department: String,
    pub surgeon: String,
    pub assistant1: String,
    pub assistant2: String,
    pub anesthesiologist: String,
    pub anesthesia_type: String,
    pub surgical_nurse: String,
    pub clinical_diagnosis: String,
    pub post_op_diagnosis: String,
    pub operative_procedure: String,
    pub position: String,
    pub incision: String,
    pub operative_note: String,
    pub blood_loss: String,
    pub specimen: String,
    pub complications: String,
    pub wound_classification: WoundClassification,
    pub epidural: bool,
    pub a_line: bool,
    pub central_line: bool,
    pub foley_catheter: bool,
    pub hair_removed: bool,
    pub antibiotic: String,
    pub skin_scrub: bool,
    pub skin_antiseptic: bool,
    pub blood_transfusion: String,
    pub image1_url: String,
    pub image2_url: String,
}

impl RecordDraft {
    /// Quick-print requires the patient to be identifiable
    pub fn validate_for_print(&self) -> Result<(), Error> {
        if self.hospital_number.trim().is_empty() || self.patient_name.trim().is_empty() {
            return Err(Error::record(
                "hospital number and patient name are required before printing",
            ));
        }
        Ok(())
    }

    /// Stamp a draft id and timestamp for print preview without submitting
    pub fn build_draft(&self) -> SurgicalRecord {
        let id = format!("{}{}", DRAFT_ID_PREFIX, Utc::now().timestamp_millis());
        self.build_with_id(id)
    }

    /// Stamp a fresh persisted id and timestamp for submission
    pub fn build_submission(&self) -> SurgicalRecord {
        self.build_with_id(Uuid::new_v4().simple().to_string())
    }

    fn build_with_id(&self, id: String) -> SurgicalRecord {
        SurgicalRecord {
            id,
            timestamp: Utc::now().to_rfc3339(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            hospital_number: self.hospital_number.clone(),
            patient_name: self.patient_name.clone(),
            ward: self.ward.clone(),
            department: self.department.clone(),
            surgeon: self.surgeon.clone(),
            assistant1: self.assistant1.clone(),
            assistant2: self.assistant2.clone(),
            anesthesiologist: self.anesthesiologist.clone(),
            anesthesia_type: self.anesthesia_type.clone(),
            surgical_nurse: self.surgical_nurse.clone(),
            clinical_diagnosis: self.clinical_diagnosis.clone(),
            post_op_diagnosis: self.post_op_diagnosis.clone(),
            operative_procedure: self.operative_procedure.clone(),
            position: self.position.clone(),
            incision: self.incision.clone(),
            operative_note: self.operative_note.clone(),
            blood_loss: self.blood_loss.clone(),
            specimen: self.specimen.clone(),
            complications: self.complications.clone(),
            wound_classification: self.wound_classification,
            epidural: self.epidural,
            a_line: self.a_line,
            central_line: self.central_line,
            foley_catheter: self.foley_catheter,
            hair_removed: self.hair_removed,
            antibiotic: self.antibiotic.clone(),
            skin_scrub: self.skin_scrub,
            skin_antiseptic: self.skin_antiseptic,
            blood_transfusion: self.blood_transfusion.clone(),
            image1_url: self.image1_url.clone(),
            image2_url: self.image2_url.clone(),
        }
    }
}

/// Encode raw image bytes as an embedded `data:` URI for the record's
/// two image fields.
pub fn image_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
