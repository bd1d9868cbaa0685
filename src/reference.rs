//! Static clinical reference data for form autocomplete

/// Departments offered by the new-record form
pub const DEPARTMENTS: &[&str] = &[
    "General Surgery",
    "Orthopedics",
    "OB-GYN",
    "ENT",
    "Neurosurgery",
    "Plastic Surgery",
    "Urology",
    "Cardiothoracic",
];

/// Ward names offered by the new-record form
pub const WARDS: &[&str] = &[
    "Ward 1 (Male)",
    "Ward 2 (Female)",
    "ICU",
    "Pediatric Ward",
    "Post-op Recovery",
    "Private Room A",
    "Private Room B",
];

/// Staff names offered for the surgeon/assistant/nurse fields
pub const STAFF_NAMES: &[&str] = &[
    "นพ. ภิญญพันธ์ สุขสวัสดิ์",
    "นพ. ภานุวัฒน์ ธนะภูมิ",
    "นพ. ภัทรพล จันทร์โอชา",
    "พญ. ภัสสรา วรรณพงษ์",
    "พญ. กรกนก สุวรรณ",
    "พญ. กัลยา วิจิตร",
    "นพ. สมชาย เข็มกลัด",
    "พญ. สุดาพร ทองดี",
    "นพ. วิชัย มานะลาภ",
    "นพ. ประสิทธิ์ วงศ์เจริญ",
    "พญ. อารีรัตน์ แก้วใส",
];

/// Clinician title prefixes ignored when matching staff names
const STAFF_TITLES: &[&str] = &["นพ.", "พญ."];

/// Staff suggestions are capped to the form's dropdown size
const MAX_STAFF_SUGGESTIONS: usize = 10;

/// Case-insensitive substring suggestion over an option list. An empty
/// input suggests nothing, matching the form's type-to-see behaviour.
pub fn suggest<'a>(options: &[&'a str], input: &str) -> Vec<&'a str> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Staff-name suggestion: matches against the full name, or against the
/// name with the clinician title (นพ./พญ.) stripped so a bare name still
/// finds its owner. Capped to the first matches like the form's dropdown.
pub fn suggest_staff(input: &str) -> Vec<&'static str> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    STAFF_NAMES
        .iter()
        .filter(|name| {
            if name.to_lowercase().contains(&needle) {
                return true;
            }
            let mut bare = name.to_string();
            for title in STAFF_TITLES {
                bare = bare.replace(title, "");
            }
            bare.trim().contains(input)
        })
        .copied()
        .take(MAX_STAFF_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_by_case_insensitive_substring() {
        let matches = suggest(DEPARTMENTS, "surg");
        assert!(matches.contains(&"General Surgery"));
        assert!(matches.contains(&"Plastic Surgery"));
        assert!(!matches.contains(&"ENT"));
    }

    #[test]
    fn empty_input_suggests_nothing() {
        assert!(suggest(WARDS, "").is_empty());
        assert!(suggest(WARDS, "   ").is_empty());
    }

    #[test]
    fn thai_names_match_on_partials() {
        let matches = suggest(STAFF_NAMES, "พญ.");
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|name| name.contains("พญ.")));
    }

    #[test]
    fn staff_match_works_without_the_title() {
        let matches = suggest_staff("สมชาย เข็มกลัด");
        assert_eq!(matches, vec!["นพ. สมชาย เข็มกลัด"]);
    }

    #[test]
    fn staff_suggestions_are_capped() {
        // "พ" occurs in every clinician title, so everything matches
        let matches = suggest_staff("พ");
        assert_eq!(matches.len(), MAX_STAFF_SUGGESTIONS);
    }

    #[test]
    fn staff_suggestion_ignores_empty_input() {
        assert!(suggest_staff("").is_empty());
    }
}
