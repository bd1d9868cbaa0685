//! Screen selection and role-gated navigation

pub mod dashboard;
pub mod preview;
pub mod search;

use crate::auth::Role;
use crate::records::SurgicalRecord;

/// The four screens of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Form,
    Search,
    Preview,
}

/// Navigation entries shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    NewRecord,
    Search,
}

/// The navigation entries visible to a role.
///
/// Display-only gate: nothing in the record store client enforces it.
pub fn visible_tabs(role: Role) -> Vec<Tab> {
    if role.can_create_records() {
        vec![Tab::Dashboard, Tab::NewRecord, Tab::Search]
    } else {
        vec![Tab::Dashboard, Tab::Search]
    }
}

/// Selects the active screen and threads the previewed record through.
///
/// The only history kept is where the preview came from, and that is
/// derived from the previewed record itself: a draft id sends the back
/// action to the form, anything else to search.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    active: View,
    selected: Option<SurgicalRecord>,
}

impl ViewController {
    /// Start at the dashboard
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen
    pub fn active(&self) -> View {
        self.active
    }

    /// The record currently selected for preview, if any
    pub fn selected_record(&self) -> Option<&SurgicalRecord> {
        self.selected.as_ref()
    }

    /// Explicit navigation to the dashboard
    pub fn show_dashboard(&mut self) {
        self.active = View::Dashboard;
    }

    /// Explicit navigation to the new-record form
    pub fn show_form(&mut self) {
        self.active = View::Form;
    }

    /// Explicit navigation to search
    pub fn show_search(&mut self) {
        self.active = View::Search;
    }

    /// Open the print preview for a record, from the form (draft) or from
    /// search (persisted)
    pub fn open_preview(&mut self, record: SurgicalRecord) {
        self.selected = Some(record);
        self.active = View::Preview;
    }

    /// The preview's back action: to the form for a draft, else to search
    pub fn back_from_preview(&mut self) {
        let back_to = match &self.selected {
            Some(record) if record.is_draft() => View::Form,
            _ => View::Search,
        };
        self.active = back_to;
    }

    /// Post-submit redirect, after the write and refetch complete
    pub fn after_submit(&mut self) {
        self.active = View::Search;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{SurgicalRecord, DRAFT_ID_PREFIX};

    fn record(id: &str) -> SurgicalRecord {
        SurgicalRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_at_dashboard() {
        assert_eq!(ViewController::new().active(), View::Dashboard);
    }

    #[test]
    fn preview_from_form_returns_to_form() {
        let mut controller = ViewController::new();
        assert!(controller.selected_record().is_none());

        controller.show_form();
        controller.open_preview(record(&format!("{}1690000000000", DRAFT_ID_PREFIX)));
        assert_eq!(controller.active(), View::Preview);

        controller.back_from_preview();
        assert_eq!(controller.active(), View::Form);
    }

    #[test]
    fn preview_threads_the_selected_record_through() {
        let mut controller = ViewController::new();
        controller.show_search();
        controller.open_preview(record("abc123"));

        // the preview screen renders whatever record was selected
        let selected = controller.selected_record().expect("a record is selected");
        assert_eq!(selected.id, "abc123");
    }

    #[test]
    fn preview_from_search_returns_to_search() {
        let mut controller = ViewController::new();
        controller.show_search();
        controller.open_preview(record("abc123"));
        controller.back_from_preview();
        assert_eq!(controller.active(), View::Search);
    }

    #[test]
    fn submit_redirects_to_search() {
        let mut controller = ViewController::new();
        controller.show_form();
        controller.after_submit();
        assert_eq!(controller.active(), View::Search);
    }

    #[test]
    fn viewer_does_not_see_the_form_tab() {
        assert_eq!(
            visible_tabs(Role::Admin),
            vec![Tab::Dashboard, Tab::NewRecord, Tab::Search]
        );
        assert_eq!(
            visible_tabs(Role::User),
            vec![Tab::Dashboard, Tab::NewRecord, Tab::Search]
        );
        assert_eq!(visible_tabs(Role::Viewer), vec![Tab::Dashboard, Tab::Search]);
    }
}
