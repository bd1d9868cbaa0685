use std::time::Duration;
use surgilog::prelude::*;
use surgilog::views::{visible_tabs, Tab};

fn client_with_session(dir: &tempfile::TempDir) -> SurgiLog {
    let options = ClientOptions::default()
        .with_admin_emails(["admin@x"])
        .with_sync_delay(Duration::from_millis(10))
        .with_session_path(dir.path().join("session.json"));
    SurgiLog::new_with_options("http://127.0.0.1:1", options)
}

#[test]
fn admin_login_sees_the_new_record_entry() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_with_session(&dir);

    let user = client.auth().login("admin@x").unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(visible_tabs(user.role).contains(&Tab::NewRecord));
}

#[test]
fn staff_login_sees_the_new_record_entry() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_with_session(&dir);

    let user = client.auth().login("doc@hospital.com").unwrap();
    assert_eq!(user.role, Role::User);
    assert!(visible_tabs(user.role).contains(&Tab::NewRecord));
}

#[test]
fn guest_login_is_viewer_without_the_form() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_with_session(&dir);

    let user = client.auth().login("guest@example.com").unwrap();
    assert_eq!(user.role, Role::Viewer);
    assert!(!visible_tabs(user.role).contains(&Tab::NewRecord));
}

#[test]
fn session_survives_a_new_client_instance() {
    let dir = tempfile::tempdir().unwrap();
    let logged_in = client_with_session(&dir).auth().login("doc@hospital.com").unwrap();

    let restored = client_with_session(&dir)
        .auth()
        .current_user()
        .unwrap()
        .expect("session should persist");
    assert_eq!(restored, logged_in);
}

#[test]
fn logout_forces_the_login_prompt_next_run() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_with_session(&dir);
    client.auth().login("doc@hospital.com").unwrap();
    client.auth().logout().unwrap();
    assert!(client.auth().current_user().unwrap().is_none());
}

#[test]
fn preview_back_routing_follows_the_draft_marker() {
    let mut controller = ViewController::new();

    // draft assembled on the form for quick print
    let draft = SurgicalRecord {
        id: "temp-1690000000000".to_string(),
        ..Default::default()
    };
    controller.show_form();
    controller.open_preview(draft);
    controller.back_from_preview();
    assert_eq!(controller.active(), View::Form);

    // persisted record opened from search
    let stored = SurgicalRecord {
        id: "abc123".to_string(),
        ..Default::default()
    };
    controller.show_search();
    controller.open_preview(stored);
    controller.back_from_preview();
    assert_eq!(controller.active(), View::Search);
}
