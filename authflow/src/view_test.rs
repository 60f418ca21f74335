use super::*;
use crate::session::SessionStore;
use crate::types::UserRecord;

fn signed_in() -> SessionStore {
    let mut store = SessionStore::new();
    store.complete_login(UserRecord::default(), "tok".to_owned());
    store
}

#[test]
fn gate_starts_loading() {
    assert_eq!(ViewGate::default(), ViewGate::Loading);
    assert!(!ViewGate::default().is_ready());
}

#[test]
fn loading_gate_hides_both_views() {
    let gate = ViewGate::default();
    assert_eq!(gate.select(SessionStore::new().state()), RootView::Loading);
    assert_eq!(gate.select(signed_in().state()), RootView::Loading);
}

#[test]
fn ready_gate_shows_auth_when_signed_out() {
    let mut gate = ViewGate::default();
    gate.mark_ready();
    assert_eq!(gate.select(SessionStore::new().state()), RootView::Auth);
}

#[test]
fn ready_gate_shows_home_when_signed_in() {
    let mut gate = ViewGate::default();
    gate.mark_ready();
    assert_eq!(gate.select(signed_in().state()), RootView::Home);
}

#[test]
fn selection_follows_session_changes() {
    let mut gate = ViewGate::default();
    gate.mark_ready();
    let mut store = signed_in();
    assert_eq!(gate.select(store.state()), RootView::Home);
    store.clear();
    assert_eq!(gate.select(store.state()), RootView::Auth);
}

#[test]
fn mark_ready_is_idempotent() {
    let mut gate = ViewGate::default();
    gate.mark_ready();
    gate.mark_ready();
    assert!(gate.is_ready());
}
