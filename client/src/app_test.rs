use super::*;
use authflow::{AuthError, AuthResponse, CredentialForm, Field, SubmitOutcome};
use serde_json::json;

use crate::pages::auth::settle_submit;

/// Signals as `App` provides them, with the gate already past loading.
struct Wiring {
    _owner: Owner,
    session: RwSignal<SessionStore>,
    form: RwSignal<CredentialForm>,
    selected: Memo<RootView>,
    /// Bumps each time something downstream of the selection re-runs, i.e.
    /// each time the guard would rebuild its page.
    rebuilds: Memo<usize>,
}

fn wiring() -> Wiring {
    let owner = Owner::new();
    owner.set();

    let session = RwSignal::new(SessionStore::new());
    let gate = RwSignal::new(ViewGate::default());
    gate.update(ViewGate::mark_ready);
    let selected = root_view(session, gate);
    let rebuilds = Memo::new(move |prev: Option<&usize>| {
        selected.track();
        prev.map_or(1, |n| n + 1)
    });

    let form = RwSignal::new(CredentialForm::new());
    form.update(|f| {
        f.set_field(Field::Username, "alice");
        f.set_field(Field::Password, "secret");
    });

    Wiring { _owner: owner, session, form, selected, rebuilds }
}

fn sample_response() -> AuthResponse {
    serde_json::from_value(json!({ "user": { "id": 1, "name": "a" }, "token": "tok123" })).expect("response")
}

#[test]
fn signed_out_session_selects_auth_only() {
    let w = wiring();
    assert_eq!(w.selected.get(), RootView::Auth);
}

#[test]
fn failed_submit_keeps_auth_page_and_form() {
    let w = wiring();
    assert_eq!(w.rebuilds.get(), 1);
    w.form.update(|f| {
        f.begin_submit().expect("request");
    });
    let before = w.form.with_untracked(|f| f.values().clone());

    let outcome = settle_submit(w.form, w.session, Err(AuthError::Transport("offline".to_owned())));

    assert_eq!(outcome, Some(SubmitOutcome::Failed));
    assert_eq!(w.rebuilds.get(), 1);
    assert_eq!(w.selected.get(), RootView::Auth);
    assert_eq!(w.form.with_untracked(|f| f.values().clone()), before);
    assert!(!w.form.with_untracked(CredentialForm::is_loading));
    assert_eq!(w.session.get_untracked(), SessionStore::new());
}

#[test]
fn session_write_with_same_view_does_not_rebuild() {
    let w = wiring();
    assert_eq!(w.rebuilds.get(), 1);
    w.session.update(|store| store.set_token("partial".to_owned()));
    assert_eq!(w.selected.get(), RootView::Auth);
    assert_eq!(w.rebuilds.get(), 1);
}

#[test]
fn successful_submit_switches_to_home() {
    let w = wiring();
    assert_eq!(w.rebuilds.get(), 1);
    w.form.update(|f| {
        f.begin_submit().expect("request");
    });

    let outcome = settle_submit(w.form, w.session, Ok(sample_response()));

    assert_eq!(outcome, Some(SubmitOutcome::Authenticated));
    assert_eq!(w.selected.get(), RootView::Home);
    assert_eq!(w.rebuilds.get(), 2);
    assert!(w.session.with_untracked(SessionStore::is_authenticated));
    assert_eq!(w.session.with_untracked(|s| s.state().token.clone()).as_deref(), Some("tok123"));
}

#[test]
fn sign_out_switches_back_to_auth() {
    let w = wiring();
    settle_submit(w.form, w.session, Ok(sample_response()));
    assert_eq!(w.selected.get(), RootView::Home);

    w.session.update(SessionStore::clear);
    assert_eq!(w.selected.get(), RootView::Auth);
}
