//! Login / signup page backed by `authflow::CredentialForm`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use authflow::{AuthApi, AuthError, AuthResponse, CredentialForm, Field, Mode, SessionStore, SubmitOutcome};
use leptos::prelude::*;

use crate::net::api::BrowserAuthApi;

/// Label of the submit button.
pub(crate) fn submit_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Login",
        Mode::Signup => "Create Account",
    }
}

/// Text of the mode toggle link.
pub(crate) fn toggle_prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "No account? Create one",
        Mode::Signup => "Already have an account?",
    }
}

/// Input label and HTML `type` for a field.
pub(crate) fn input_spec(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Username => ("Username", "text"),
        Field::Password => ("Password", "password"),
        Field::Email => ("Email", "email"),
    }
}

/// Settle a submission started from the page. The session signal is only
/// written when the identity changed, so a failure leaves the page (and the
/// typed values) in place.
pub(crate) fn settle_submit(
    form: RwSignal<CredentialForm>,
    session: RwSignal<SessionStore>,
    result: Result<AuthResponse, AuthError>,
) -> Option<SubmitOutcome> {
    let mut store = session.get_untracked();
    let outcome = form.try_update(|f| f.finish_submit(result, &mut store));
    if outcome == Some(SubmitOutcome::Authenticated) {
        session.set(store);
    }
    outcome
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let api = expect_context::<BrowserAuthApi>();
    let form = RwSignal::new(CredentialForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.try_update(CredentialForm::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(blocked)) => {
                log::debug!("submit not started: {blocked}");
                return;
            }
            None => return,
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.post_credentials(request.endpoint, &request.credentials).await;
            settle_submit(form, session, result);
        });
    };

    let mode = move || form.with(CredentialForm::mode);

    view! {
        <div class="auth">
            <div class="card">
                <form on:submit=on_submit>
                    <CredentialInput form=form field=Field::Username/>
                    <CredentialInput form=form field=Field::Password/>
                    <Show when=move || mode() == Mode::Signup>
                        <CredentialInput form=form field=Field::Email/>
                    </Show>
                    <div class="inputWrapper">
                        <button type="submit" disabled=move || form.with(CredentialForm::is_loading)>
                            {move || submit_label(mode())}
                        </button>
                    </div>
                    <p class="auth__toggle" on:click=move |_| form.update(CredentialForm::toggle_mode)>
                        {move || toggle_prompt(mode())}
                    </p>
                </form>
            </div>
        </div>
    }
}

/// One bound input with its live validation message.
#[component]
fn CredentialInput(form: RwSignal<CredentialForm>, field: Field) -> impl IntoView {
    let (label, input_type) = input_spec(field);
    let error = move || form.with(|f| f.error(field).map(str::to_owned));

    view! {
        <div class="inputWrapper">
            <label>
                <span>{label}</span>
                <input
                    type=input_type
                    name=field.name()
                    class:invalid=move || error().is_some()
                    prop:value=move || form.with(|f| f.values().get(field).to_owned())
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                />
            </label>
            <p class="inputWrapper__helper">{error}</p>
        </div>
    }
}
