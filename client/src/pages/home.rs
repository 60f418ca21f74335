//! Signed-in home screen.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use authflow::{SessionStore, UserRecord};
use leptos::prelude::*;

pub(crate) fn greeting(user: Option<&UserRecord>) -> String {
    match user.and_then(UserRecord::display_name) {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}

/// Home page — greets the user; signing out clears the session and the root
/// guard swaps back to the auth page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    view! {
        <div class="home-page">
            <h1>{move || session.with(|s| greeting(s.state().user.as_ref()))}</h1>
            <button class="home-page__sign-out" on:click=move |_| session.update(SessionStore::clear)>
                "Sign out"
            </button>
        </div>
    }
}
