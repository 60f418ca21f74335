//! Root application component with the session context and view guard.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use authflow::{RootView, SessionStore, ViewGate};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::BrowserAuthApi;
use crate::pages::{auth::AuthPage, home::HomePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one `SessionStore` for the app's lifetime and provides it, the
/// auth transport and the view gate to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new());
    let gate = RwSignal::new(ViewGate::default());

    provide_context(session);
    provide_context(gate);
    provide_context(BrowserAuthApi::from_build_env());

    // Effects only run in the browser, so SSR and the first hydrated frame
    // both render the placeholder.
    Effect::new(move || gate.update(ViewGate::mark_ready));

    view! {
        <Title text="Gatehouse"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootGuard/>
            </Routes>
        </Router>
    }
}

/// Selected root view. Only notifies readers when the selection changes, so
/// session writes that keep the same view do not rebuild the page.
pub(crate) fn root_view(session: RwSignal<SessionStore>, gate: RwSignal<ViewGate>) -> Memo<RootView> {
    Memo::new(move |_| session.with(|s| gate.get().select(s.state())))
}

/// Renders exactly one of the loading placeholder, the auth page or the home
/// page.
#[component]
fn RootGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let gate = expect_context::<RwSignal<ViewGate>>();
    let selected = root_view(session, gate);

    move || match selected.get() {
        RootView::Loading => view! { <p>"Loading..."</p> }.into_any(),
        RootView::Auth => view! { <AuthPage/> }.into_any(),
        RootView::Home => view! { <HomePage/> }.into_any(),
    }
}
