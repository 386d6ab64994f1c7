//! The single page: a login panel or a data panel, never both.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session check runs once on mount and again on every "fetch data" click.
//! Each check applies its outcome to the shared [`SessionState`] signal when
//! it resolves; overlapping checks are not cancelled.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::api::{navigate_to_login, navigate_to_logout};
use crate::state::session::{DataPanel, NO_DATA_MESSAGE, SessionState};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    let view_model = Memo::new(move |_| session.with(SessionState::view));

    let reconcile = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{BrowserTransport, data_url};
            use crate::state::session::{SessionOutcome, check_session_via_data_fetch};

            let transport = BrowserTransport::new(data_url());
            let outcome = check_session_via_data_fetch(&transport).await;
            if matches!(outcome, SessionOutcome::Authenticated(_)) {
                log::info!("session check: {outcome}");
            } else {
                log::warn!("session check: {outcome}");
            }
            session.update(|s| {
                s.apply(outcome);
            });
        });
    };

    // Initial check on load.
    reconcile();

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate_to_login();
    };

    view! {
        <section id="login-section" class="panel" class:hidden=move || !view_model.get().login_visible>
            <h2>"Inloggen"</h2>
            <form id="login-form" on:submit=on_login>
                <button type="submit" class="button">"Inloggen"</button>
            </form>
            <p id="error-message" class="error">{move || view_model.get().error_text}</p>
        </section>
        <section id="data-section" class="panel" class:hidden=move || !view_model.get().data_visible>
            <p>
                "Welkom, "
                <span id="user-name">{move || view_model.get().user_name}</span>
            </p>
            <div class="actions">
                <button id="fetch-data-btn" class="button" on:click=move |_| reconcile()>
                    "Data ophalen"
                </button>
                <button id="logout-btn" class="button button--secondary" on:click=move |_| navigate_to_logout()>
                    "Uitloggen"
                </button>
            </div>
            <div id="data-content">{move || data_content(view_model.get().data)}</div>
        </section>
    }
}

/// How the data region is marked up for a given panel.
#[derive(Debug, PartialEq, Eq)]
enum DataMarkup<'a> {
    Paragraph(&'a str),
    Preformatted(&'a str),
}

fn data_markup(panel: &DataPanel) -> Option<DataMarkup<'_>> {
    match panel {
        DataPanel::Cleared => None,
        DataPanel::NoRows => Some(DataMarkup::Paragraph(NO_DATA_MESSAGE)),
        DataPanel::Rows(json) => Some(DataMarkup::Preformatted(json)),
    }
}

fn data_content(panel: DataPanel) -> Option<AnyView> {
    let markup = match data_markup(&panel)? {
        DataMarkup::Paragraph(text) => view! { <p>{text.to_owned()}</p> }.into_any(),
        DataMarkup::Preformatted(text) => view! { <pre>{text.to_owned()}</pre> }.into_any(),
    };
    Some(markup)
}
