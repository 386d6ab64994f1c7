//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;

/// Root application component. The app has a single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Data relay"/>
        <main class="container">
            <h1>"Data relay"</h1>
            <HomePage/>
        </main>
    }
}
