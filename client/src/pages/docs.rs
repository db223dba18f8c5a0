//! Textbook index page.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn DocsPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <section class="docs">
            <h1>"Textbook"</h1>
            <p>"Chapters on physical AI, robotics middleware and embodied intelligence."</p>
            <Show when=move || !auth.is_logged_in()>
                <p class="docs__hint">"Log in from the navbar to keep track of your progress."</p>
            </Show>
        </section>
    }
}
