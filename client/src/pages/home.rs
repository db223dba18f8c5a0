//! Landing page with the site title and tagline.

use leptos::prelude::*;

use crate::components::navbar::DOCS_HREF;
use crate::config::SiteConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();

    view! {
        <header class="hero">
            <div class="hero__container">
                <h1 class="hero__title">{site.title}</h1>
                <p class="hero__subtitle">{site.tagline}</p>
                <a class="button button--primary" href=DOCS_HREF>"Start Reading"</a>
            </div>
        </header>
    }
}
