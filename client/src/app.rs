//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::{AuthApiConfig, SiteConfig};
use crate::net::api::HttpAuthApi;
use crate::pages::{docs::DocsPage, home::HomePage};
use crate::state::auth::AuthServices;
use crate::state::session::SessionStore;
use crate::util::theme::{self, SITE_COLOR_MODE};
use crate::util::{host_page, token_storage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=SITE_COLOR_MODE.attribute()>
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
/// Owns the session store and the browser capabilities, and hands them to
/// the tree: the store through `AuthProvider`, the rest as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = SiteConfig::load();
    let storage = token_storage::for_environment();
    let store = Arc::new(SessionStore::new(Arc::clone(&storage)));
    let api = HttpAuthApi::new(AuthApiConfig::from_build_env(), storage);
    provide_context(AuthServices::new(Arc::new(api), host_page::for_environment()));
    let title = site.title.clone();
    let navbar = site.navbar.clone();
    let footer = site.footer.clone();
    provide_context(site);

    Effect::new(move || theme::apply(SITE_COLOR_MODE));

    view! {
        <Stylesheet id="leptos" href="/pkg/robonerve.css"/>
        <Title text=title/>

        <AuthProvider store>
            <Router>
                <Navbar config=navbar/>
                <main class="main-wrapper">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("docs") view=DocsPage/>
                    </Routes>
                </main>
                <Footer config=footer/>
            </Router>
        </AuthProvider>
    }
}
