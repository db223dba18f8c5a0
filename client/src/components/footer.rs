//! Site footer.

use leptos::prelude::*;

use crate::config::FooterConfig;

/// Renders nothing when the site has no footer configured.
#[component]
pub fn Footer(config: Option<FooterConfig>) -> impl IntoView {
    config.map(|footer| {
        view! {
            <footer class="footer">
                <div class="footer__copyright">{footer.copyright}</div>
            </footer>
        }
    })
}
