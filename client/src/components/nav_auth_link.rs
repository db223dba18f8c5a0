//! Session-aware navbar entry (`custom-AuthLink`).

use std::sync::Arc;

use leptos::prelude::*;

use super::auth_modal::AuthModal;
use crate::state::auth::use_auth;
use crate::state::nav::{AuthType, NavAuthControl};

/// "Logout" when signed in, otherwise "Login"/"Sign Up" opening this
/// entry's own modal.
#[component]
pub fn NavAuthLink(auth_type: AuthType) -> impl IntoView {
    let auth = use_auth();
    let session = auth.session();
    let store = Arc::clone(auth.store());
    let control = RwSignal::new(NavAuthControl::new(auth_type));

    let label = move || {
        let session = session.get();
        control.with(|c| c.entry(session).label)
    };
    let on_click = move |_| {
        control.update(|c| {
            let action = c.click(&store);
            log::debug!("navbar auth entry clicked: {action:?}");
        });
    };

    view! {
        <button type="button" class="navbar__item navbar__link navbar-auth-link" on:click=on_click>
            {label}
        </button>
        <AuthModal modal=control/>
    }
}
