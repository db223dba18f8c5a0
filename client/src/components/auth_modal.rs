//! Login/signup overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controlled by its owner: the modal renders whatever `AuthModalState` the
//! owner's signal holds and writes every edit back into it. Submission goes
//! through `submit_modal`, which talks to the injected Auth API and host page.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::ExperienceLevel;
use crate::state::auth::{use_auth, use_auth_services};
use crate::state::modal::{AuthMode, AuthModalState, ModalDraft};
use crate::state::submit::submit_modal;

/// Overlay bound to the modal state inside `modal`.
///
/// Closes on the Close button, a backdrop click or Escape. While a request
/// is in flight every input, toggle and the submit button are disabled.
#[component]
pub fn AuthModal<T>(modal: RwSignal<T>) -> impl IntoView
where
    T: AsRef<AuthModalState> + AsMut<AuthModalState> + Send + Sync + 'static,
{
    let auth = use_auth();
    let services = use_auth_services();

    let is_open = Memo::new(move |_| modal.with(|m| m.as_ref().is_open()));
    let draft = Memo::new(move |_| modal.with(|m| m.as_ref().draft().clone()));
    let busy = move || draft.with(|d| d.is_loading);

    let close = Callback::new(move |()| modal.update(|m| m.as_mut().close()));
    let set_mode = Callback::new(move |mode: AuthMode| {
        modal.update(|m| {
            m.as_mut().set_mode(mode);
        });
    });
    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let store = Arc::clone(auth.store());
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let _ = submit_modal(&modal, &store, &services).await;
        });
    });
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close.run(());
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="auth-modal__overlay" on:click=move |_| close.run(())>
                <div
                    class="auth-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <h2 class="auth-modal__title">{move || draft.with(|d| d.mode.title())}</h2>
                    <Show when=move || draft.with(|d| d.error.is_some())>
                        <p class="auth-modal__error" role="alert">
                            {move || draft.with(|d| d.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <div class="auth-modal__toggle-group">
                        {[AuthMode::Login, AuthMode::Signup]
                            .into_iter()
                            .map(move |mode| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || toggle_class(draft.with(|d| d.mode == mode))
                                        disabled=busy
                                        on:click=move |_| set_mode.run(mode)
                                    >
                                        {mode.title()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <form class="auth-modal__form" on:submit=move |ev| on_submit.run(ev)>
                        <div class="auth-modal__group">
                            <label class="auth-modal__label">"Email:"</label>
                            <input
                                class="auth-modal__input"
                                type="email"
                                required
                                autocomplete="email"
                                disabled=busy
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| modal.update(|m| m.as_mut().set_email(event_target_value(&ev)))
                            />
                        </div>
                        <div class="auth-modal__group">
                            <label class="auth-modal__label">"Password:"</label>
                            <input
                                class="auth-modal__input"
                                type="password"
                                required
                                disabled=busy
                                prop:value=move || draft.with(|d| d.password.clone())
                                on:input=move |ev| modal.update(|m| m.as_mut().set_password(event_target_value(&ev)))
                            />
                        </div>
                        <Show when=move || draft.with(|d| d.mode == AuthMode::Signup)>
                            <ExperienceLevelSelect draft modal/>
                        </Show>
                        <button class="auth-modal__submit" type="submit" disabled=busy>
                            {move || submit_label(&draft.get())}
                        </button>
                    </form>
                    <p class="auth-modal__switch">
                        {move || draft.with(|d| d.mode.switch_prompt().0)}
                        " "
                        <button
                            type="button"
                            class="auth-modal__switch-link"
                            disabled=busy
                            on:click=move |_| {
                                let next = draft.with_untracked(|d| d.mode.other());
                                set_mode.run(next);
                            }
                        >
                            {move || draft.with(|d| d.mode.switch_prompt().1)}
                        </button>
                    </p>
                    <button type="button" class="auth-modal__close" on:click=move |_| close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ExperienceLevelSelect<T>(draft: Memo<ModalDraft>, modal: RwSignal<T>) -> impl IntoView
where
    T: AsRef<AuthModalState> + AsMut<AuthModalState> + Send + Sync + 'static,
{
    view! {
        <div class="auth-modal__group">
            <label class="auth-modal__label">"Experience Level:"</label>
            <select
                class="auth-modal__select"
                disabled=move || draft.with(|d| d.is_loading)
                prop:value=move || draft.with(|d| d.experience_level.as_str())
                on:change=move |ev| {
                    if let Some(level) = ExperienceLevel::parse(&event_target_value(&ev)) {
                        modal.update(|m| m.as_mut().set_experience_level(level));
                    }
                }
            >
                {ExperienceLevel::ALL
                    .into_iter()
                    .map(|level| view! { <option value=level.as_str()>{level.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active { "auth-modal__toggle auth-modal__toggle--active" } else { "auth-modal__toggle" }
}

fn submit_label(draft: &ModalDraft) -> &'static str {
    match (draft.is_loading, draft.mode) {
        (true, _) => "Please wait…",
        (false, mode) => mode.title(),
    }
}
