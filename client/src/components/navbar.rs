//! Site navbar rendered from `SiteConfig`.

use leptos::prelude::*;

use super::nav_auth_link::NavAuthLink;
use crate::config::{NavbarConfig, NavbarItem, NavbarPosition};

pub const DOCS_HREF: &str = "/docs";

#[component]
pub fn Navbar(config: NavbarConfig) -> impl IntoView {
    let render_side =
        |position: NavbarPosition| config.items_at(position).cloned().map(render_item).collect_view();
    let left = render_side(NavbarPosition::Left);
    let right = render_side(NavbarPosition::Right);
    let logo = config.logo.clone().map(|logo| {
        view! {
            <img
                class="navbar__logo"
                src=logo.src
                alt=logo.alt
                height=logo.height.map(|h| h.to_string())
                width=logo.width.map(|w| w.to_string())
            />
        }
    });

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__items">
                    <a class="navbar__brand" href="/">
                        {logo}
                        <b class="navbar__title">{config.title.clone()}</b>
                    </a>
                    {left}
                </div>
                <div class="navbar__items navbar__items--right">{right}</div>
            </div>
        </nav>
    }
}

fn render_item(item: NavbarItem) -> AnyView {
    match item {
        NavbarItem::DocSidebar { label, .. } => {
            view! { <a class="navbar__item navbar__link" href=DOCS_HREF>{label}</a> }.into_any()
        }
        NavbarItem::Link { href, label, .. } => {
            let external = href.starts_with("http://") || href.starts_with("https://");
            view! {
                <a
                    class="navbar__item navbar__link"
                    href=href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {label}
                </a>
            }
            .into_any()
        }
        NavbarItem::AuthLink { auth_type, .. } => view! { <NavAuthLink auth_type/> }.into_any(),
    }
}
