//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are server-rendered by Leptos and hydrated by the client bundle
//! served under `/pkg`. Anything else under the site root (images, favicon)
//! is served as static files. Authentication itself is handled by the
//! external Auth API, so there are no auth endpoints here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Routes that do not depend on Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site router using the `[package.metadata.leptos]` configuration.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(site(conf.leptos_options))
}

fn site(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
