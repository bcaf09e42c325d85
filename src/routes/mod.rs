//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the portfolio at `/`. The compiled WASM/JS/CSS bundle
//! is served from `<site_root>/pkg`, and any other path falls through to the
//! public asset directory (profile photo, robots.txt).

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Health check plus public static files.
pub fn static_routes(public_dir: &Path) -> Router {
    let public = ServeDir::new(public_dir).append_index_html_on_directories(false);

    Router::new().route("/healthz", get(healthz)).fallback_service(public)
}

/// Full application: Leptos SSR + `/pkg` bundle + public assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let public_dir = config.public_dir_or(&site_root);
    tracing::info!(site_root = %site_root.display(), public_dir = %public_dir.display(), "serving assets");

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(static_routes(&public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
