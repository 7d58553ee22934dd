//! Admin login and the cookie gate in front of the dashboard.
//!
//! There is exactly one admin account, configured through the
//! environment. Authentication state is a single cookie whose presence
//! is the whole check; no sessions, no hashing. This is a deliberate
//! non-goal of the application, not an oversight.

use std::sync::Arc;

use axum::{
    Form,
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;

use crate::app::AppState;

/// Name of the cookie that marks an authenticated admin.
pub const AUTH_COOKIE: &str = "admin_authenticated";

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct AdminCredentials {
    /// Admin login name.
    pub admin: String,

    /// Password in plaintext (only transmitted, never stored).
    pub password: String,
}

/// Check submitted credentials against the configured admin account.
///
/// Comparison is case-insensitive on both fields.
pub fn credentials_valid(
    valid_admin: &str,
    valid_password: &str,
    admin: &str,
    password: &str,
) -> bool {
    admin.to_lowercase() == valid_admin.to_lowercase()
        && password.to_lowercase() == valid_password.to_lowercase()
}

/// Serve the login page HTML
///
/// # Returns
/// * `Html<&'static str>` - The login page HTML
pub async fn serve_login_page() -> Html<&'static str> {
    Html(include_str!("./static/login.html"))
}

/// Handle admin login requests
///
/// Processes login form submissions and sets the auth cookie if the
/// credentials match the configured admin account.
///
/// # Arguments
/// * `state` - Application state holding the configured credentials
/// * `jar` - Cookie jar for storing the auth cookie
/// * `credentials` - Form data containing the admin login and password
///
/// # Returns
/// * `Response` - Redirect to the dashboard if successful, or back to
///   the login page with an error if not
#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(credentials): Form<AdminCredentials>,
) -> Response {
    if credentials_valid(
        &state.config.admin_login,
        &state.config.admin_password,
        &credentials.admin,
        &credentials.password,
    ) {
        log::info!("admin logged in");

        let mut cookie = Cookie::new(AUTH_COOKIE, "true");
        cookie.set_path("/");
        cookie.set_max_age(Duration::days(1));

        (jar.add(cookie), Redirect::to("/dashboard")).into_response()
    } else {
        log::warn!("rejected login attempt for {:?}", credentials.admin);
        Redirect::to("/login?error=Invalid+credentials").into_response()
    }
}

/// Handle admin logout
///
/// Clears the auth cookie and redirects to the landing page.
pub async fn handle_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");

    (jar.remove(cookie), Redirect::to("/"))
}

/// Where the gate sends a request, if anywhere.
///
/// `/` and `/login` are public, `/dashboard` (and below) requires the
/// auth cookie, and everything else (the chat API, static assets) is
/// left alone. An unauthenticated hit on a gated page bounces to the
/// landing page; an authenticated admin landing on a public page is
/// sent straight to the dashboard.
fn gate_redirect(path: &str, is_authenticated: bool) -> Option<&'static str> {
    let is_public = path == "/" || path == "/login";
    let is_gated = is_public || path == "/dashboard" || path.starts_with("/dashboard/");

    if !is_gated {
        return None;
    }

    if !is_authenticated && !is_public {
        return Some("/");
    }

    if is_authenticated && is_public {
        return Some("/dashboard");
    }

    None
}

/// Authentication middleware
///
/// Applies [`gate_redirect`] to the request path: either passes the
/// request through or answers with the redirect it picked.
///
/// # Arguments
/// * `jar` - Cookie jar containing the auth cookie, if any
/// * `request` - The incoming request
/// * `next` - Next middleware in the chain
///
/// # Returns
/// * `Response` - Either passes the request through or redirects
pub async fn admin_gate(jar: CookieJar, request: Request, next: Next) -> Response {
    let is_authenticated = jar.get(AUTH_COOKIE).is_some();

    match gate_redirect(request.uri().path(), is_authenticated) {
        Some(target) => Redirect::to(target).into_response(),
        None => next.run(request).await,
    }
}
