//! Runtime configuration, read once at startup from the environment.

use std::env;

/// Application configuration.
pub struct Config {
    /// Address the web server binds to.
    pub bind_addr: String,

    /// Base URL of the query backend (no trailing slash).
    pub api_url: String,

    /// Admin login accepted by the dashboard gate.
    pub admin_login: String,

    /// Admin password accepted by the dashboard gate.
    pub admin_password: String,
}

impl Config {
    /// Load the configuration from environment variables, falling back
    /// to defaults for anything unset. Missing admin credentials are
    /// allowed; the login form value is compared against the empty
    /// string and will simply never match a non-empty submission.
    pub fn load() -> Self {
        Self {
            bind_addr: var_or("BIND_ADDR", "127.0.0.1:3000"),
            api_url: strip_trailing_slash(&var_or("API_URL", "http://127.0.0.1:8000")),
            admin_login: var_or("ADMIN_LOGIN", ""),
            admin_password: var_or("ADMIN_PASSWORD", ""),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) => value,
        Err(_) => {
            log::info!("{key} not set, using default: {default:?}");
            default.to_string()
        }
    }
}

/// Normalize a base URL so paths can be appended with a single slash.
/// Strips at most one trailing slash.
fn strip_trailing_slash(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_one_trailing_slash() {
        assert_eq!(strip_trailing_slash("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(strip_trailing_slash("http://localhost:8000"), "http://localhost:8000");
        // Only one slash comes off, matching the front-end's URL cleanup.
        assert_eq!(strip_trailing_slash("http://localhost:8000//"), "http://localhost:8000/");
    }
}
