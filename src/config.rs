//! Site configuration: defaults, build-time endpoint overrides, and optional
//! page-level JSON overrides.
//!
//! Build-time:
//! - `SITE_LOGIN_ENDPOINT`: production login URL
//! - `SITE_LOCAL_LOGIN_ENDPOINT`: login URL used when served from `localhost`
//!
//! Page-level: an optional `<script type="application/json" id="site-config">`
//! element whose keys override individual fields.

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "color-theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const DEFAULT_FRAGMENT_DIR: &str = "/components";
pub const DEFAULT_LOGIN_ENDPOINT: &str = "https://balkaneser.com/login";
pub const DEFAULT_LOCAL_LOGIN_ENDPOINT: &str = "http://localhost:8080/login";
pub const DEFAULT_LOGIN_SUCCESS_HREF: &str = "/#auth-success";

/// Hostname that selects the local login endpoint.
pub const LOCAL_HOSTNAME: &str = "localhost";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Local-storage key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Class toggled on `<html>` while dark mode is applied.
    pub dark_class: String,
    /// Scroll offset past which the header is raised.
    pub scroll_threshold_px: f64,
    /// Directory the navbar/footer fragments are served from.
    pub fragment_dir: String,
    pub login_endpoint: String,
    pub local_login_endpoint: String,
    /// Where a successful login navigates to.
    pub login_success_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            fragment_dir: DEFAULT_FRAGMENT_DIR.to_owned(),
            login_endpoint: endpoint_or(option_env!("SITE_LOGIN_ENDPOINT"), DEFAULT_LOGIN_ENDPOINT),
            local_login_endpoint: endpoint_or(option_env!("SITE_LOCAL_LOGIN_ENDPOINT"), DEFAULT_LOCAL_LOGIN_ENDPOINT),
            login_success_href: DEFAULT_LOGIN_SUCCESS_HREF.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse page-level overrides. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ConfigParse`] for malformed JSON, unknown keys, or
    /// a non-finite or negative scroll threshold.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SiteError::ConfigParse(e.to_string()))?;
        if !config.scroll_threshold_px.is_finite() || config.scroll_threshold_px < 0.0 {
            return Err(SiteError::ConfigParse(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                config.scroll_threshold_px
            )));
        }
        Ok(config)
    }

    /// Pick the login endpoint for the page's hostname.
    pub fn login_endpoint_for(&self, hostname: &str) -> &str {
        if hostname == LOCAL_HOSTNAME { &self.local_login_endpoint } else { &self.login_endpoint }
    }

    /// `#fragment` of the success href, e.g. `#auth-success`.
    pub fn success_fragment(&self) -> Option<&str> {
        self.login_success_href.find('#').map(|at| &self.login_success_href[at..]).filter(|hash| hash.len() > 1)
    }

    /// URL of a named fragment, e.g. `/components/navbar.html`.
    pub fn fragment_url(&self, name: &str) -> String {
        format!("{}/{name}.html", self.fragment_dir.trim_end_matches('/'))
    }
}

fn endpoint_or(build_value: Option<&str>, default: &str) -> String {
    match build_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => default.to_owned(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
