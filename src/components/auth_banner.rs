//! "Authentication successful!" banner shown after a login redirect.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::consts::{AUTH_BANNER_CLASSES, AUTH_BANNER_FADE_MS, AUTH_BANNER_TEXT};
use crate::error::SiteError;

/// Append the fading banner when `location_hash` is the login success
/// fragment. Returns whether the banner was shown.
///
/// # Errors
///
/// Returns an error if the document has no `<body>` or element creation throws.
pub fn show_if_requested(doc: &Document, config: &SiteConfig, location_hash: &str) -> Result<bool, SiteError> {
    if config.success_fragment() != Some(location_hash) {
        return Ok(false);
    }
    let body = doc.body().ok_or(SiteError::NoGlobal("body"))?;
    let banner = doc.create_element("div")?;
    banner.set_class_name(AUTH_BANNER_CLASSES);
    banner.set_text_content(Some(AUTH_BANNER_TEXT));
    body.append_child(&banner)?;

    Timeout::new(AUTH_BANNER_FADE_MS, move || banner.remove()).forget();
    Ok(true)
}
