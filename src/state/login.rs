//! Login form validation and submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flow is written against two seams: [`LoginView`] (the form, its
//! inline error and page navigation) and [`LoginTransport`] (the single
//! authenticated request). `pages::login` and `net::api` provide the browser
//! implementations; tests drive the same flow with in-memory fakes.
//!
//! Credentials travel as HTTP Basic auth to whichever endpoint the hostname
//! selects. Nothing is persisted and both fields are cleared before the
//! request is awaited, so every attempt leaves the form empty.

use std::fmt;
use std::future::Future;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{AUTH_ERROR_TEXT, VALIDATION_ERROR_TEXT};
use crate::error::SiteError;
use crate::net::is_success;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Username/password pair held only for the duration of one submit.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// `Basic base64(username:password)`.
    pub fn authorization(&self) -> String {
        let mut raw = format!("{}:{}", self.username, self.password);
        let encoded = STANDARD.encode(raw.as_bytes());
        raw.zeroize();
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Both fields must be non-empty. Whitespace counts as input.
///
/// # Errors
///
/// Returns the inline validation message when either field is empty.
pub fn validate(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(VALIDATION_ERROR_TEXT);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// What a submit attempt ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A field was empty; no request was sent.
    Invalid,
    /// The endpoint accepted the credentials and the page navigated away.
    Authenticated,
    /// The endpoint answered with a non-2xx status.
    Rejected { status: u16 },
    /// The request never produced a response.
    Unreachable,
}

/// The login form as seen by the submit flow.
pub trait LoginView {
    /// Current `(username, password)` field values.
    fn field_values(&self) -> (String, String);
    fn clear_fields(&self);
    /// Text of the inline error element, if one is shown.
    fn error_text(&self) -> Option<String>;
    /// Show `text` in the inline error element, inserting it on first use.
    fn show_error(&self, text: &str) -> Result<(), SiteError>;
    fn clear_error(&self) -> Result<(), SiteError>;
    /// Add or remove the error border on both fields.
    fn set_fields_invalid(&self, invalid: bool) -> Result<(), SiteError>;
    /// One-time acknowledgment after a corrected validation error.
    fn celebrate(&self) -> Result<(), SiteError>;
    fn navigate(&self, href: &str) -> Result<(), SiteError>;
}

/// Sends the authenticated login request.
pub trait LoginTransport {
    /// GET `endpoint` with the given `Authorization` header and resolve to the
    /// response status.
    fn send(&self, endpoint: &str, authorization: &str) -> impl Future<Output = Result<u16, SiteError>>;
}

/// Run one submit attempt.
///
/// # Errors
///
/// Returns an error only when the view itself fails (a DOM call threw).
/// Validation and authentication failures are reported through the view and
/// the returned [`LoginOutcome`].
pub async fn submit<V, T>(view: &V, transport: &T, endpoint: &str, success_href: &str) -> Result<LoginOutcome, SiteError>
where
    V: LoginView,
    T: LoginTransport,
{
    let (mut username, mut password) = view.field_values();
    view.clear_fields();
    let checked = validate(&username, &password);
    username.zeroize();
    password.zeroize();

    let credentials = match checked {
        Ok(credentials) => credentials,
        Err(message) => {
            view.show_error(message)?;
            view.set_fields_invalid(true)?;
            return Ok(LoginOutcome::Invalid);
        }
    };

    if let Some(previous) = view.error_text() {
        view.set_fields_invalid(false)?;
        view.clear_error()?;
        if previous == VALIDATION_ERROR_TEXT {
            view.celebrate()?;
        }
    }

    let authorization = credentials.authorization();
    drop(credentials);
    log::debug!("sending login request to {endpoint}");

    match transport.send(endpoint, &authorization).await {
        Ok(status) if is_success(status) => {
            log::info!("login accepted ({status})");
            view.navigate(success_href)?;
            Ok(LoginOutcome::Authenticated)
        }
        Ok(status) => {
            log::warn!("login rejected ({status})");
            view.show_error(AUTH_ERROR_TEXT)?;
            Ok(LoginOutcome::Rejected { status })
        }
        Err(e) => {
            log::warn!("login request failed: {e}");
            view.show_error(AUTH_ERROR_TEXT)?;
            Ok(LoginOutcome::Unreachable)
        }
    }
}
