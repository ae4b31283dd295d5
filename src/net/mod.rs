//! Networking: fragment fetches and the login request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fragments` loads the shared navbar/footer markup, `api` talks to the
//! external Basic-auth login endpoint. Neither retries or sets timeouts.

pub mod api;
pub mod fragments;

/// Any 2xx counts as success, for fragments and for login alike.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
