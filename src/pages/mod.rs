//! Page-specific behavior.
//!
//! Everything shared by all pages lives in `components`; a module here only
//! activates when its page's markup is present.

pub mod login;
