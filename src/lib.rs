//! # site-chrome
//!
//! WASM client layer for a static portfolio site: theme toggle, shared
//! navbar/footer injection, active-link highlighting, scroll progress and
//! header shadow, the mobile navigation menu, and the Basic-auth login form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Browser-independent decisions (theme, links, scroll, menu, login flow) |
//! | [`config`] | Defaults plus build-time and page-level overrides |
//! | [`consts`] | Element ids, class lists and user-facing text |
//! | [`error`] | [`error::SiteError`] |
//! | [`net`] | Fragment fetches and the login request |
//! | `util` | web-sys helpers: lookups, classes, listeners, dark mode (browser only) |
//! | `components` | Navbar, menu, progress bar, theme toggle, banner (browser only) |
//! | `pages` | Login form (browser only) |
//! | `app` | `#[wasm_bindgen(start)]` entry point (browser only) |
//!
//! Build for the browser with `--features browser`; the default build is
//! the native, testable core.

pub mod config;
pub mod consts;
pub mod error;
pub mod net;
pub mod state;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod components;
#[cfg(feature = "browser")]
pub mod pages;
#[cfg(feature = "browser")]
pub mod util;
