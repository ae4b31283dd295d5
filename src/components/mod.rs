//! DOM components for the injected navbar and page chrome.
//!
//! ARCHITECTURE
//! ============
//! Each component looks up its elements once at construction and holds on
//! to them. Decisions are delegated to `state`; components only read the
//! DOM and apply the result.

pub mod auth_banner;
pub mod header;
pub mod nav_menu;
pub mod navbar;
pub mod progress;
pub mod theme_toggle;
