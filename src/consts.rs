//! Element ids, class lists and fixed strings shared by the page chrome.

// ── Element ids ─────────────────────────────────────────────────

pub const NAV_LIST_ID: &str = "nav-list";
pub const HEADER_ID: &str = "header";
pub const NAV_CONTENT_ID: &str = "nav-content";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const DROPDOWN_ID: &str = "dropdown";
pub const DROPDOWN_MENU_ID: &str = "dropdownmenu";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_TOGGLE_DARK_ICON_ID: &str = "theme-toggle-dark-icon";
pub const THEME_TOGGLE_LIGHT_ICON_ID: &str = "theme-toggle-light-icon";
pub const PROGRESS_ID: &str = "progress";
pub const USERNAME_ID: &str = "username";
pub const PASSWORD_ID: &str = "password";
pub const LOGIN_BOX_ID: &str = "loginBox";
pub const LOGIN_ERROR_ID: &str = "err";
pub const SITE_CONFIG_ID: &str = "site-config";

// ── Classes ─────────────────────────────────────────────────────

/// Visibility toggle used by the menu, dropdown and theme icons.
pub const HIDDEN_CLASS: &str = "hidden";

pub const NAV_ACTIVE_CLASSES: &[&str] = &["text-gray-900", "font-bold"];
pub const NAV_INACTIVE_CLASSES: &[&str] = &["text-gray-600"];

/// Header classes present while the page is scrolled or the menu is open.
pub const HEADER_RAISED_CLASSES: &[&str] = &["bg-white", "shadow", "dark:bg-gray-800"];
/// Header classes present while flat at the top of the page.
pub const HEADER_FLAT_CLASSES: &[&str] = &["dark:bg-gray-900"];

pub const NAV_CONTENT_RAISED_CLASSES: &[&str] = &["dark:bg-gray-800"];
pub const NAV_CONTENT_FLAT_CLASSES: &[&str] = &["dark:bg-gray-900"];

pub const FIELD_ERROR_CLASSES: &[&str] = &["border-red-600", "border-4"];
pub const LOGIN_ERROR_CLASSES: &str = "text-center text-4xl text-red-600 pb-4";
pub const AUTH_BANNER_CLASSES: &str = "animate-fade fixed w-full z-10 bottom-0 bg-green-200 px-6 py-2 \
     sm:px-3.5 overflow-hidden opacity-0 leading-6 text-center text-gray-900";

// ── Text ────────────────────────────────────────────────────────

pub const VALIDATION_ERROR_TEXT: &str = "Please enter information into both fields :)";
pub const AUTH_ERROR_TEXT: &str = "Authentication Error";
pub const CELEBRATION_TEXT: &str = "Good Job!";
pub const AUTH_BANNER_TEXT: &str = "Authentication successful!";

// ── Timing ──────────────────────────────────────────────────────

/// Length of the `animate-fade` keyframes; the banner is removed afterwards.
pub const AUTH_BANNER_FADE_MS: u32 = 5_000;
