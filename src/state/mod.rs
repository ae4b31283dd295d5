//! Browser-independent page state and transitions.
//!
//! ARCHITECTURE
//! ============
//! Each module here owns the decisions for one piece of chrome (theme,
//! link highlighting, scroll, menu, login) as plain data. The DOM layer in
//! `components`/`pages` reads the document, asks these modules what to do,
//! and applies the answer, so everything below is testable natively.

pub mod login;
pub mod menu;
pub mod nav;
pub mod scroll;
pub mod theme;
