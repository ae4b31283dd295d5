//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys calls (element lookup, class lists,
//! storage) from component logic so components read as plain wiring.

pub mod dark_mode;
pub mod dom;
pub mod listener;
