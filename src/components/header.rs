//! Header elevation classes, shared by the scroll and menu handlers.

use web_sys::Element;

use crate::consts::{HEADER_FLAT_CLASSES, HEADER_RAISED_CLASSES, NAV_CONTENT_FLAT_CLASSES, NAV_CONTENT_RAISED_CLASSES};
use crate::error::SiteError;
use crate::state::scroll::HeaderStyle;
use crate::util::dom::swap_classes;

/// Apply `style` to the header and the menu background. Either element may
/// be absent on pages without a navbar.
pub fn apply_header_style(
    header: Option<&Element>,
    nav_content: Option<&Element>,
    style: HeaderStyle,
) -> Result<(), SiteError> {
    let (header_add, header_remove, nav_add, nav_remove) = match style {
        HeaderStyle::Raised => {
            (HEADER_RAISED_CLASSES, HEADER_FLAT_CLASSES, NAV_CONTENT_RAISED_CLASSES, NAV_CONTENT_FLAT_CLASSES)
        }
        HeaderStyle::Flat => {
            (HEADER_FLAT_CLASSES, HEADER_RAISED_CLASSES, NAV_CONTENT_FLAT_CLASSES, NAV_CONTENT_RAISED_CLASSES)
        }
    };
    if let Some(header) = header {
        swap_classes(header, header_add, header_remove)?;
    }
    if let Some(nav_content) = nav_content {
        swap_classes(nav_content, nav_add, nav_remove)?;
    }
    Ok(())
}
