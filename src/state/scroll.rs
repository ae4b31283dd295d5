//! Scroll progress math and header elevation.
//!
//! EDGE CASES
//! ==========
//! When content is no taller than the viewport the denominator is zero or
//! negative; the percentage is pinned to 0 instead of `NaN`/`Infinity`.
//! Overscroll (rubber-banding) can push the raw value outside 0..=100, so the
//! result is clamped to that range.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Raw scroll measurements read from the document on each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Scroll position as a percentage of the scrollable distance.
    pub fn percent(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable.is_nan() || scrollable <= 0.0 {
            return 0.0;
        }
        let percent = self.scroll_top / scrollable * 100.0;
        if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 }
    }

    /// Value written to the `--scroll` custom property.
    pub fn css_value(&self) -> String {
        format!("{}%", self.percent())
    }
}

/// Prefer the root element's measurement; fall back to `<body>` when the
/// root reports nothing (quirks-mode documents scroll the body).
pub fn root_or_body(root: f64, body: f64) -> f64 {
    if root > 0.0 { root } else { body }
}

/// Header elevation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Background and shadow applied.
    Raised,
    /// Transparent at the top of the page.
    Flat,
}

/// Header style for a scroll event: raised past the threshold or while the
/// menu is open.
pub fn header_style(scroll_y: f64, threshold: f64, menu_open: bool) -> HeaderStyle {
    if scroll_y > threshold || menu_open { HeaderStyle::Raised } else { HeaderStyle::Flat }
}
