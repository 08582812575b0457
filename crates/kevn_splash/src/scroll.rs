// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page scroll progress for the reading-progress bar, and parallax.

/// Percentage of the document scrolled past, in [0, 100].
///
/// A document no taller than the viewport reports 0.
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Vertical offset of a parallax layer after scrolling `scrolled` pixels.
///
/// Speeds below 1 drift slower than the page, above 1 faster.
pub fn parallax_offset(scrolled: f32, speed: f32) -> f32 {
    -(scrolled * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        // overscroll bounce
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_short_document() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(400.0, 0.5), -200.0);
        assert_eq!(parallax_offset(400.0, 1.5), -600.0);
    }
}
