//! Hero background parallax.
//!
//! Progress is measured over the page container, the element wrapping every
//! section. It runs from the container's top touching the viewport top (0.0)
//! to its bottom touching the viewport top (1.0) and maps linearly onto a
//! vertical translation of the hero background layer.

use crate::motion::{clamp_unit, lerp};

pub const OFFSET_RANGE_PERCENT: (f64, f64) = (0.0, 50.0);

/// `top` and `height` come from the page container's bounding client rect.
pub fn scroll_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }

    clamp_unit(-top / height)
}

pub fn parallax_offset(progress: f64) -> f64 {
    lerp(OFFSET_RANGE_PERCENT.0, OFFSET_RANGE_PERCENT.1, clamp_unit(progress))
}

pub fn offset_css(progress: f64) -> String {
    format!("{}%", parallax_offset(progress))
}

pub fn layer_style(progress: f64) -> String {
    format!("transform: translateY({});", offset_css(progress))
}

/// Background style for a container whose rect is currently `top`/`height`.
pub fn container_style(top: f64, height: f64) -> String {
    layer_style(scroll_progress(top, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_zero_and_half() {
        assert_eq!(offset_css(0.0), "0%");
        assert_eq!(offset_css(1.0), "50%");
        assert_eq!(offset_css(0.5), "25%");
    }

    #[test]
    fn offset_is_monotonic_and_linear() {
        let samples: Vec<f64> = (0..=20).map(|step| parallax_offset(step as f64 / 20.0)).collect();

        for pair in samples.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn progress_follows_the_container_past_the_viewport_top() {
        assert_eq!(scroll_progress(0.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-800.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-1600.0, 800.0), 1.0);
        assert_eq!(scroll_progress(120.0, 800.0), 0.0);
    }

    #[test]
    fn collapsed_hero_snaps_to_an_endpoint() {
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 1.0);
    }

    #[test]
    fn layer_style_translates_vertically() {
        assert_eq!(layer_style(1.0), "transform: translateY(50%);");
    }

    #[test]
    fn offset_spans_the_full_page_not_one_viewport() {
        // 800px scrolled into a 4000px page whose hero is one 800px viewport.
        assert_eq!(container_style(-800.0, 4000.0), "transform: translateY(10%);");
        assert_eq!(container_style(-2000.0, 4000.0), "transform: translateY(25%);");
        assert_eq!(container_style(-4000.0, 4000.0), "transform: translateY(50%);");
    }
}
