//! Pixel <-> time conversion for the repeat bar
//!
//! Pure linear mapping between pixel offsets inside a bounded element and
//! time values inside the visible viewport. The forward and inverse maps
//! agree up to floating-point tolerance; neither has side effects.

use crate::types::Seconds;
use crate::viewport::Viewport;

/// Convert a pixel position to a time inside the viewport.
///
/// `pixel` is an x coordinate in the same space as `element_left` and
/// `element_width` (the bar's horizontal extent). The result is NOT clamped
/// to the viewport: positions outside the element map to times outside the
/// window, which is what drag overshoot detection relies on. A degenerate
/// (zero-width) element maps every pixel to the viewport start instead of
/// dividing by zero.
pub fn pixel_to_time(
    pixel: f32,
    element_left: f32,
    element_width: f32,
    viewport: &Viewport,
) -> Seconds {
    if element_width <= 0.0 {
        return viewport.start();
    }
    let fraction = f64::from((pixel - element_left) / element_width);
    viewport.start() + viewport.duration() * fraction
}

/// Inverse of [`pixel_to_time`]: the horizontal fraction at which a time
/// should be rendered (0.0 at the viewport start, 1.0 at its end).
pub fn time_to_fraction(time: Seconds, viewport: &Viewport) -> f64 {
    (time - viewport.start()) / viewport.duration()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepeatOptions;

    fn viewport() -> Viewport {
        // [4, 10] window inside a 60 s clip
        Viewport::around(60.0, 6.5, RepeatOptions::default())
    }

    #[test]
    fn test_pixel_to_time_linear() {
        let viewport = viewport();
        assert!((pixel_to_time(0.0, 0.0, 300.0, &viewport) - viewport.start()).abs() < 1e-9);
        assert!((pixel_to_time(300.0, 0.0, 300.0, &viewport) - viewport.end()).abs() < 1e-9);
        assert!((pixel_to_time(150.0, 0.0, 300.0, &viewport) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_pixel_to_time_respects_element_left() {
        let viewport = viewport();
        let a = pixel_to_time(170.0, 20.0, 300.0, &viewport);
        let b = pixel_to_time(150.0, 0.0, 300.0, &viewport);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let viewport = viewport();
        let width = 640.0_f32;
        for i in 0..=16 {
            let time = viewport.start() + viewport.duration() * f64::from(i) / 16.0;
            let pixel = (time_to_fraction(time, &viewport) * f64::from(width)) as f32;
            let back = pixel_to_time(pixel, 0.0, width, &viewport);
            assert!((back - time).abs() < 1e-3, "{} -> {}", time, back);
        }
    }

    #[test]
    fn test_overshoot_maps_outside_viewport() {
        let viewport = viewport();
        assert!(pixel_to_time(-50.0, 0.0, 300.0, &viewport) < viewport.start());
        assert!(pixel_to_time(350.0, 0.0, 300.0, &viewport) > viewport.end());
    }

    #[test]
    fn test_degenerate_element_maps_to_viewport_start() {
        let viewport = viewport();
        assert_eq!(pixel_to_time(120.0, 0.0, 0.0, &viewport), viewport.start());
        assert_eq!(pixel_to_time(120.0, 0.0, -5.0, &viewport), viewport.start());
    }
}
