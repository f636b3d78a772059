//! "Contain" fitting of an image into a drawing surface

/// Destination rectangle on the surface, in surface pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale `image` to fit entirely inside `surface`, preserving aspect ratio, centered
///
/// Returns `None` when either size is degenerate (zero, negative or NaN),
/// which happens for images that failed to decode.
pub fn contain_fit(
    image_width: f64,
    image_height: f64,
    surface_width: f64,
    surface_height: f64,
) -> Option<DrawRect> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(image_width) && valid(image_height) && valid(surface_width) && valid(surface_height))
    {
        return None;
    }

    let image_ratio = image_width / image_height;
    let surface_ratio = surface_width / surface_height;

    let (width, height) = if surface_ratio > image_ratio {
        (surface_height * image_ratio, surface_height)
    } else {
        (surface_width, surface_width / image_ratio)
    };

    Some(DrawRect {
        x: (surface_width - width) / 2.0,
        y: (surface_height - height) / 2.0,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_wide_surface_fills_height() {
        // 16:9 surface, 4:3 image
        let rect = contain_fit(800.0, 600.0, 1920.0, 1080.0).unwrap();
        assert!(approx(rect.height, 1080.0));
        assert!(approx(rect.width, 1440.0));
        assert!(approx(rect.x, 240.0));
        assert!(approx(rect.y, 0.0));
    }

    #[test]
    fn test_tall_surface_fills_width() {
        // portrait phone surface, 16:9 image
        let rect = contain_fit(1920.0, 1080.0, 390.0, 844.0).unwrap();
        assert!(approx(rect.width, 390.0));
        assert!(approx(rect.height, 390.0 * 1080.0 / 1920.0));
        assert!(approx(rect.x, 0.0));
        assert!(approx(rect.y, (844.0 - rect.height) / 2.0));
    }

    #[test]
    fn test_same_ratio_fills_surface() {
        let rect = contain_fit(1280.0, 720.0, 1920.0, 1080.0).unwrap();
        assert!(approx(rect.x, 0.0));
        assert!(approx(rect.y, 0.0));
        assert!(approx(rect.width, 1920.0));
        assert!(approx(rect.height, 1080.0));
    }

    #[test]
    fn test_result_never_exceeds_surface() {
        for (iw, ih) in [(100.0, 3000.0), (3000.0, 100.0), (640.0, 480.0)] {
            let rect = contain_fit(iw, ih, 1024.0, 768.0).unwrap();
            assert!(rect.width <= 1024.0 + 1e-9);
            assert!(rect.height <= 768.0 + 1e-9);
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(contain_fit(0.0, 0.0, 800.0, 600.0), None);
        assert_eq!(contain_fit(800.0, 600.0, 0.0, 600.0), None);
        assert_eq!(contain_fit(f64::NAN, 600.0, 800.0, 600.0), None);
    }
}
