//! Scroll-scrubbed animation timeline for the hero section
//!
//! Everything here is a pure function of scroll progress. [`AnimatorState::derive`]
//! bundles the active frame index and the four overlay states so the view
//! layer only has to turn them into styles.

use super::frames::select_frame_index;
use super::progress::clamp_unit;

/// Number of text overlays layered over the frame canvas
pub const OVERLAY_COUNT: usize = 4;

/// Clamped piecewise-linear interpolation over `(input, output)` stops
///
/// Inputs before the first stop or after the last hold the end values.
/// Stops must be sorted by input.
pub fn interpolate(input: f64, stops: &[(f64, f64)]) -> f64 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };

    if input.is_nan() || input <= first.0 {
        return first.1;
    }
    if input >= last.0 {
        return last.1;
    }

    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if input <= x1 {
            let span = x1 - x0;
            if span <= f64::EPSILON {
                return y1;
            }
            let t = (input - x0) / span;
            return y0 + (y1 - y0) * t;
        }
    }

    last.1
}

/// Which property an overlay's offset track drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetKind {
    TranslateX,
    TranslateY,
    Scale,
}

/// Resolved positional offset of an overlay
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayTransform {
    /// Horizontal translation in pixels
    TranslateX(f64),
    /// Vertical translation in pixels
    TranslateY(f64),
    /// Uniform scale factor
    Scale(f64),
}

impl OverlayTransform {
    /// CSS `transform` value
    pub fn css(&self) -> String {
        match self {
            OverlayTransform::TranslateX(px) => format!("translateX({:.2}px)", px),
            OverlayTransform::TranslateY(px) => format!("translateY({:.2}px)", px),
            OverlayTransform::Scale(s) => format!("scale({:.4})", s),
        }
    }
}

/// Keyframes of one overlay block
#[derive(Clone, Copy, Debug)]
pub struct OverlayTrack {
    pub opacity: &'static [(f64, f64)],
    pub offset_kind: OffsetKind,
    pub offset: &'static [(f64, f64)],
}

impl OverlayTrack {
    pub fn sample(&self, progress: f64) -> OverlayState {
        let value = interpolate(progress, self.offset);
        let transform = match self.offset_kind {
            OffsetKind::TranslateX => OverlayTransform::TranslateX(value),
            OffsetKind::TranslateY => OverlayTransform::TranslateY(value),
            OffsetKind::Scale => OverlayTransform::Scale(value),
        };

        OverlayState {
            opacity: clamp_unit(interpolate(progress, self.opacity)),
            transform,
        }
    }
}

/// Hero overlays in document order: title, co-pilot, festival, call to action
pub const HERO_OVERLAYS: [OverlayTrack; OVERLAY_COUNT] = [
    OverlayTrack {
        opacity: &[(0.0, 1.0), (0.15, 1.0), (0.20, 0.0)],
        offset_kind: OffsetKind::TranslateY,
        offset: &[(0.0, 0.0), (0.20, -50.0)],
    },
    OverlayTrack {
        opacity: &[(0.25, 0.0), (0.35, 1.0), (0.45, 1.0), (0.55, 0.0)],
        offset_kind: OffsetKind::TranslateX,
        offset: &[(0.25, -50.0), (0.45, 0.0)],
    },
    OverlayTrack {
        opacity: &[(0.55, 0.0), (0.65, 1.0), (0.75, 1.0), (0.85, 0.0)],
        offset_kind: OffsetKind::TranslateX,
        offset: &[(0.55, 50.0), (0.75, 0.0)],
    },
    OverlayTrack {
        opacity: &[(0.85, 0.0), (0.95, 1.0)],
        offset_kind: OffsetKind::Scale,
        offset: &[(0.85, 0.9), (1.0, 1.0)],
    },
];

/// Opacity and offset of one overlay at a given progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayState {
    pub opacity: f64,
    pub transform: OverlayTransform,
}

impl OverlayState {
    /// Inline style for the overlay element
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: {};",
            self.opacity,
            self.transform.css()
        )
    }
}

/// Everything the hero derives from one progress value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorState {
    pub progress: f64,
    pub frame_index: Option<usize>,
    pub overlays: [OverlayState; OVERLAY_COUNT],
}

impl AnimatorState {
    pub fn derive(progress: f64, frame_count: usize) -> Self {
        let progress = clamp_unit(progress);
        Self {
            progress,
            frame_index: select_frame_index(progress, frame_count),
            overlays: HERO_OVERLAYS.map(|track| track.sample(progress)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_interpolate_inside_segments() {
        let stops = [(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)];
        assert!(approx(interpolate(0.25, &stops), 5.0));
        assert!(approx(interpolate(0.5, &stops), 10.0));
        assert!(approx(interpolate(0.75, &stops), 5.0));
    }

    #[test]
    fn test_interpolate_holds_ends() {
        let stops = [(0.25, -50.0), (0.45, 0.0)];
        assert_eq!(interpolate(0.0, &stops), -50.0);
        assert_eq!(interpolate(0.9, &stops), 0.0);
    }

    #[test]
    fn test_interpolate_degenerate_inputs() {
        assert_eq!(interpolate(0.5, &[]), 0.0);
        assert_eq!(interpolate(0.5, &[(0.2, 3.0)]), 3.0);
        assert_eq!(interpolate(f64::NAN, &[(0.0, 1.0), (1.0, 2.0)]), 1.0);
        assert_eq!(interpolate(0.5, &[(0.0, 1.0), (0.5, 1.0), (0.5, 4.0), (1.0, 4.0)]), 1.0);
    }

    #[test]
    fn test_title_fades_out_by_twenty_percent() {
        let title = HERO_OVERLAYS[0];
        assert_eq!(title.sample(0.0).opacity, 1.0);
        assert_eq!(title.sample(0.15).opacity, 1.0);
        assert!(approx(title.sample(0.175).opacity, 0.5));
        assert_eq!(title.sample(0.2).opacity, 0.0);
        assert_eq!(
            title.sample(0.2).transform,
            OverlayTransform::TranslateY(-50.0)
        );
    }

    #[test]
    fn test_copilot_block_window() {
        let block = HERO_OVERLAYS[1];
        assert_eq!(block.sample(0.2).opacity, 0.0);
        assert_eq!(block.sample(0.4).opacity, 1.0);
        assert_eq!(block.sample(0.6).opacity, 0.0);
        assert_eq!(block.sample(0.25).transform, OverlayTransform::TranslateX(-50.0));
        assert_eq!(block.sample(0.45).transform, OverlayTransform::TranslateX(0.0));
    }

    #[test]
    fn test_festival_block_slides_from_right() {
        let block = HERO_OVERLAYS[2];
        assert_eq!(block.sample(0.55).transform, OverlayTransform::TranslateX(50.0));
        assert_eq!(block.sample(0.7).opacity, 1.0);
        assert_eq!(block.sample(0.9).opacity, 0.0);
    }

    #[test]
    fn test_cta_block_stays_visible_at_end() {
        let block = HERO_OVERLAYS[3];
        assert_eq!(block.sample(0.5).opacity, 0.0);
        assert_eq!(block.sample(1.0).opacity, 1.0);
        assert_eq!(block.sample(0.85).transform, OverlayTransform::Scale(0.9));
        assert_eq!(block.sample(1.0).transform, OverlayTransform::Scale(1.0));
    }

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(AnimatorState::derive(0.37, 40), AnimatorState::derive(0.37, 40));
    }

    #[test]
    fn test_derive_clamps_progress() {
        let state = AnimatorState::derive(1.5, 40);
        assert_eq!(state.progress, 1.0);
        assert_eq!(state.frame_index, Some(39));
    }

    #[test]
    fn test_derive_without_frames() {
        let state = AnimatorState::derive(0.4, 0);
        assert_eq!(state.frame_index, None);
        assert_eq!(state.overlays[1].opacity, 1.0);
    }

    #[test]
    fn test_overlay_style() {
        let state = OverlayState {
            opacity: 0.5,
            transform: OverlayTransform::TranslateX(-25.0),
        };
        assert_eq!(state.style(), "opacity: 0.5000; transform: translateX(-25.00px);");
    }
}
