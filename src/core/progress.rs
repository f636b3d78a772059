//! Scroll progress of an element relative to the viewport
//!
//! Both functions take the element's bounding rect (`top` relative to the
//! viewport, `height`) and the viewport height, and return a value clamped
//! to `[0, 1]`. Scroll direction is irrelevant: progress is recomputed from
//! geometry every time.

/// Progress of a tall section whose content is pinned while it scrolls by
///
/// 0 when the section top reaches the viewport top, 1 when the section
/// bottom reaches the viewport bottom ("start start" to "end end").
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let scrollable = height - viewport_height;
    if scrollable <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    clamp_unit(-top / scrollable)
}

/// Progress of an element across the whole viewport
///
/// 0 when the element top enters at the viewport bottom, 1 when its bottom
/// leaves at the viewport top ("start end" to "end start").
pub fn transit_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let distance = height + viewport_height;
    if distance <= 0.0 {
        return 0.0;
    }
    clamp_unit((viewport_height - top) / distance)
}

/// Clamp into `[0, 1]`, mapping NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
