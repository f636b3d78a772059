//! Hover magnifier and click-to-enlarge state for zoomable images
//!
//! The view layer feeds pointer and click events into [`ZoomState`]; page
//! scroll suspension while the lightbox is open goes through [`ScrollLock`],
//! which talks to the page via the [`ScrollHost`] seam.

/// Magnification of the hover lens
pub const LENS_ZOOM: f64 = 2.5;

/// Edge length of the square hover lens, in pixels
pub const LENS_SIZE: f64 = 220.0;

/// Gap between the pointer and the lens, in pixels
pub const LENS_GAP: f64 = 24.0;

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Center of the magnified crop, as fractions of the image size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl FocalPoint {
    pub const CENTER: FocalPoint = FocalPoint { x: 0.5, y: 0.5 };

    /// CSS `background-position` placing this point at the lens center
    pub fn background_position(&self) -> String {
        format!("{:.2}% {:.2}%", self.x * 100.0, self.y * 100.0)
    }
}

/// Focal point for a pointer position over `image`, clamped to the image edges
pub fn focal_point(pointer_x: f64, pointer_y: f64, image: Rect) -> FocalPoint {
    let axis = |pointer: f64, start: f64, len: f64| {
        if len <= 0.0 || !pointer.is_finite() {
            0.5
        } else {
            ((pointer - start) / len).clamp(0.0, 1.0)
        }
    };

    FocalPoint {
        x: axis(pointer_x, image.left, image.width),
        y: axis(pointer_y, image.top, image.height),
    }
}

/// Top-left corner of the lens for a pointer position
///
/// The lens sits below-right of the pointer and flips to the other side of
/// the pointer on an axis where it would leave the viewport.
pub fn lens_origin(
    pointer_x: f64,
    pointer_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> (f64, f64) {
    let place = |pointer: f64, extent: f64| {
        let after = pointer + LENS_GAP;
        if after + LENS_SIZE <= extent {
            after
        } else {
            (pointer - LENS_GAP - LENS_SIZE).max(0.0)
        }
    };

    (
        place(pointer_x, viewport_width),
        place(pointer_y, viewport_height),
    )
}

/// What closed the lightbox
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Backdrop,
    CloseButton,
    Escape,
}

/// Interaction state of one zoomable image
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ZoomState {
    #[default]
    Idle,
    Hovering(FocalPoint),
    Zoomed,
}

impl ZoomState {
    pub fn is_zoomed(&self) -> bool {
        matches!(self, ZoomState::Zoomed)
    }

    pub fn focal(&self) -> Option<FocalPoint> {
        match self {
            ZoomState::Hovering(focal) => Some(*focal),
            _ => None,
        }
    }

    /// Pointer entered or moved over the image; ignored while zoomed
    pub fn pointer_move(self, focal: FocalPoint) -> Self {
        match self {
            ZoomState::Zoomed => self,
            _ => ZoomState::Hovering(focal),
        }
    }

    /// Pointer left the image; ignored while zoomed
    pub fn pointer_leave(self) -> Self {
        match self {
            ZoomState::Hovering(_) => ZoomState::Idle,
            other => other,
        }
    }

    pub fn open(self) -> Self {
        ZoomState::Zoomed
    }

    pub fn close(self, _trigger: CloseTrigger) -> Self {
        ZoomState::Idle
    }
}

/// Page whose scrolling can be suspended
///
/// The browser implementation reads and writes `document.body.style.overflow`.
pub trait ScrollHost {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Suspends page scroll and restores the exact previous value
///
/// Both operations are idempotent: acquiring twice keeps the originally saved
/// value, releasing when not held does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    saved: Option<String>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, host: &impl ScrollHost) {
        if self.saved.is_none() {
            self.saved = Some(host.overflow());
        }
        host.set_overflow("hidden");
    }

    pub fn release(&mut self, host: &impl ScrollHost) {
        if let Some(previous) = self.saved.take() {
            host.set_overflow(&previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        overflow: RefCell<String>,
        writes: RefCell<usize>,
    }

    impl FakePage {
        fn new(initial: &str) -> Self {
            Self {
                overflow: RefCell::new(initial.to_string()),
                writes: RefCell::new(0),
            }
        }
    }

    impl ScrollHost for FakePage {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }

    const IMAGE: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn test_focal_point_inside_image() {
        let focal = focal_point(300.0, 350.0, IMAGE);
        assert_eq!(focal, FocalPoint { x: 0.5, y: 0.5 });

        let focal = focal_point(100.0, 200.0, IMAGE);
        assert_eq!(focal, FocalPoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_focal_point_clamped_outside_image() {
        for (px, py) in [(-50.0, 0.0), (2000.0, 2000.0), (50.0, 900.0), (600.0, 100.0)] {
            let focal = focal_point(px, py, IMAGE);
            assert!((0.0..=1.0).contains(&focal.x));
            assert!((0.0..=1.0).contains(&focal.y));
        }
        assert_eq!(focal_point(2000.0, -5.0, IMAGE), FocalPoint { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_focal_point_degenerate_image() {
        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(focal_point(10.0, 10.0, empty), FocalPoint::CENTER);
        assert_eq!(focal_point(f64::NAN, 250.0, IMAGE).x, 0.5);
    }

    #[test]
    fn test_background_position() {
        assert_eq!(
            FocalPoint { x: 0.25, y: 1.0 }.background_position(),
            "25.00% 100.00%"
        );
    }

    #[test]
    fn test_lens_origin_below_right_of_pointer() {
        assert_eq!(lens_origin(100.0, 100.0, 1280.0, 800.0), (124.0, 124.0));
    }

    #[test]
    fn test_lens_origin_flips_near_edges() {
        let (x, y) = lens_origin(1200.0, 700.0, 1280.0, 800.0);
        assert_eq!(x, 1200.0 - LENS_GAP - LENS_SIZE);
        assert_eq!(y, 700.0 - LENS_GAP - LENS_SIZE);
    }

    #[test]
    fn test_lens_origin_never_negative() {
        let (x, y) = lens_origin(50.0, 50.0, 200.0, 200.0);
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn test_hover_cycle() {
        let state = ZoomState::Idle.pointer_move(FocalPoint::CENTER);
        assert_eq!(state.focal(), Some(FocalPoint::CENTER));

        let moved = state.pointer_move(FocalPoint { x: 0.1, y: 0.9 });
        assert_eq!(moved.focal(), Some(FocalPoint { x: 0.1, y: 0.9 }));

        assert_eq!(moved.pointer_leave(), ZoomState::Idle);
    }

    #[test]
    fn test_zoomed_ignores_pointer() {
        let state = ZoomState::Idle.open();
        assert!(state.is_zoomed());
        assert_eq!(state.pointer_move(FocalPoint::CENTER), ZoomState::Zoomed);
        assert_eq!(state.pointer_leave(), ZoomState::Zoomed);
    }

    #[test]
    fn test_every_close_trigger_returns_to_idle() {
        for trigger in [
            CloseTrigger::Backdrop,
            CloseTrigger::CloseButton,
            CloseTrigger::Escape,
        ] {
            assert_eq!(ZoomState::Idle.open().close(trigger), ZoomState::Idle);
        }
    }

    #[test]
    fn test_scroll_lock_restores_previous_value() {
        let page = FakePage::new("auto");
        let mut lock = ScrollLock::new();

        lock.acquire(&page);
        assert_eq!(page.overflow(), "hidden");
        assert_ne!(lock, ScrollLock::new());

        lock.release(&page);
        assert_eq!(page.overflow(), "auto");
        assert_eq!(lock, ScrollLock::new());
    }

    #[test]
    fn test_scroll_lock_double_acquire_keeps_original() {
        let page = FakePage::new("");
        let mut lock = ScrollLock::new();

        lock.acquire(&page);
        lock.acquire(&page);
        lock.release(&page);
        assert_eq!(page.overflow(), "");
    }

    #[test]
    fn test_scroll_lock_release_without_acquire_is_noop() {
        let page = FakePage::new("scroll");
        let mut lock = ScrollLock::new();

        lock.release(&page);
        assert_eq!(page.overflow(), "scroll");
        assert_eq!(*page.writes.borrow(), 0);
    }

    #[test]
    fn test_repeated_cycles_leave_scroll_unchanged() {
        let page = FakePage::new("visible");
        let mut lock = ScrollLock::new();
        let mut state = ZoomState::Idle;

        for trigger in [
            CloseTrigger::Escape,
            CloseTrigger::Backdrop,
            CloseTrigger::CloseButton,
            CloseTrigger::Escape,
        ] {
            state = state.open();
            lock.acquire(&page);
            assert_eq!(page.overflow(), "hidden");

            state = state.close(trigger);
            lock.release(&page);
            lock.release(&page);
            assert_eq!(state, ZoomState::Idle);
            assert_eq!(page.overflow(), "visible");
        }
    }
}
