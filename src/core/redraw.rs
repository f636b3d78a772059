//! Coalescing of canvas redraw requests
//!
//! Scroll events can fire many times between two paints. Each event records
//! the frame it wants; only the first request since the last paint asks the
//! caller to schedule an animation frame, and the paint draws whatever frame
//! was requested last.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawScheduler {
    current: Option<usize>,
    pending: bool,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the wanted frame, returns `true` when a paint must be scheduled
    pub fn request(&mut self, frame: usize) -> bool {
        self.current = Some(frame);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the scheduled paint: the frame to draw, if still wanted
    pub fn take(&mut self) -> Option<usize> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.current
    }

    /// Abandon a scheduled paint (unmount)
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Most recently selected frame, used to repaint immediately on resize
    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_schedules() {
        let mut scheduler = RedrawScheduler::new();
        assert!(scheduler.request(3));
        assert!(scheduler.is_pending());
    }

    #[test]
    fn test_requests_between_paints_coalesce() {
        let mut scheduler = RedrawScheduler::new();
        let scheduled = (0..10)
            .map(|frame| scheduler.request(frame))
            .filter(|s| *s)
            .count();

        assert_eq!(scheduled, 1);
        assert_eq!(scheduler.take(), Some(9));
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn test_request_after_paint_schedules_again() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.request(1);
        scheduler.take();
        assert!(scheduler.request(2));
        assert_eq!(scheduler.take(), Some(2));
    }

    #[test]
    fn test_cancel_drops_pending_paint() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.request(5);
        scheduler.cancel();
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.take(), None);
        assert_eq!(scheduler.current(), Some(5));
    }

    #[test]
    fn test_current_survives_paint() {
        let mut scheduler = RedrawScheduler::new();
        assert_eq!(scheduler.current(), None);
        scheduler.request(7);
        scheduler.take();
        assert_eq!(scheduler.current(), Some(7));
    }
}
