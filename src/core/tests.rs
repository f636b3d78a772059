#[cfg(test)]
mod tests {
    use crate::core::{
        AnimatorState, AssetError, FrameManifest, RedrawScheduler, RevealState, contain_fit,
        preload_all, section_progress,
    };
    use futures::executor::block_on;

    const VIEWPORT_H: f64 = 900.0;
    const SECTION_H: f64 = 4.0 * VIEWPORT_H;

    /// Scroll offsets (section top relative to viewport) for a gesture
    fn gesture(from: f64, to: f64, steps: usize) -> Vec<f64> {
        (0..=steps)
            .map(|i| from + (to - from) * i as f64 / steps as f64)
            .collect()
    }

    #[test]
    fn test_scroll_down_walks_every_frame_in_order() {
        let manifest = FrameManifest::default();
        let mut last = 0;

        for top in gesture(0.0, -(SECTION_H - VIEWPORT_H), 500) {
            let progress = section_progress(top, SECTION_H, VIEWPORT_H);
            let state = AnimatorState::derive(progress, manifest.count);
            let frame = state.frame_index.unwrap();
            assert!(frame >= last);
            last = frame;
        }

        assert_eq!(last, manifest.count - 1);
    }

    #[test]
    fn test_scroll_reversal_returns_to_first_frame() {
        let count = FrameManifest::default().count;
        let bottom = -(SECTION_H - VIEWPORT_H);

        let down = gesture(0.0, bottom, 50);
        let up = gesture(bottom, 0.0, 50);
        let frames: Vec<usize> = down
            .iter()
            .chain(up.iter())
            .map(|top| {
                AnimatorState::derive(section_progress(*top, SECTION_H, VIEWPORT_H), count)
                    .frame_index
                    .unwrap()
            })
            .collect();

        assert_eq!(frames.first(), Some(&0));
        assert_eq!(frames[50], count - 1);
        assert_eq!(frames.last(), Some(&0));
    }

    #[test]
    fn test_fast_scroll_paints_once_per_animation_frame() {
        let count = 40;
        let mut scheduler = RedrawScheduler::new();
        let mut paints = Vec::new();

        // three animation frames, each preceded by a burst of scroll events
        for burst in [gesture(0.0, -300.0, 8), gesture(-300.0, -900.0, 12), gesture(-900.0, -850.0, 3)] {
            for top in burst {
                let state = AnimatorState::derive(section_progress(top, SECTION_H, VIEWPORT_H), count);
                if let Some(frame) = state.frame_index {
                    scheduler.request(frame);
                }
            }
            if let Some(frame) = scheduler.take() {
                paints.push(frame);
            }
        }

        let expected = |top: f64| {
            AnimatorState::derive(section_progress(top, SECTION_H, VIEWPORT_H), count)
                .frame_index
                .unwrap()
        };
        assert_eq!(paints, vec![expected(-300.0), expected(-900.0), expected(-850.0)]);
    }

    #[test]
    fn test_resize_rederives_state_at_same_offset() {
        let count = 40;
        let top = -1800.0;
        let before = AnimatorState::derive(section_progress(top, SECTION_H, VIEWPORT_H), count);

        // window shrinks to 600px tall, the 400vh section with it
        let (vh, height) = (600.0, 4.0 * 600.0);
        let after = AnimatorState::derive(section_progress(top, height, vh), count);

        assert!((before.progress - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(after.progress, 1.0);
        assert_ne!(before.frame_index, after.frame_index);
        assert_eq!(after.frame_index, Some(count - 1));
        assert_eq!(after.overlays[3].opacity, 1.0);
        assert!(before.overlays[3].opacity < 1.0);
    }

    #[test]
    fn test_failed_frames_are_skipped_at_draw_time() {
        let manifest = FrameManifest::default();
        let report = block_on(preload_all(&manifest, |index, url| async move {
            if index % 13 == 0 {
                Err(AssetError::load_failed(index + 1, url))
            } else {
                Ok((1920.0, 1080.0))
            }
        }));
        assert_eq!(report.settled(), manifest.count);

        let frames = report.into_frames();
        let drawable = |progress: f64| {
            let index = AnimatorState::derive(progress, frames.len()).frame_index?;
            let (w, h) = frames[index]?;
            contain_fit(w, h, 1280.0, 720.0)
        };

        assert!(drawable(0.0).is_none());
        assert!(drawable(0.5).is_some());
    }

    #[test]
    fn test_reveal_latch_survives_scroll_out() {
        let mut block = RevealState::new();
        for intersecting in [false, false, true, false, false, true, false] {
            block.observe(intersecting);
        }
        assert!(block.is_revealed());
    }
}
