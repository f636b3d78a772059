//! Enter-on-view reveal and scroll-scrubbed word blur
//!
//! - [`RevealState`] is the one-shot latch behind every fade/slide-in block
//! - [`word_styles`] computes the per-word blur of a headline from its
//!   viewport transit progress

use super::progress::clamp_unit;

/// Bottom root margin for whole sections, in pixels
pub const SECTION_REVEAL_MARGIN: f64 = 80.0;

/// Bottom root margin for blocks inside a section, in pixels
pub const BLOCK_REVEAL_MARGIN: f64 = 50.0;

/// One-shot visibility latch
///
/// Starts hidden, becomes revealed the first time the element intersects the
/// viewport and never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an intersection observation, returns `true` only on the transition
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// `rootMargin` string for a bottom margin in pixels
pub fn root_margin(margin: f64) -> String {
    format!("0px 0px -{}px 0px", margin.max(0.0))
}

/// Transition delay of the `index`-th item of a staggered list, in seconds
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Progress window of the heading transit over which all words resolve
pub const WORD_BLUR_START: f64 = 0.1;
pub const WORD_BLUR_END: f64 = 0.45;

/// Blur applied to a word that has not started resolving, in pixels
pub const WORD_MAX_BLUR: f64 = 8.0;

/// Opacity of a word that has not started resolving
pub const WORD_MIN_OPACITY: f64 = 0.15;

/// Visual state of one word of a blur-reveal heading
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordStyle {
    pub opacity: f64,
    pub blur_px: f64,
}

impl WordStyle {
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; filter: blur({:.2}px);",
            self.opacity, self.blur_px
        )
    }
}

/// Per-word styles for a heading at the given transit progress
///
/// Each word owns a sub-window of `[WORD_BLUR_START, WORD_BLUR_END]`; windows
/// are staggered by half a window so neighbouring words overlap.
pub fn word_styles(progress: f64, word_count: usize) -> Vec<WordStyle> {
    if word_count == 0 {
        return Vec::new();
    }

    let span = WORD_BLUR_END - WORD_BLUR_START;
    let window = span * 2.0 / (word_count as f64 + 1.0);
    let step = window / 2.0;

    (0..word_count)
        .map(|i| {
            let start = WORD_BLUR_START + step * i as f64;
            let t = clamp_unit((progress - start) / window);
            WordStyle {
                opacity: WORD_MIN_OPACITY + (1.0 - WORD_MIN_OPACITY) * t,
                blur_px: WORD_MAX_BLUR * (1.0 - t),
            }
        })
        .collect()
}

/// Split a heading into words, dropping empty runs of whitespace
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
