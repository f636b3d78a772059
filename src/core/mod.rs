//! Core animation math, asset addressing and server-side asset API
//!
//! Everything outside `api` and `config` is pure and shared between the
//! server build and the browser build.

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
mod error;
pub mod fit;
pub mod frames;
pub mod preload;
pub mod progress;
pub mod redraw;
pub mod reveal;
#[cfg(test)]
mod tests;
pub mod timeline;
pub mod zoom;

pub use error::AssetError;
pub use fit::{DrawRect, contain_fit};
pub use frames::{FrameManifest, select_frame_index};
pub use preload::{FrameOutcome, PreloadReport, preload_all};
pub use progress::{section_progress, transit_progress};
pub use redraw::RedrawScheduler;
pub use reveal::{RevealState, WordStyle, word_styles};
pub use timeline::{AnimatorState, OverlayState, OverlayTransform};
pub use zoom::{CloseTrigger, FocalPoint, Rect, ScrollHost, ScrollLock, ZoomState};
