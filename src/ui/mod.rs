#[cfg(feature = "hydrate")]
pub mod browser;
pub mod common;
pub mod frame_animator;
pub mod icon;
pub mod image_zoom;
pub mod pages;
pub mod reveal;
pub mod sections;

pub use frame_animator::FrameAnimator;
pub use icon::{Icon, icons};
pub use sections::ContentSections;
