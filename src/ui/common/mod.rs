//! Common reusable UI components
//!
//! Pieces shared by the hero and the content sections.

pub mod modal;
pub mod spinner;

pub use modal::Lightbox;
pub use spinner::{Spinner, SpinnerSize};
