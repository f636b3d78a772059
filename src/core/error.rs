//! Error types for frame assets and their manifest.
//!
//! None of these are fatal to the page: callers log them and degrade
//! to a visually incomplete but working state.

/// Errors raised while locating, loading or drawing frame assets
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    /// A single frame image failed to load
    #[error("Failed to load frame {index:03} from {url}")]
    LoadFailed { index: usize, url: String },

    /// The frames directory could not be scanned
    #[error("Cannot scan frames directory {dir}: {reason}")]
    ManifestScan { dir: String, reason: String },

    /// The client could not obtain the manifest from the server
    #[error("Frame manifest unavailable: {0}")]
    ManifestFetch(String),

    /// Canvas or its 2D context is not available
    #[error("Canvas 2D context unavailable")]
    ContextUnavailable,
}

impl AssetError {
    /// Build a load failure for a 1-based frame number
    pub fn load_failed(index: usize, url: impl Into<String>) -> Self {
        Self::LoadFailed {
            index,
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_display_pads_index() {
        let err = AssetError::load_failed(7, "/frames/ezgif-frame-007.jpg");
        assert_eq!(
            err.to_string(),
            "Failed to load frame 007 from /frames/ezgif-frame-007.jpg"
        );
    }

    #[test]
    fn test_manifest_scan_display() {
        let err = AssetError::ManifestScan {
            dir: "public/frames".to_string(),
            reason: "not found".to_string(),
        };
        assert!(err.to_string().contains("public/frames"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_context_unavailable_display() {
        assert_eq!(
            AssetError::ContextUnavailable.to_string(),
            "Canvas 2D context unavailable"
        );
    }
}
