//! Frame set addressing
//!
//! A frame set is an ordered run of images named
//! `<dir><prefix><NNN><extension>` where `NNN` is the 1-based frame number
//! zero-padded to a fixed width. The count is not trusted from a constant:
//! the server scans the frames directory at startup and serves the result
//! as a [`FrameManifest`], see [`FrameManifest::scan_dir`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// URL directory the frames are served from
pub const DEFAULT_FRAMES_DIR: &str = "/frames/";

/// File name prefix shared by every frame
pub const DEFAULT_FRAME_PREFIX: &str = "ezgif-frame-";

/// File extension shared by every frame (with the dot)
pub const DEFAULT_FRAME_EXT: &str = ".jpg";

/// Zero-padding width of the frame number
pub const DEFAULT_PAD_WIDTH: usize = 3;

/// Frame count used when the manifest cannot be fetched
pub const DEFAULT_FRAME_COUNT: usize = 40;

/// Server endpoint returning the scanned [`FrameManifest`] as JSON
pub const MANIFEST_PATH: &str = "/api/frames/manifest";

/// Description of an ordered frame set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameManifest {
    /// URL directory, with trailing slash
    pub dir: String,
    /// File name prefix
    pub prefix: String,
    /// File extension including the leading dot
    pub extension: String,
    /// Zero-padding width of the frame number
    pub pad_width: usize,
    /// Number of frames available, frames are numbered `1..=count`
    pub count: usize,
}

impl Default for FrameManifest {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES_DIR, DEFAULT_FRAME_PREFIX, DEFAULT_FRAME_EXT)
            .with_count(DEFAULT_FRAME_COUNT)
    }
}

impl FrameManifest {
    /// Create an empty manifest for the given naming template
    pub fn new(
        dir: impl Into<String>,
        prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        let mut dir = dir.into();
        if !dir.ends_with('/') {
            dir.push('/');
        }

        Self {
            dir,
            prefix: prefix.into(),
            extension: extension.into(),
            pad_width: DEFAULT_PAD_WIDTH,
            count: 0,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// File name of a 1-based frame number
    pub fn file_name(&self, number: usize) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            number,
            self.extension,
            width = self.pad_width
        )
    }

    /// URL of a 0-based frame index
    pub fn url(&self, index: usize) -> String {
        format!("{}{}", self.dir, self.file_name(index + 1))
    }

    /// URLs of every frame, in order
    pub fn urls(&self) -> Vec<String> {
        (0..self.count).map(|index| self.url(index)).collect()
    }

    /// Parse the 1-based frame number out of a file name following this template
    pub fn parse_frame_number(&self, file_name: &str) -> Option<usize> {
        let digits = file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.extension.as_str())?;

        if digits.len() < self.pad_width || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        digits.parse::<usize>().ok().filter(|n| *n > 0)
    }

    /// Length of the contiguous run `1, 2, 3, ...` present among `names`
    ///
    /// A gap ends the run: frames after a missing number are unreachable.
    pub fn count_contiguous<I, S>(&self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbers: HashSet<usize> = names
            .into_iter()
            .filter_map(|name| self.parse_frame_number(name.as_ref()))
            .collect();

        let mut count = 0;
        while numbers.contains(&(count + 1)) {
            count += 1;
        }
        count
    }

    /// Derive the frame count from the files present in `path`
    #[cfg(feature = "ssr")]
    pub fn scan_dir(self, path: &std::path::Path) -> Result<Self, crate::core::AssetError> {
        let scan_error = |reason: String| crate::core::AssetError::ManifestScan {
            dir: path.display().to_string(),
            reason,
        };

        let entries = std::fs::read_dir(path).map_err(|e| scan_error(e.to_string()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| scan_error(e.to_string()))?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        let count = self.count_contiguous(&names);
        Ok(self.with_count(count))
    }
}

/// Active frame for a normalized scroll progress
///
/// `clamp(floor(progress * count), 0, count - 1)`; `None` when there are no frames.
pub fn select_frame_index(progress: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    let index = (progress * count as f64).floor() as usize;
    Some(index.min(count - 1))
}
