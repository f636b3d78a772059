//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::{Path, PathBuf};

use super::frames::{DEFAULT_FRAME_EXT, DEFAULT_FRAME_PREFIX, DEFAULT_FRAMES_DIR, FrameManifest};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory on disk holding the frame images
    /// Defaults to `<site_root>/frames`
    pub frames_dir: Option<String>,

    /// Frame file name prefix
    /// Example: ezgif-frame-
    pub frame_prefix: Option<String>,

    /// Frame file extension, with the leading dot
    /// Example: .jpg
    pub frame_ext: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source, `lookup` returns `None` for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            frames_dir: lookup("FRAMES_DIR"),
            frame_prefix: lookup("FRAME_PREFIX"),
            frame_ext: lookup("FRAME_EXT"),
        }
    }

    /// Check if the frames directory was overridden
    pub fn has_frames_dir(&self) -> bool {
        self.frames_dir.is_some()
    }

    /// Directory to scan for frames
    pub fn frames_path(&self, site_root: &str) -> PathBuf {
        match self.frames_dir.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => Path::new(site_root).join("frames"),
        }
    }

    /// Naming template for the frame set, count not yet known
    pub fn manifest_template(&self) -> FrameManifest {
        FrameManifest::new(
            DEFAULT_FRAMES_DIR,
            self.frame_prefix.as_deref().unwrap_or(DEFAULT_FRAME_PREFIX),
            self.frame_ext.as_deref().unwrap_or(DEFAULT_FRAME_EXT),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn empty() -> Config {
        Config {
            frames_dir: None,
            frame_prefix: None,
            frame_ext: None,
        }
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            frames_dir: Some("/srv/frames".to_string()),
            frame_prefix: Some("hero-".to_string()),
            frame_ext: Some(".webp".to_string()),
        };

        assert!(config.has_frames_dir());
        assert_eq!(config.frames_path("target/site"), PathBuf::from("/srv/frames"));

        let manifest = config.manifest_template();
        assert_eq!(manifest.prefix, "hero-");
        assert_eq!(manifest.extension, ".webp");
        assert_eq!(manifest.count, 0);
    }

    #[test]
    fn test_config_defaults() {
        let config = empty();

        assert!(!config.has_frames_dir());
        assert_eq!(
            config.frames_path("target/site"),
            PathBuf::from("target/site/frames")
        );

        let manifest = config.manifest_template();
        assert_eq!(manifest.dir, DEFAULT_FRAMES_DIR);
        assert_eq!(manifest.prefix, DEFAULT_FRAME_PREFIX);
        assert_eq!(manifest.extension, DEFAULT_FRAME_EXT);
    }

    #[test]
    fn test_config_with_partial_fields() {
        let config = Config {
            frame_ext: Some(".png".to_string()),
            ..empty()
        };

        let manifest = config.manifest_template();
        assert_eq!(manifest.prefix, DEFAULT_FRAME_PREFIX);
        assert_eq!(manifest.url(0), "/frames/ezgif-frame-001.png");
    }

    #[test]
    fn test_config_from_lookup_reads_each_variable() {
        let vars = HashMap::from([
            ("FRAMES_DIR", "/srv/frames"),
            ("FRAME_EXT", ".webp"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.frames_dir.as_deref(), Some("/srv/frames"));
        assert_eq!(config.frame_prefix, None);
        assert_eq!(config.frame_ext.as_deref(), Some(".webp"));
        assert_eq!(
            config.manifest_template().url(0),
            "/frames/ezgif-frame-001.webp"
        );
    }

    #[test]
    fn test_config_from_lookup_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert!(!config.has_frames_dir());
        assert_eq!(config.frame_prefix, None);
        assert_eq!(config.frame_ext, None);
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            frames_dir: Some("/srv/frames".to_string()),
            ..empty()
        };

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("/srv/frames"));
    }
}
