//! REST endpoint describing the frame assets
//!
//! - GET /api/frames/manifest - Frame set naming template and real frame count
//!
//! The manifest is computed once at startup from the files on disk, so the
//! client never relies on a hard-coded frame count.

use std::path::Path;
use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use super::frames::{FrameManifest, MANIFEST_PATH};

/// Shared state for the asset endpoints
#[derive(Clone)]
pub struct AssetState {
    pub manifest: Arc<FrameManifest>,
}

impl AssetState {
    pub fn new(manifest: FrameManifest) -> Self {
        Self {
            manifest: Arc::new(manifest),
        }
    }

    /// Scan `dir` with the given naming template
    ///
    /// A missing or unreadable directory is logged and yields an empty set;
    /// the page still renders, the hero just has nothing to draw.
    pub fn scan(template: FrameManifest, dir: &Path) -> Self {
        let fallback = template.clone().with_count(0);
        let manifest = match template.scan_dir(dir) {
            Ok(manifest) => {
                tracing::info!(
                    "Frame manifest: {} frames in {}",
                    manifest.count,
                    dir.display()
                );
                manifest
            }
            Err(e) => {
                tracing::warn!("{}", e);
                fallback
            }
        };

        if manifest.is_empty() {
            tracing::warn!("No frames found in {}", dir.display());
        }

        Self::new(manifest)
    }
}

/// Create the asset API router
pub fn assets_router(state: AssetState) -> Router {
    Router::new()
        .route(MANIFEST_PATH, get(get_manifest))
        .with_state(state)
}

/// GET /api/frames/manifest
async fn get_manifest(State(state): State<AssetState>) -> impl IntoResponse {
    Json(state.manifest.as_ref().clone())
}
