//! Tolerant concurrent preload of a frame set
//!
//! Every frame load is started at once and joined with
//! [`futures::future::join_all`]: the join waits for all loads to settle and
//! never fails. Each outcome is recorded so failed frames can be skipped at
//! draw time.

use std::future::Future;

use futures::future::join_all;
use leptos::logging::{error, log};

use super::error::AssetError;
use super::frames::FrameManifest;

/// Settled result of one frame load
#[derive(Debug)]
pub enum FrameOutcome<T> {
    Loaded(T),
    Failed(AssetError),
}

impl<T> FrameOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FrameOutcome::Loaded(_))
    }
}

/// Outcomes of a whole preload, in frame order
#[derive(Debug)]
pub struct PreloadReport<T> {
    outcomes: Vec<FrameOutcome<T>>,
}

impl<T> PreloadReport<T> {
    pub fn new(outcomes: Vec<FrameOutcome<T>>) -> Self {
        Self { outcomes }
    }

    /// Number of settled loads, successful or not
    pub fn settled(&self) -> usize {
        self.outcomes.len()
    }

    pub fn loaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_loaded()).count()
    }

    pub fn failed(&self) -> usize {
        self.settled() - self.loaded()
    }

    pub fn errors(&self) -> impl Iterator<Item = &AssetError> {
        self.outcomes.iter().filter_map(|o| match o {
            FrameOutcome::Failed(e) => Some(e),
            FrameOutcome::Loaded(_) => None,
        })
    }

    /// Frames by index; failed frames are `None` and draw nothing
    pub fn into_frames(self) -> Vec<Option<T>> {
        self.outcomes
            .into_iter()
            .map(|o| match o {
                FrameOutcome::Loaded(frame) => Some(frame),
                FrameOutcome::Failed(_) => None,
            })
            .collect()
    }
}

/// Load every frame of `manifest` concurrently and wait for all of them
///
/// `load` receives the 0-based index and the frame URL. Failures are logged
/// and kept in the report; the returned future always resolves.
pub async fn preload_all<T, F, Fut>(manifest: &FrameManifest, mut load: F) -> PreloadReport<T>
where
    F: FnMut(usize, String) -> Fut,
    Fut: Future<Output = Result<T, AssetError>>,
{
    let requests = manifest
        .urls()
        .into_iter()
        .enumerate()
        .map(|(index, url)| load(index, url));

    let outcomes = join_all(requests)
        .await
        .into_iter()
        .map(|result| match result {
            Ok(frame) => FrameOutcome::Loaded(frame),
            Err(e) => {
                error!("{}", e);
                FrameOutcome::Failed(e)
            }
        })
        .collect::<Vec<_>>();

    let report = PreloadReport::new(outcomes);
    log!(
        "Loaded {} images ({} failed)",
        report.loaded(),
        report.failed()
    );
    report
}
