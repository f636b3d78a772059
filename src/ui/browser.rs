//! Browser glue for the hydrated page
//!
//! DOM access, image loading, canvas drawing and the frame cache owned by
//! the hero animator. Only compiled into the WebAssembly bundle.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlImageElement};

use crate::core::frames::MANIFEST_PATH;
use crate::core::{AssetError, FrameManifest, RedrawScheduler, Rect, ScrollHost, contain_fit};

/// Inner size of the window in CSS pixels, `(0, 0)` without a window
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    (width, height)
}

/// Bounding rect of an element relative to the viewport
pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// `document.body` as the page whose scrolling the lightbox suspends
pub struct BodyScroll;

impl ScrollHost for BodyScroll {
    fn overflow(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().set_property("overflow", value);
        }
    }
}

/// Fetch the frame manifest scanned by the server
pub async fn fetch_manifest() -> Result<FrameManifest, AssetError> {
    use gloo_net::http::Request;

    let response = Request::get(MANIFEST_PATH)
        .send()
        .await
        .map_err(|e| AssetError::ManifestFetch(e.to_string()))?;

    if !response.ok() {
        return Err(AssetError::ManifestFetch(format!(
            "HTTP {}",
            response.status()
        )));
    }

    response
        .json::<FrameManifest>()
        .await
        .map_err(|e| AssetError::ManifestFetch(e.to_string()))
}

/// Load one image, resolving once it has either loaded or failed
///
/// `number` is the 1-based frame number, used for the error message.
pub async fn load_image(number: usize, url: String) -> Result<HtmlImageElement, AssetError> {
    let image =
        HtmlImageElement::new().map_err(|_| AssetError::load_failed(number, url.clone()))?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(&url);

    let loaded = rx.await.unwrap_or(false);

    image.set_onload(None);
    image.set_onerror(None);
    drop(on_load);
    drop(on_error);

    if loaded {
        Ok(image)
    } else {
        Err(AssetError::load_failed(number, url))
    }
}

/// Match the canvas backing store to the viewport
pub fn fit_canvas_to_viewport(canvas: &HtmlCanvasElement) {
    let (width, height) = viewport_size();
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

/// Clear the canvas and draw `image` contained and centered
pub fn draw_image(canvas: &HtmlCanvasElement, image: &HtmlImageElement) -> Result<(), AssetError> {
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(AssetError::ContextUnavailable)?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    context.clear_rect(0.0, 0.0, width, height);

    if let Some(rect) = contain_fit(
        image.natural_width() as f64,
        image.natural_height() as f64,
        width,
        height,
    ) {
        let _ = context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        );
    }

    Ok(())
}

/// Frames and redraw bookkeeping owned by one mounted hero animator
///
/// Acquired on mount, released with the component; nothing here is global.
#[derive(Default)]
pub struct FrameCache {
    frames: Vec<Option<HtmlImageElement>>,
    scheduler: RedrawScheduler,
    pending_paint: Option<AnimationFrameRequestHandle>,
}

impl FrameCache {
    pub fn set_frames(&mut self, frames: Vec<Option<HtmlImageElement>>) {
        self.frames = frames;
    }

    /// Draw a frame right away; missing or failed frames leave the canvas as is
    pub fn draw(&self, canvas: &HtmlCanvasElement, index: Option<usize>) {
        let Some(image) = index
            .and_then(|i| self.frames.get(i))
            .and_then(Option::as_ref)
        else {
            return;
        };

        let _ = draw_image(canvas, image);
    }

    /// Redraw the last selected frame, used after a resize
    pub fn redraw_current(&self, canvas: &HtmlCanvasElement) {
        self.draw(canvas, self.scheduler.current());
    }

    /// Record the wanted frame, returns `true` if a paint must be scheduled
    pub fn request(&mut self, index: usize) -> bool {
        self.scheduler.request(index)
    }

    /// Select a frame without scheduling, so the next immediate draw uses it
    pub fn select(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.scheduler.request(index);
            self.scheduler.take();
        }
    }

    pub fn set_pending_paint(&mut self, handle: AnimationFrameRequestHandle) {
        self.pending_paint = Some(handle);
    }

    /// Body of the scheduled animation frame
    pub fn paint(&mut self, canvas: &HtmlCanvasElement) {
        self.pending_paint = None;
        if let Some(index) = self.scheduler.take() {
            self.draw(canvas, Some(index));
        }
    }

    /// Abandon a scheduled paint
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending_paint.take() {
            handle.cancel();
        }
        self.scheduler.cancel();
    }
}
