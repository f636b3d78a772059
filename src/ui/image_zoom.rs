//! Content images: placeholders, hover lens and click-to-zoom lightbox
//!
//! [`ImagePlaceholder`] frames an image at a fixed aspect ratio and swaps in
//! a gradient when the source is missing or fails. [`ZoomableImage`] adds one
//! of two zoom modes on top of a plain `<img>`.

use leptos::html;
use leptos::portal::Portal;
use leptos::prelude::*;

use crate::core::zoom::{LENS_SIZE, LENS_ZOOM};
use crate::core::{CloseTrigger, FocalPoint, ZoomState};
use crate::ui::common::Lightbox;

/// Aspect ratio of an image frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageAspect {
    /// 16:9
    #[default]
    Video,
    /// 1:1
    Square,
    /// 21:9
    Wide,
    /// 3:4
    Tall,
}

impl ImageAspect {
    pub fn class(&self) -> &'static str {
        match self {
            ImageAspect::Video => "aspect-video",
            ImageAspect::Square => "aspect-square",
            ImageAspect::Wide => "aspect-[21/9]",
            ImageAspect::Tall => "aspect-[3/4]",
        }
    }
}

/// Tint of the placeholder shown in place of a missing image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageGradient {
    #[default]
    Default,
    Warm,
    Cool,
    Glow,
}

impl ImageGradient {
    pub fn class(&self) -> &'static str {
        match self {
            ImageGradient::Default => "from-white/10 via-white/5 to-transparent",
            ImageGradient::Warm => "from-amber-500/20 via-orange-500/10 to-transparent",
            ImageGradient::Cool => "from-blue-500/20 via-cyan-500/10 to-transparent",
            ImageGradient::Glow => "from-white/20 via-purple-500/10 to-transparent",
        }
    }
}

/// How an image reacts to the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomMode {
    /// Plain image
    #[default]
    Off,
    /// Magnifying lens following the pointer
    Hover,
    /// Click opens a full-viewport lightbox
    Click,
}

/// Where the lens sits and what it shows
#[derive(Clone, Copy, Debug, PartialEq)]
struct Lens {
    left: f64,
    top: f64,
    /// Rendered size of the image, the lens background is this times the zoom
    image_width: f64,
    image_height: f64,
}

impl Lens {
    fn style(&self, src: &str, focal: FocalPoint) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {size}px; height: {size}px; \
             background-image: url('{}'); background-size: {:.1}px {:.1}px; \
             background-position: {};",
            self.left,
            self.top,
            src,
            self.image_width * LENS_ZOOM,
            self.image_height * LENS_ZOOM,
            focal.background_position(),
            size = LENS_SIZE,
        )
    }
}

/// Image framed at a fixed aspect ratio, with a gradient fallback
#[component]
pub fn ImagePlaceholder(
    /// Image URL; without one only the gradient is shown
    #[prop(optional)]
    src: Option<&'static str>,
    #[prop(default = ImageAspect::Video)]
    aspect: ImageAspect,
    #[prop(default = ImageGradient::Default)]
    gradient: ImageGradient,
    /// Caption drawn over the bottom edge, also used as alt text
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(default = "")]
    class: &'static str,
    #[prop(default = ZoomMode::Off)]
    zoom: ZoomMode,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let on_error = Callback::new(move |_: ()| set_failed.set(true));

    view! {
        <div class=format!(
            "relative overflow-hidden rounded-3xl border border-white/10 bg-white/[0.02] {} {}",
            aspect.class(),
            class
        )>
            {match src {
                Some(src) => view! {
                    <Show
                        when=move || !failed.get()
                        fallback=move || view! { <GradientFill gradient=gradient /> }
                    >
                        <ZoomableImage
                            src=src
                            alt=label.unwrap_or_default()
                            mode=zoom
                            on_error=on_error
                        />
                    </Show>
                }
                .into_any(),
                None => view! { <GradientFill gradient=gradient /> }.into_any(),
            }}
            {label.map(|l| view! {
                <div class="absolute bottom-4 left-4 right-4 text-center text-sm text-white/30 font-medium tracking-wide drop-shadow-lg pointer-events-none">
                    {l}
                </div>
            })}
        </div>
    }
}

#[component]
fn GradientFill(gradient: ImageGradient) -> impl IntoView {
    view! {
        <div class=format!("absolute inset-0 bg-gradient-to-br {} opacity-60", gradient.class())></div>
        <div class="absolute inset-0 flex items-center justify-center">
            <div class="h-px w-24 bg-white/20 rounded-full animate-pulse"></div>
        </div>
    }
}

/// Image with an optional hover lens or click-to-zoom lightbox
#[component]
pub fn ZoomableImage(
    src: &'static str,
    #[prop(default = "")]
    alt: &'static str,
    #[prop(default = ZoomMode::Off)]
    mode: ZoomMode,
    /// Called when the image fails to load
    #[prop(optional)]
    on_error: Option<Callback<()>>,
) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let zoom = RwSignal::new(ZoomState::Idle);
    let lens = RwSignal::new(None::<Lens>);

    let report_error = move || {
        if let Some(cb) = on_error {
            cb.run(());
        }
    };

    // A load error can fire before hydration attaches the handler
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                report_error();
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let scroll_lock = StoredValue::new(crate::core::ScrollLock::new());

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        use crate::ui::browser::BodyScroll;
        scroll_lock.try_update_value(|lock| lock.release(&BodyScroll));
    });

    let on_move = move |ev: leptos::ev::MouseEvent| {
        if mode != ZoomMode::Hover {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::core::zoom::{focal_point, lens_origin};
            use crate::ui::browser::{element_rect, viewport_size};

            let Some(img) = img_ref.get_untracked() else {
                return;
            };
            let rect = element_rect(&img);
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            let (viewport_width, viewport_height) = viewport_size();
            let (left, top) = lens_origin(x, y, viewport_width, viewport_height);

            zoom.update(|z| *z = z.pointer_move(focal_point(x, y, rect)));
            lens.set(Some(Lens {
                left,
                top,
                image_width: rect.width,
                image_height: rect.height,
            }));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_leave = move |_: leptos::ev::MouseEvent| {
        zoom.update(|z| *z = z.pointer_leave());
        lens.set(None);
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        if mode != ZoomMode::Click {
            return;
        }
        zoom.update(|z| *z = z.open());
        #[cfg(feature = "hydrate")]
        scroll_lock.update_value(|lock| lock.acquire(&crate::ui::browser::BodyScroll));
    };

    let on_close = Callback::new(move |trigger: CloseTrigger| {
        zoom.update(|z| *z = z.close(trigger));
        #[cfg(feature = "hydrate")]
        scroll_lock.try_update_value(|lock| lock.release(&crate::ui::browser::BodyScroll));
    });

    let img_class = match mode {
        ZoomMode::Off => "absolute inset-0 h-full w-full object-cover",
        ZoomMode::Hover => "absolute inset-0 h-full w-full object-cover cursor-crosshair",
        ZoomMode::Click => "absolute inset-0 h-full w-full object-cover cursor-zoom-in",
    };

    let lens_style = move || {
        let focal = zoom.get().focal()?;
        lens.get().map(|l| l.style(src, focal))
    };

    view! {
        <img
            node_ref=img_ref
            src=src
            alt=alt
            class=img_class
            draggable="false"
            on:error=move |_| report_error()
            on:mousemove=on_move
            on:mouseleave=on_leave
            on:click=on_click
        />
        // Lens coordinates are viewport-relative, so it lives on <body>
        {(mode == ZoomMode::Hover).then(|| view! {
            <Portal>
                <Show when=move || lens_style().is_some()>
                    <div
                        class="zoom-lens"
                        aria-hidden="true"
                        style=move || lens_style().unwrap_or_default()
                    ></div>
                </Show>
            </Portal>
        })}
        {(mode == ZoomMode::Click).then(|| view! {
            <Lightbox
                is_open=Signal::derive(move || zoom.get().is_zoomed())
                on_close=on_close
                label=alt
            >
                <img src=src alt=alt class="max-h-[90vh] max-w-[90vw] object-contain rounded-2xl shadow-2xl" />
            </Lightbox>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_classes() {
        assert_eq!(ImageAspect::default().class(), "aspect-video");
        assert_eq!(ImageAspect::Wide.class(), "aspect-[21/9]");
        assert_eq!(ImageAspect::Tall.class(), "aspect-[3/4]");
    }

    #[test]
    fn test_gradient_classes() {
        assert!(ImageGradient::Warm.class().contains("amber"));
        assert!(ImageGradient::Cool.class().contains("cyan"));
        assert!(ImageGradient::Glow.class().contains("purple"));
    }

    #[test]
    fn test_lens_style_magnifies_rendered_image() {
        let lens = Lens {
            left: 100.0,
            top: 40.0,
            image_width: 400.0,
            image_height: 300.0,
        };
        let style = lens.style("/images/clubs.jpg", FocalPoint::CENTER);

        assert!(style.contains("left: 100.0px"));
        assert!(style.contains("url('/images/clubs.jpg')"));
        assert!(style.contains("background-size: 1000.0px 750.0px"));
        assert!(style.contains("background-position: 50.00% 50.00%"));
    }
}
