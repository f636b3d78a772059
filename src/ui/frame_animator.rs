//! Scroll-synced hero animation
//!
//! A 400vh section with a sticky full-viewport canvas. Scroll progress through
//! the section picks the frame to draw and drives four text overlays. All
//! frames are preloaded before the section is shown; until then a loading
//! screen takes its place.

use leptos::html;
use leptos::prelude::*;

use crate::core::AnimatorState;
use crate::ui::common::{Spinner, SpinnerSize};

/// Hero section driven by scroll position
#[component]
pub fn FrameAnimator() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();

    let (loaded, set_loaded) = signal(false);
    let (frame_count, set_frame_count) = signal(0_usize);
    let progress = RwSignal::new(0.0_f64);
    let state = Memo::new(move |_| AnimatorState::derive(progress.get(), frame_count.get()));

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;
        use leptos::logging::warn;
        use leptos::task::spawn_local;

        use crate::core::{FrameManifest, preload_all, section_progress};
        use crate::ui::browser::{
            FrameCache, element_rect, fetch_manifest, fit_canvas_to_viewport, load_image,
            viewport_size,
        };

        let cache = StoredValue::new_local(FrameCache::default());

        let update_progress = move || {
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let rect = element_rect(&section);
            let (_, viewport_height) = viewport_size();
            progress.set(section_progress(rect.top, rect.height, viewport_height));
        };

        // Preload every frame, then reveal the section
        spawn_local(async move {
            let manifest = match fetch_manifest().await {
                Ok(manifest) => manifest,
                Err(e) => {
                    warn!("{}; using default frame set", e);
                    FrameManifest::default()
                }
            };

            let report = preload_all(&manifest, |index, url| load_image(index + 1, url)).await;
            let frames = report.into_frames();
            let count = frames.len();

            if cache.try_update_value(|c| c.set_frames(frames)).is_none() {
                return;
            }
            set_frame_count.set(count);
            set_loaded.set(true);
        });

        // First paint as soon as the canvas is mounted
        Effect::new(move |_| {
            if !loaded.get() {
                return;
            }
            let Some(canvas) = canvas_ref.get() else {
                return;
            };

            fit_canvas_to_viewport(&canvas);
            update_progress();
            let index = state.get_untracked().frame_index;
            cache.try_update_value(|c| {
                c.select(index);
                c.draw(&canvas, index);
            });
        });

        let on_scroll = window_event_listener(ev::scroll, move |_| {
            if !loaded.get_untracked() {
                return;
            }
            update_progress();

            let Some(index) = state.get_untracked().frame_index else {
                return;
            };
            if !cache.try_update_value(|c| c.request(index)).unwrap_or(false) {
                return;
            }

            let paint = move || {
                cache.try_update_value(|c| match canvas_ref.get_untracked() {
                    Some(canvas) => c.paint(&canvas),
                    None => c.cancel(),
                });
            };
            match request_animation_frame_with_handle(paint) {
                Ok(handle) => {
                    cache.try_update_value(|c| c.set_pending_paint(handle));
                }
                Err(_) => {
                    cache.try_update_value(|c| c.cancel());
                }
            }
        });

        let on_resize = window_event_listener(ev::resize, move |_| {
            if !loaded.get_untracked() {
                return;
            }
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            // The section is 400vh, so the same offset maps to a new progress
            update_progress();
            fit_canvas_to_viewport(&canvas);
            let index = state.get_untracked().frame_index;
            cache.try_update_value(|c| {
                c.select(index);
                c.redraw_current(&canvas);
            });
        });

        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
            cache.try_update_value(|c| c.cancel());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (set_loaded, set_frame_count);
    }

    let overlay_style = move |index: usize| move || state.with(|s| s.overlays[index].style());

    view! {
        <Show
            when=move || loaded.get()
            fallback=|| view! {
                <section class="relative h-screen bg-[#050505] flex flex-col items-center justify-center text-white overflow-hidden">
                    <Spinner size=SpinnerSize::Large class="mb-4" />
                    <p class="text-sm tracking-widest uppercase text-white/60">
                        "Initializing AI DJ Pro..."
                    </p>
                </section>
            }
        >
            <section node_ref=section_ref class="relative h-[400vh] bg-[#050505]">
                <div class="sticky top-0 h-screen w-full overflow-hidden flex flex-col items-center justify-center">
                    <canvas node_ref=canvas_ref class="absolute inset-0 w-full h-full"></canvas>

                    <div class="relative z-10 pointer-events-none w-full max-w-7xl mx-auto h-full flex flex-col justify-center">
                        // Title
                        <div class="absolute inset-0 flex items-center justify-center" style=overlay_style(0)>
                            <h1 class="text-5xl md:text-8xl font-bold tracking-tighter text-center bg-clip-text text-transparent bg-gradient-to-b from-white to-white/60">
                                "The Future of" <br /> "DJing Is Here."
                            </h1>
                        </div>

                        // Co-pilot
                        <div class="absolute inset-0 flex items-center justify-start px-8 md:px-20" style=overlay_style(1)>
                            <div class="bg-black/20 backdrop-blur-sm p-6 rounded-2xl border border-white/5 max-w-lg">
                                <h2 class="text-3xl md:text-5xl font-bold mb-4">"Your AI Co-Pilot"</h2>
                                <p class="text-lg md:text-xl text-white/60">
                                    "Analyzes track structure, key, and energy in real-time. It doesn't just mix; it understands."
                                </p>
                            </div>
                        </div>

                        // Festival stages
                        <div class="absolute inset-0 flex items-center justify-end px-8 md:px-20" style=overlay_style(2)>
                            <div class="bg-black/20 backdrop-blur-sm p-6 rounded-2xl border border-white/5 max-w-lg text-right">
                                <h2 class="text-3xl md:text-5xl font-bold mb-4">
                                    "From Bedroom" <br /> "to Festival Stages"
                                </h2>
                                <p class="text-lg md:text-xl text-white/60">
                                    "Seamless hardware integration that scales with your ambition. Build complex routines in seconds."
                                </p>
                            </div>
                        </div>

                        // Call to action
                        <div class="absolute inset-0 flex items-center justify-center flex-col" style=overlay_style(3)>
                            <h2 class="text-4xl md:text-7xl font-bold text-center mb-6">
                                "More Than Mixing." <br />
                                <span class="text-white/50">"It’s Performance Intelligence."</span>
                            </h2>
                            <button class="pointer-events-auto mt-8 px-10 py-4 bg-white text-black font-bold rounded-full text-lg hover:bg-gray-200 transition-all hover:scale-105 active:scale-95">
                                "GET EARLY ACCESS"
                            </button>
                        </div>
                    </div>
                </div>
            </section>
        </Show>
    }
}
