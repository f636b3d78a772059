//! Scroll-triggered reveal animations
//!
//! Blocks start offset and transparent and settle into place the first time
//! they enter the viewport. Headings can instead be scrubbed word by word
//! with [`WordBlurHeading`].

use leptos::html::{self, ElementType};
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::reveal::{BLOCK_REVEAL_MARGIN, SECTION_REVEAL_MARGIN, split_words};
use crate::core::{WordStyle, word_styles};

/// Starting pose of a reveal
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RevealVariant {
    /// Rise from below
    #[default]
    FadeUp,
    /// Slide in from the left edge
    SlideLeft,
    /// Slide in from the right edge
    SlideRight,
    /// Grow from slightly smaller
    ScaleIn,
    /// Opacity only
    Fade,
}

impl RevealVariant {
    fn class(&self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal-fade-up",
            RevealVariant::SlideLeft => "reveal-slide-left",
            RevealVariant::SlideRight => "reveal-slide-right",
            RevealVariant::ScaleIn => "reveal-scale-in",
            RevealVariant::Fade => "reveal-fade",
        }
    }
}

fn reveal_class(variant: RevealVariant, extra: &str, revealed: bool) -> String {
    let state = if revealed { " is-revealed" } else { "" };
    format!("reveal {}{} {}", variant.class(), state, extra)
}

fn delay_style(delay: f64) -> String {
    if delay > 0.0 {
        format!("transition-delay: {:.2}s;", delay)
    } else {
        String::new()
    }
}

/// Latch that flips once `target` intersects the viewport
///
/// `margin` shrinks the viewport bottom so the reveal starts a little before
/// the element is fully visible. The observer is disconnected after the first
/// hit and on unmount. Where no observer can be created the element is
/// revealed immediately.
pub fn use_reveal<E>(target: NodeRef<E>, margin: f64) -> ReadSignal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let (revealed, set_revealed) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos::wasm_bindgen::closure::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        use crate::core::RevealState;
        use crate::core::reveal::root_margin;

        type Observer = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);

        let observer = StoredValue::new_local(None::<Observer>);
        let latch = StoredValue::new(RevealState::new());

        let disconnect = move || {
            observer.try_with_value(|o| {
                if let Some((obs, _)) = o {
                    obs.disconnect();
                }
            });
        };

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if latch.with_value(RevealState::is_revealed) {
                return;
            }
            let element: web_sys::Element = element.unchecked_into();

            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch
                    .try_update_value(|l| l.observe(intersecting))
                    .unwrap_or(false)
                {
                    set_revealed.set(true);
                    disconnect();
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_root_margin(&root_margin(margin));

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(obs) => {
                    obs.observe(&element);
                    disconnect();
                    observer.set_value(Some((obs, callback)));
                }
                Err(_) => {
                    latch.update_value(|l| {
                        l.observe(true);
                    });
                    set_revealed.set(true);
                }
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|o| {
                if let Some((obs, _callback)) = o.take() {
                    obs.disconnect();
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, margin, set_revealed);
    }

    revealed
}

/// Section that reveals as a whole when scrolled into view
#[component]
pub fn RevealSection(
    /// Extra CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Delay before the transition starts, in seconds
    #[prop(default = 0.0)]
    delay: f64,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node_ref, SECTION_REVEAL_MARGIN);

    view! {
        <section
            node_ref=node_ref
            class=move || reveal_class(RevealVariant::FadeUp, class, revealed.get())
            style=delay_style(delay)
        >
            {children()}
        </section>
    }
}

/// Block-level reveal
#[component]
pub fn Reveal(
    #[prop(default = RevealVariant::FadeUp)]
    variant: RevealVariant,
    /// Delay before the transition starts, in seconds
    #[prop(default = 0.0)]
    delay: f64,
    /// Bottom inset of the viewport used for the trigger, in pixels
    #[prop(default = BLOCK_REVEAL_MARGIN)]
    margin: f64,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref, margin);

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(variant, class, revealed.get())
            style=delay_style(delay)
        >
            {children()}
        </div>
    }
}

/// List item reveal, staggered by the caller through `delay`
#[component]
pub fn RevealItem(
    #[prop(default = RevealVariant::FadeUp)]
    variant: RevealVariant,
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Li>::new();
    let revealed = use_reveal(node_ref, 0.0);

    view! {
        <li
            node_ref=node_ref
            class=move || reveal_class(variant, class, revealed.get())
            style=delay_style(delay)
        >
            {children()}
        </li>
    }
}

/// Heading whose words sharpen one after another as it crosses the viewport
///
/// Progress is the heading's own transit, from its top meeting the viewport
/// bottom to its bottom leaving the viewport top, so scrolling back blurs the
/// words again.
#[component]
pub fn WordBlurHeading(
    text: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let heading_ref = NodeRef::<html::H2>::new();
    let words = split_words(text);
    let count = words.len();

    let progress = RwSignal::new(0.0_f64);
    let styles = Memo::new(move |_| word_styles(progress.get(), count));

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;

        use crate::core::transit_progress;
        use crate::ui::browser::{element_rect, viewport_size};

        let measure = move || {
            let Some(heading) = heading_ref.get_untracked() else {
                return;
            };
            let rect = element_rect(&heading);
            let (_, viewport_height) = viewport_size();
            progress.set(transit_progress(rect.top, rect.height, viewport_height));
        };

        Effect::new(move |_| {
            if heading_ref.get().is_some() {
                measure();
            }
        });

        let on_scroll = window_event_listener(ev::scroll, move |_| measure());
        let on_resize = window_event_listener(ev::resize, move |_| measure());

        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    view! {
        <h2 node_ref=heading_ref class=format!("word-blur {}", class) aria-label=text>
            {words
                .into_iter()
                .enumerate()
                .map(|(i, word)| {
                    let style = move || {
                        styles.with(|s| s.get(i).map(WordStyle::style).unwrap_or_default())
                    };
                    view! {
                        <span class="word-blur-word" aria-hidden="true" style=style>
                            {word}
                        </span>
                        " "
                    }
                })
                .collect_view()}
        </h2>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_tracks_state() {
        assert_eq!(
            reveal_class(RevealVariant::FadeUp, "space-y-8", false),
            "reveal reveal-fade-up space-y-8"
        );
        assert_eq!(
            reveal_class(RevealVariant::SlideLeft, "", true),
            "reveal reveal-slide-left is-revealed "
        );
    }

    #[test]
    fn test_delay_style() {
        assert_eq!(delay_style(0.0), "");
        assert_eq!(delay_style(0.25), "transition-delay: 0.25s;");
    }

    #[test]
    fn test_variant_classes_are_distinct() {
        let classes = [
            RevealVariant::FadeUp,
            RevealVariant::SlideLeft,
            RevealVariant::SlideRight,
            RevealVariant::ScaleIn,
            RevealVariant::Fade,
        ]
        .map(|v| v.class());

        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
