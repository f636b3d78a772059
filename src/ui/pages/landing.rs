//! Landing page component
//!
//! The whole site lives on this page:
//! - Fixed logo header
//! - Scroll-synced canvas hero with text overlays
//! - Reveal-on-scroll content sections and footer

use leptos::prelude::*;

use crate::ui::{ContentSections, FrameAnimator};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Header />

        <main class="bg-[#050505] min-h-screen text-white selection:bg-white selection:text-black">
            <FrameAnimator />
            <ContentSections />
        </main>

        <LandingStyles />
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 p-6 flex justify-center pointer-events-none">
            <img src="/logo.png" alt="AI DJ PRO" class="h-8 w-auto object-contain" />
        </header>
    }
}

/// Styles driven by classes and inline values set from Rust
///
/// Revealed blocks drop `will-change`, which would otherwise keep them as the
/// containing block of any fixed-position descendant.
const LANDING_CSS: &str = r#"
/* Reveal on scroll */
.reveal {
    opacity: 0;
    transition: opacity 0.7s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                transform 0.7s cubic-bezier(0.25, 0.46, 0.45, 0.94);
}
.reveal:not(.is-revealed) {
    will-change: opacity, transform;
}
.reveal-fade-up { transform: translateY(40px); }
.reveal-slide-left { transform: translateX(-40px); }
.reveal-slide-right { transform: translateX(20px); }
.reveal-scale-in { transform: scale(0.95); }
.reveal.is-revealed {
    opacity: 1;
    transform: none;
}

/* Word blur headings */
.word-blur-word {
    display: inline-block;
    will-change: opacity, filter;
}

/* Hover lens */
.zoom-lens {
    position: fixed;
    z-index: 60;
    pointer-events: none;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.25);
    background-repeat: no-repeat;
    background-color: #050505;
    box-shadow: 0 20px 40px -10px rgba(0, 0, 0, 0.7);
}

/* Loading spinner */
@keyframes spinner-rotate {
    to { transform: rotate(360deg); }
}
.spinner {
    border-style: solid;
    border-color: white;
    border-top-color: transparent;
    border-radius: 9999px;
    animation: spinner-rotate 0.8s linear infinite;
}
.spinner-sm { width: 1.5rem; height: 1.5rem; border-width: 2px; }
.spinner-md { width: 2.5rem; height: 2.5rem; border-width: 3px; }
.spinner-lg { width: 4rem; height: 4rem; border-width: 4px; }

@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; }
    .spinner { animation-duration: 2s; }
}
"#;

#[component]
fn LandingStyles() -> impl IntoView {
    view! { <style>{LANDING_CSS}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Body of the first rule whose selector is exactly `selector`
    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let start = css
            .find(&format!("\n{} {{", selector))
            .unwrap_or_else(|| panic!("no rule for {}", selector));
        let body = &css[start..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn test_revealed_blocks_do_not_contain_fixed_children() {
        assert!(!rule(LANDING_CSS, ".reveal").contains("will-change"));
        assert!(!rule(LANDING_CSS, ".reveal.is-revealed").contains("will-change"));
        assert!(rule(LANDING_CSS, ".reveal:not(.is-revealed)").contains("will-change"));
    }

    #[test]
    fn test_lens_is_viewport_positioned() {
        assert!(rule(LANDING_CSS, ".zoom-lens").contains("position: fixed"));
    }
}
