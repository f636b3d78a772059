//! Marketing content below the hero
//!
//! Static copy laid out in reveal-on-scroll sections, ending with the footer.

use leptos::prelude::*;

use crate::core::reveal::stagger_delay;
use crate::ui::icon::{Icon, icons};
use crate::ui::image_zoom::{ImageAspect, ImageGradient, ImagePlaceholder, ZoomMode};
use crate::ui::reveal::{Reveal, RevealItem, RevealSection, RevealVariant, WordBlurHeading};

/// Seconds between consecutive items of a revealed list
const LIST_STAGGER: f64 = 0.1;
const TAG_STAGGER: f64 = 0.05;

struct Card {
    title: &'static str,
    desc: &'static str,
    src: &'static str,
    gradient: ImageGradient,
}

struct Plan {
    title: &'static str,
    desc: &'static str,
    src: &'static str,
    featured: bool,
}

static CAPABILITIES: [&str; 5] = [
    "Match BPM and key seamlessly",
    "Generate intelligent transition suggestions",
    "Analyze track energy levels",
    "Control vocal prompts and live MC cues",
    "Predict crowd energy flow",
];

static FEATURES: [Card; 4] = [
    Card {
        title: "Intelligent Track Analysis",
        desc: "Every track is analyzed for BPM, key, structure, and energy profile. AI DJ Pro suggests the best next track based on flow, not guesswork.",
        src: "/images/track-analysis.jpg",
        gradient: ImageGradient::Cool,
    },
    Card {
        title: "Real-Time Energy Mapping",
        desc: "Visualize your set's energy curve. Avoid flat moments. Build tension. Drop it perfectly.",
        src: "/images/energy-mapping.jpg",
        gradient: ImageGradient::Warm,
    },
    Card {
        title: "AI MC Voice Engine",
        desc: "Customizable AI voice prompts for announcements, event branding, corporate intros, hype moments. Professional delivery without hiring extra talent.",
        src: "/images/ai-mc-voice.jpg",
        gradient: ImageGradient::Glow,
    },
    Card {
        title: "Smart Auto-Ducking",
        desc: "When you speak, the music intelligently lowers. No messy volume juggling. Clean transitions every time.",
        src: "/images/auto-ducking.jpg",
        gradient: ImageGradient::Default,
    },
];

static BENEFITS: [&str; 5] = [
    "Better transitions",
    "Smarter song selection",
    "Cleaner announcements",
    "Higher energy retention",
    "Stronger crowd response",
];

static USE_CASES: [Card; 4] = [
    Card {
        title: "Clubs & Lounges",
        desc: "Maintain peak energy all night without overplaying your hits too early.",
        src: "/images/clubs.jpg",
        gradient: ImageGradient::Cool,
    },
    Card {
        title: "Weddings & Private Events",
        desc: "Use AI MC support for smooth introductions, cake cutting, speeches, and transitions.",
        src: "/images/weddings.jpg",
        gradient: ImageGradient::Warm,
    },
    Card {
        title: "Corporate Events",
        desc: "Branded AI voice intros, sponsor shoutouts, and structured event flow.",
        src: "/images/corporate.jpg",
        gradient: ImageGradient::Cool,
    },
    Card {
        title: "Livestream DJs",
        desc: "Engage your audience with structured energy pacing and intelligent mixing support.",
        src: "/images/livestream.jpg",
        gradient: ImageGradient::Warm,
    },
];

static STEPS: [&str; 5] = [
    "Import your music library",
    "Let AI DJ Pro analyze tracks",
    "Build your set or mix live",
    "Get real-time transition suggestions",
    "Control the crowd with confidence",
];

static PLANS: [Plan; 3] = [
    Plan {
        title: "Starter",
        desc: "Perfect for new DJs. Core AI analysis + mixing tools.",
        src: "/images/pricing-starter.jpg",
        featured: false,
    },
    Plan {
        title: "Pro",
        desc: "Full performance suite. AI MC voice + auto ducking + energy mapping.",
        src: "/images/pricing-pro.jpg",
        featured: true,
    },
    Plan {
        title: "Elite",
        desc: "Advanced customization. Branded voice packs + priority support + event templates.",
        src: "/images/pricing-elite.jpg",
        featured: false,
    },
];

static AUDIENCES: [&str; 4] = [
    "Club DJs",
    "Corporate event planners",
    "Wedding professionals",
    "Touring artists",
];

static TESTIMONIALS: [&str; 4] = [
    "/images/testimonial-1.jpg",
    "/images/testimonial-2.jpg",
    "/images/testimonial-3.jpg",
    "/images/testimonial-4.jpg",
];

static FOOTER_COLUMNS: [(&str, [&str; 4]); 4] = [
    ("About AI DJ Pro", ["Features", "Pricing", "How It Works", "Blog"]),
    ("Support", ["Help Center", "Contact Us", "Documentation", "System Status"]),
    ("Company", ["About Us", "Careers", "Press", "Partners"]),
    ("Follow Us", ["Twitter / X", "Instagram", "YouTube", "LinkedIn"]),
];

/// Section eyebrow label
#[component]
fn Eyebrow(text: &'static str, #[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <p class=format!("text-xs font-medium tracking-[0.2em] text-white/40 uppercase {}", class)>
            {text}
        </p>
    }
}

/// Everything below the hero, in page order
#[component]
pub fn ContentSections() -> impl IntoView {
    view! {
        <div>
            <WhatIs />
            <Features />
            <WhySwitch />
            <UseCases />
            <HowItWorks />
            <Performance />
            <Pricing />
            <SocialProof />
            <FinalCta />
            <Footer />
        </div>
    }
}

#[component]
fn WhatIs() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#050505]" delay=0.1>
            <div class="max-w-6xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal class="space-y-8">
                        <Eyebrow text="What is AI DJ Pro?" />
                        <h2 class="text-4xl md:text-6xl font-semibold tracking-tight leading-[1.1]">
                            "A Professional DJ Software With Real AI Built In"
                        </h2>
                        <p class="text-lg text-white/60 leading-relaxed max-w-lg">
                            "AI DJ Pro is an advanced performance platform designed to assist DJs during live sets. It combines machine learning with professional mixing tools."
                        </p>
                        <ul class="space-y-4">
                            {CAPABILITIES
                                .iter()
                                .enumerate()
                                .map(|(i, item)| view! {
                                    <RevealItem delay=stagger_delay(i, LIST_STAGGER) class="flex items-center gap-3 text-white/80">
                                        <span class="h-1.5 w-1.5 rounded-full bg-white/60"></span>
                                        {*item}
                                    </RevealItem>
                                })
                                .collect_view()}
                        </ul>
                        <p class="text-xl font-medium text-white/90 pt-4">
                            "It works with you, not instead of you."
                        </p>
                    </Reveal>
                    <Reveal variant=RevealVariant::ScaleIn>
                        <ImagePlaceholder
                            src="/images/product-interface.jpg"
                            aspect=ImageAspect::Video
                            label="Product interface"
                            gradient=ImageGradient::Glow
                            class="shadow-2xl shadow-black/50"
                            zoom=ZoomMode::Click
                        />
                    </Reveal>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#080808]">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-20">
                    <Eyebrow text="Core Features" class="mb-4" />
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! {
                            <Reveal delay=stagger_delay(i, LIST_STAGGER) margin=30.0 class="group">
                                <div class="overflow-hidden rounded-3xl border border-white/[0.08] bg-white/[0.02] transition-all duration-500 hover:border-white/20 hover:bg-white/[0.04]">
                                    <ImagePlaceholder
                                        src=feature.src
                                        aspect=ImageAspect::Video
                                        gradient=feature.gradient
                                        class="rounded-none border-0"
                                        zoom=ZoomMode::Hover
                                    />
                                    <div class="p-8">
                                        <h3 class="text-2xl font-semibold mb-4 group-hover:text-white transition-colors">
                                            {feature.title}
                                        </h3>
                                        <p class="text-white/60 leading-relaxed">{feature.desc}</p>
                                    </div>
                                </div>
                            </Reveal>
                        })
                        .collect_view()}
                    <Reveal class="md:col-span-2">
                        <div class="overflow-hidden rounded-3xl border border-white/[0.08] bg-white/[0.02] transition-all duration-500 hover:border-white/20">
                            <div class="grid md:grid-cols-2 gap-0">
                                <ImagePlaceholder
                                    src="/images/library-integration.jpg"
                                    class="rounded-none border-0 md:aspect-auto md:min-h-[280px]"
                                    zoom=ZoomMode::Hover
                                />
                                <div class="p-8 md:p-12 flex flex-col justify-center">
                                    <h3 class="text-2xl font-semibold mb-4">
                                        "YouTube & Library Integration"
                                    </h3>
                                    <p class="text-white/60 leading-relaxed">
                                        "Pull in tracks, manage your library, and expand your selection instantly."
                                    </p>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn WhySwitch() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#050505]">
            <div class="max-w-6xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal variant=RevealVariant::SlideLeft class="order-2 lg:order-1">
                        <ImagePlaceholder
                            src="/images/dj-action.jpg"
                            aspect=ImageAspect::Square
                            gradient=ImageGradient::Warm
                            label="DJ in action"
                            class="min-h-[400px]"
                            zoom=ZoomMode::Click
                        />
                    </Reveal>
                    <Reveal variant=RevealVariant::SlideRight class="order-1 lg:order-2 space-y-8">
                        <Eyebrow text="Why DJs Are Switching" />
                        <WordBlurHeading
                            text="Stop Guessing. Start Controlling the Room."
                            class="text-4xl md:text-5xl font-semibold tracking-tight leading-[1.15]"
                        />
                        <p class="text-lg text-white/60">
                            "Most DJ software stops at mixing. AI DJ Pro helps you control the experience."
                        </p>
                        <ul class="space-y-3">
                            {BENEFITS
                                .iter()
                                .enumerate()
                                .map(|(i, item)| view! {
                                    <RevealItem
                                        variant=RevealVariant::SlideRight
                                        delay=stagger_delay(i, TAG_STAGGER)
                                        class="flex items-center gap-3 text-white/80 text-lg"
                                    >
                                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4 invert opacity-50" />
                                        {*item}
                                    </RevealItem>
                                })
                                .collect_view()}
                        </ul>
                        <p class="text-xl font-medium pt-4">
                            "This isn't automation."
                            <br />
                            <span class="text-white/70">"It's performance amplification."</span>
                        </p>
                    </Reveal>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn UseCases() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#080808]">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-20">
                    <Eyebrow text="Use Cases" class="mb-4" />
                </Reveal>
                <div class="grid md:grid-cols-2 gap-6">
                    {USE_CASES
                        .iter()
                        .enumerate()
                        .map(|(i, item)| view! {
                            <Reveal delay=stagger_delay(i, 0.08) class="group cursor-default">
                                <div class="h-full overflow-hidden rounded-3xl border border-white/[0.08] bg-white/[0.02] p-8 transition-all duration-500 hover:border-white/20 hover:bg-white/[0.04]">
                                    <ImagePlaceholder
                                        src=item.src
                                        gradient=item.gradient
                                        label=item.title
                                        class="mb-6 rounded-2xl"
                                        zoom=ZoomMode::Click
                                    />
                                    <h3 class="text-xl font-semibold mb-3">{item.title}</h3>
                                    <p class="text-white/60 leading-relaxed">{item.desc}</p>
                                </div>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#050505]">
            <div class="max-w-4xl mx-auto">
                <Reveal class="text-center mb-20">
                    <Eyebrow text="How It Works" class="mb-4" />
                </Reveal>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <ol class="space-y-8">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| view! {
                                <RevealItem
                                    variant=RevealVariant::SlideLeft
                                    delay=stagger_delay(i, LIST_STAGGER)
                                    class="flex items-center gap-6"
                                >
                                    <span class="flex h-12 w-12 shrink-0 items-center justify-center rounded-full border border-white/20 bg-white/5 text-lg font-semibold">
                                        {i + 1}
                                    </span>
                                    <span class="text-lg text-white/80">{*step}</span>
                                </RevealItem>
                            })
                            .collect_view()}
                    </ol>
                    <Reveal variant=RevealVariant::ScaleIn>
                        <ImagePlaceholder
                            src="/images/workflow.jpg"
                            aspect=ImageAspect::Square
                            gradient=ImageGradient::Glow
                            label="Workflow"
                        />
                    </Reveal>
                </div>
                <Reveal variant=RevealVariant::Fade class="mt-16 text-center text-xl font-medium">
                    "Simple setup. Powerful results."
                </Reveal>
            </div>
        </RevealSection>
    }
}

#[component]
fn Performance() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#080808]">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <Eyebrow text="Built for Performance" class="mb-6" />
                    <p class="text-xl md:text-2xl text-white/70 max-w-2xl mx-auto leading-relaxed mb-8">
                        "Designed with a clean, professional interface. Dark performance mode. Low-latency audio engine. Stable under pressure."
                    </p>
                    <p class="text-lg font-medium">
                        "Because when you're live, nothing can freeze."
                    </p>
                </Reveal>
                <Reveal>
                    <ImagePlaceholder
                        src="/images/performance-interface.jpg"
                        aspect=ImageAspect::Wide
                        label="Performance interface"
                        class="max-w-5xl mx-auto"
                        zoom=ZoomMode::Hover
                    />
                </Reveal>
            </div>
        </RevealSection>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#050505]">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-20">
                    <Eyebrow text="Pricing" class="mb-4" />
                </Reveal>
                <div class="grid md:grid-cols-3 gap-6">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(i, plan)| {
                            let class = if plan.featured {
                                "relative overflow-hidden rounded-3xl border p-8 transition-all duration-500 hover:border-white/20 border-white/30 bg-white/[0.06] ring-1 ring-white/20"
                            } else {
                                "relative overflow-hidden rounded-3xl border p-8 transition-all duration-500 hover:border-white/20 border-white/[0.08] bg-white/[0.02] hover:bg-white/[0.04]"
                            };
                            view! {
                                <Reveal delay=stagger_delay(i, LIST_STAGGER) class=class>
                                    {plan.featured.then(|| view! {
                                        <div class="absolute top-0 right-0 px-4 py-1.5 bg-white/10 rounded-bl-xl text-xs font-medium">
                                            "Popular"
                                        </div>
                                    })}
                                    <h3 class="text-2xl font-semibold mb-3">{plan.title}</h3>
                                    <p class="text-white/60 mb-8">{plan.desc}</p>
                                    <ImagePlaceholder
                                        src=plan.src
                                        aspect=ImageAspect::Wide
                                        class="h-24 mb-6 rounded-2xl"
                                    />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal variant=RevealVariant::Fade class="text-center mt-10">
                    <button class="px-8 py-4 rounded-full border border-white/30 font-medium hover:bg-white/10 transition-all duration-300 hover:scale-[1.02]">
                        "Compare Plans"
                    </button>
                </Reveal>
            </div>
        </RevealSection>
    }
}

#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <RevealSection class="py-32 px-6 md:px-12 border-t border-white/[0.06] bg-[#080808]">
            <div class="max-w-4xl mx-auto">
                <Reveal class="text-center mb-12">
                    <Eyebrow text="Social Proof" class="mb-4" />
                    <h2 class="text-3xl md:text-4xl font-semibold mb-8">
                        "Trusted by DJs Who Perform for Real Audiences"
                    </h2>
                </Reveal>
                <ul class="flex flex-wrap justify-center gap-4">
                    {AUDIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, tag)| view! {
                            <RevealItem
                                variant=RevealVariant::ScaleIn
                                delay=stagger_delay(i, TAG_STAGGER)
                                class="px-6 py-3 rounded-full bg-white/5 border border-white/10 text-white/60 text-sm font-medium hover:border-white/20 hover:text-white/80 transition-colors cursor-default"
                            >
                                {*tag}
                            </RevealItem>
                        })
                        .collect_view()}
                </ul>
                <Reveal variant=RevealVariant::Fade class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-4">
                    {TESTIMONIALS
                        .iter()
                        .map(|src| view! {
                            <ImagePlaceholder
                                src=*src
                                aspect=ImageAspect::Square
                                class="rounded-2xl"
                                zoom=ZoomMode::Click
                            />
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </RevealSection>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <RevealSection class="py-40 px-6 md:px-12 border-t border-white/[0.06] bg-[#050505]">
            <Reveal class="max-w-3xl mx-auto text-center space-y-8">
                <h2 class="text-4xl md:text-6xl font-semibold tracking-tight leading-[1.1]">
                    "Ready to DJ Smarter?"
                </h2>
                <p class="text-xl text-white/60">
                    "AI DJ Pro is not about replacing skill."
                    <br />
                    "It enhances it."
                </p>
                <p class="text-xl font-medium">
                    "Take control of your sound."
                    <br />
                    "Own the room."
                </p>
                <Reveal delay=0.2 class="flex flex-col sm:flex-row gap-4 justify-center pt-8">
                    <button class="px-12 py-4 bg-white text-black font-semibold rounded-full text-lg hover:bg-gray-200 transition-all hover:scale-[1.02] active:scale-[0.98]">
                        "Download Now"
                    </button>
                    <button class="px-12 py-4 border border-white/50 rounded-full font-medium hover:bg-white/10 transition-all hover:scale-[1.02] active:scale-[0.98]">
                        "Book a Demo"
                    </button>
                </Reveal>
            </Reveal>
        </RevealSection>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-20 px-6 md:px-12 border-t border-white/[0.06] bg-[#050505]">
            <div class="max-w-6xl mx-auto">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-12 mb-16">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|(heading, links)| view! {
                            <div>
                                <h4 class="text-sm font-semibold tracking-wider text-white/60 uppercase mb-4">
                                    {*heading}
                                </h4>
                                <ul class="space-y-3">
                                    {links
                                        .iter()
                                        .map(|link| view! {
                                            <li>
                                                <a href="#" class="text-white/70 hover:text-white transition-colors">
                                                    {*link}
                                                </a>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="pt-8 border-t border-white/[0.06] flex flex-col sm:flex-row justify-between items-center gap-4">
                    <h3 class="text-xl font-light text-white/40">"AI DJ PRO"</h3>
                    <p class="text-sm text-white/30">"© 2024. All systems operational."</p>
                </div>
            </div>
        </footer>
    }
}
