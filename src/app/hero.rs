use leptos::prelude::*;

use super::icon::Glyph;
use super::reveal::{use_mounted, Animated};
use super::scroll::DocumentScroll;
use crate::content::{portfolio, Icon, SectionId};
use crate::motion::{Motion, Transition, HERO_DURATION, PARTICLE_DRIFT, REVEAL_DISTANCE, SCROLL_CUE};
use crate::nav::scroll_to;

const HERO_RISE: f64 = 30.0;

fn rise(delay: f64) -> Motion {
    Motion::fade_up(HERO_RISE).with_transition(Transition::new(HERO_DURATION).delay(delay))
}

#[component]
fn AnimatedParticles() -> impl IntoView {
    portfolio()
        .particles
        .iter()
        .map(|p| {
            let style = format!(
                "top: {}; left: {}; width: {}px; height: {}px; {}",
                p.top,
                p.left,
                p.size,
                p.size,
                PARTICLE_DRIFT.with_delay(p.delay).style()
            );
            view! { <div class="particle" style=style></div> }
        })
        .collect_view()
}

/// Above-the-fold banner. Animates on mount rather than on scroll.
#[component]
pub fn HeroSection() -> impl IntoView {
    let p = portfolio();
    let mounted = use_mounted();
    let container = Motion::fade_up(REVEAL_DISTANCE).with_transition(Transition::new(HERO_DURATION));

    view! {
        <section
            id=SectionId::Home.as_str()
            class="min-h-screen flex items-center justify-center relative gradient-bg overflow-hidden"
        >
            <AnimatedParticles />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center z-10">
                <Animated motion=container trigger=mounted>
                    <Animated motion=rise(0.2) trigger=mounted>
                        <h1 class="text-5xl md:text-7xl font-bold mb-6 text-white">
                            "Hi, I'm " <span class="text-blue-400">{p.owner.as_str()}</span>
                        </h1>
                    </Animated>
                    <Animated motion=rise(0.4) trigger=mounted>
                        <p class="text-xl md:text-2xl text-slate-300 mb-8 max-w-3xl mx-auto">
                            {p.tagline.as_str()}
                        </p>
                    </Animated>
                    <Animated
                        motion=rise(0.6)
                        trigger=mounted
                        class="flex flex-col sm:flex-row gap-4 justify-center"
                    >
                        <button
                            class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-4 text-lg font-semibold rounded-md"
                            on:click=move |_| scroll_to(&DocumentScroll, SectionId::Projects)
                        >
                            "View My Work"
                        </button>
                        {p
                            .cv_href
                            .as_deref()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        download=""
                                        class="border border-blue-400 text-blue-400 hover:bg-blue-400 hover:text-slate-900 px-8 py-4 text-lg font-semibold rounded-md"
                                    >
                                        "Download CV"
                                    </a>
                                }
                            })}
                    </Animated>
                </Animated>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 text-slate-400">
                <div style=SCROLL_CUE.style()>
                    <Glyph icon=Icon::ChevronDown class="text-3xl" />
                </div>
            </div>
        </section>
    }
}
