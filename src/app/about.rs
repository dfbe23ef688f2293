use leptos::{html, prelude::*};

use super::icon::Glyph;
use super::reveal::{use_reveal, Animated};
use crate::content::{portfolio, Icon, SectionId};
use crate::motion::{Motion, ACCENT_FLOAT, ACCENT_PULSE, REVEAL_DISTANCE, STAGGER_STEP};

#[component]
pub fn AboutSection() -> impl IntoView {
    let p = portfolio();
    let copy = p.section(SectionId::About);
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_reveal(section_ref);

    view! {
        <section id=SectionId::About.as_str() node_ref=section_ref class="py-20 bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Animated motion=Motion::slide_in(-REVEAL_DISTANCE) trigger=entered>
                        <h2 class="text-4xl md:text-5xl font-bold mb-6 text-white">{copy.title}</h2>
                        {p
                            .about
                            .iter()
                            .map(|para| {
                                view! { <p class="text-lg text-slate-300 mb-6">{para.as_str()}</p> }
                            })
                            .collect_view()}
                        <div class="flex flex-wrap gap-4">
                            {p
                                .badges
                                .iter()
                                .map(|b| {
                                    view! {
                                        <span class=format!(
                                            "flex items-center gap-2 rounded-full px-4 py-2 text-sm {}",
                                            b.class,
                                        )>
                                            <Glyph icon=b.icon class="text-blue-400" />
                                            {b.label.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Animated>
                    <Animated
                        motion=Motion::slide_in(REVEAL_DISTANCE).delay(STAGGER_STEP)
                        trigger=entered
                    >
                        <div class="relative">
                            <div class="w-80 h-80 mx-auto rounded-2xl bg-gradient-to-br from-blue-400 to-purple-600 p-1">
                                <div class="w-full h-full rounded-2xl bg-slate-800 flex items-center justify-center">
                                    <Glyph icon=Icon::User class="text-8xl text-slate-600" />
                                </div>
                            </div>
                            <div
                                class="absolute -top-4 -right-4 w-20 h-20 bg-blue-500 rounded-full"
                                style=ACCENT_PULSE.style()
                            ></div>
                            <div
                                class="absolute -bottom-4 -left-4 w-16 h-16 bg-purple-500 rounded-full"
                                style=ACCENT_FLOAT.style()
                            ></div>
                        </div>
                    </Animated>
                </div>
            </div>
        </section>
    }
}
