use leptos::{html, prelude::*};

use super::icon::Glyph;
use super::reveal::{use_reveal, Animated};
use crate::content::{portfolio, SectionId, SkillItem};
use crate::motion::{Motion, REVEAL_DISTANCE};

#[component]
fn SkillBar(skill: &'static SkillItem, index: usize, entered: ReadSignal<bool>) -> impl IntoView {
    let level = skill.level.percent();
    // bars in a card share the card's stagger slot
    let bar = Motion::bar(level).staggered(index);

    view! {
        <div class="flex items-center justify-between">
            <span class="text-slate-300">{skill.name.as_str()}</span>
            <div
                class="w-16 bg-slate-700 rounded-full h-2"
                role="progressbar"
                aria-label=skill.name.as_str()
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=level.to_string()
            >
                <div
                    class="motion-bar bg-blue-400 h-2 rounded-full"
                    style=move || format!("--level: {level}%; {}", bar.style(entered.get()))
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let p = portfolio();
    let copy = p.section(SectionId::Skills);
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_reveal(section_ref);

    view! {
        <section id=SectionId::Skills.as_str() node_ref=section_ref class="py-20 bg-slate-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Animated
                    motion=Motion::fade_up(REVEAL_DISTANCE)
                    trigger=entered
                    class="text-center mb-16"
                >
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 text-white">{copy.title}</h2>
                    <p class="text-lg text-slate-300 max-w-2xl mx-auto">{copy.subtitle}</p>
                </Animated>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {p
                        .skill_categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <Animated
                                    motion=Motion::fade_up(REVEAL_DISTANCE).staggered(index)
                                    trigger=entered
                                >
                                    <div class="glass-effect rounded-2xl card-hover border border-slate-700 p-6">
                                        <div class="text-center mb-6">
                                            <div class=format!(
                                                "w-16 h-16 bg-gradient-to-br {} rounded-2xl flex items-center justify-center mx-auto mb-4",
                                                category.gradient,
                                            )>
                                                <Glyph icon=category.icon class="text-3xl text-white" />
                                            </div>
                                            <h3 class="text-xl font-semibold mb-2 text-white">
                                                {category.title.as_str()}
                                            </h3>
                                        </div>
                                        <div class="space-y-3">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| view! { <SkillBar skill index entered /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
