use leptos::{either::Either, html, prelude::*};

use super::icon::Glyph;
use super::reveal::{use_reveal, Animated};
use crate::content::{portfolio, Icon, Project, SectionId};
use crate::motion::{Motion, REVEAL_DISTANCE};

const FOOTER_DELAY: f64 = 0.6;

fn project_link(href: Option<&'static str>, icon: Icon, text: &'static str, class: &'static str) -> impl IntoView {
    match href {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=format!("flex items-center {class}")
            >
                <Glyph icon class="mr-2" />
                {text}
            </a>
        }),
        None => Either::Right(view! {
            <span class="flex items-center text-slate-600 cursor-not-allowed" aria-disabled="true">
                <Glyph icon class="mr-2" />
                {text}
            </span>
        }),
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="glass-effect rounded-2xl overflow-hidden card-hover border border-slate-700">
            <div class=format!(
                "h-48 bg-gradient-to-br {} flex items-center justify-center",
                project.gradient,
            )>
                <Glyph icon=project.icon class="text-6xl text-white" />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2 text-white">{project.title.as_str()}</h3>
                <p class="text-slate-300 mb-4">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full px-3 py-1 text-xs bg-blue-500/20 text-blue-400">
                                    {tag.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {project_link(
                        project.demo_url.as_deref(),
                        Icon::ExternalLink,
                        "Live Demo",
                        "text-blue-400 hover:text-blue-300",
                    )}
                    {project_link(
                        project.source_url.as_deref(),
                        Icon::Github,
                        "Code",
                        "text-slate-400 hover:text-slate-300",
                    )}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let p = portfolio();
    let copy = p.section(SectionId::Projects);
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_reveal(section_ref);
    let all_projects = p.social(Icon::Github).map(|s| s.href.as_str());

    view! {
        <section id=SectionId::Projects.as_str() node_ref=section_ref class="py-20 bg-slate-900">
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
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Animated
                                    motion=Motion::fade_up(REVEAL_DISTANCE).staggered(index)
                                    trigger=entered
                                >
                                    <ProjectCard project />
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
                {all_projects
                    .map(|href| {
                        view! {
                            <Animated
                                motion=Motion::fade_up(30.0).delay(FOOTER_DELAY)
                                trigger=entered
                                class="text-center mt-12"
                            >
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block border border-blue-400 text-blue-400 hover:bg-blue-400 hover:text-slate-900 px-8 py-3 rounded-md"
                                >
                                    "View All Projects"
                                </a>
                            </Animated>
                        }
                    })}
            </div>
        </section>
    }
}
