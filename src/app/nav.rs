use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::icon::Glyph;
use super::reveal::use_mounted;
use super::scroll::DocumentScroll;
use crate::content::{portfolio, Icon, SectionId};
use crate::motion::{Motion, Pose, Transition, REVEAL_DURATION};
use crate::nav::{nav_is_solid, scroll_to_section, NavMenu};

const NAV_BASE: &str = "motion fixed top-0 left-0 right-0 z-50 transition-colors duration-300";

#[component]
pub fn Navigation() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let mounted = use_mounted();
    let (_, scroll_y) = use_window_scroll();
    let slide_in = Motion::new(
        Pose::visible().y(-100.0),
        Pose::visible(),
        Transition::new(REVEAL_DURATION),
    );

    let go = move |id: SectionId| menu.update(|m| scroll_to_section(&DocumentScroll, id, m));

    view! {
        <nav
            class=move || {
                if nav_is_solid(scroll_y.get()) {
                    format!("{NAV_BASE} bg-slate-950/90 backdrop-blur shadow-lg")
                } else {
                    format!("{NAV_BASE} glass-effect")
                }
            }
            style=move || slide_in.style(mounted.get())
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <button
                        class="text-xl font-bold text-blue-400 transition-transform duration-200 hover:scale-110"
                        on:click=move |_| go(SectionId::Home)
                    >
                        {portfolio().brand.as_str()}
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        class="hover:text-blue-400 transition-all duration-300 hover:-translate-y-0.5"
                                        on:click=move |_| go(id)
                                    >
                                        {id.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-white p-2 rounded-md hover:bg-slate-800"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu.with(|m| m.is_open().to_string())
                        on:click=move |_| menu.update(NavMenu::toggle)
                    >
                        <Glyph icon=Icon::Menu class="text-xl" />
                    </button>
                </div>
                {move || {
                    menu.get()
                        .is_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden flex flex-col pb-4 space-y-2">
                                    {SectionId::ALL
                                        .into_iter()
                                        .map(|id| {
                                            view! {
                                                <button
                                                    class="text-left px-2 py-2 rounded-md hover:bg-slate-800 hover:text-blue-400"
                                                    on:click=move |_| go(id)
                                                >
                                                    {id.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}
