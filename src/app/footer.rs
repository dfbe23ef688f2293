use leptos::prelude::*;

use crate::content::{copyright_line, portfolio};

#[component]
pub fn Footer() -> impl IntoView {
    let credit = copyright_line(env!("BUILD_TIME"), &portfolio().footer);
    view! {
        <footer class="bg-slate-900 border-t border-slate-800 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-slate-400">{credit}</p>
            </div>
        </footer>
    }
}
