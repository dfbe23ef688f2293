mod about;
mod contact;
mod footer;
mod hero;
mod homepage;
mod icon;
mod nav;
mod projects;
mod reveal;
mod scroll;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;
use crate::motion::ambient_stylesheet;
use homepage::HomePage;

// Readable final state for clients that never run the WASM bundle.
const NOSCRIPT_CSS: &str = ".motion { opacity: 1 !important; transform: none !important; } \
     .motion-bar { width: var(--level) !important; }";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <style id="ambient-loops" inner_html=ambient_stylesheet()></style>
                <noscript>
                    <style inner_html=NOSCRIPT_CSS></style>
                </noscript>
                <MetaTags />
            </head>
            <body class="font-inter">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = portfolio().owner.as_str();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=portfolio().tagline.as_str() />

        // single mount point, everything else is in-page scrolling
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-950 text-white">
            <h1 class="text-3xl font-bold">"Page not found."</h1>
            <a href="/" class="text-blue-400 hover:text-blue-300">
                "Back to the portfolio"
            </a>
        </main>
    }
}
