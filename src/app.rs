mod avatar;
mod header;
mod homepage;
mod icon;
mod pixel_card;
mod project_card;
mod projects;
mod social_deck;

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

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
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Press+Start+2P&family=VT323&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/pixel-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-[#1a1b26] text-[#c0caf5] font-pixel">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Colin - {title}") />

        <Router>
            <div class="min-h-screen p-4 md:p-8 lg:p-12 max-w-7xl mx-auto">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <footer class="border-t-4 border-[#414868] pt-8 pb-8 text-center text-[#565f89]"></footer>
            </div>
        </Router>
    }
}
