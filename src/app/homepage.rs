use leptos::prelude::*;
use leptos_meta::Title;

use super::avatar::Avatar;
use super::projects::ProjectLogs;
use super::social_deck::SocialDeck;
use crate::portfolio::{Institution, EDUCATION};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <section class="flex flex-col md:flex-row items-center md:items-start justify-between gap-12 mb-20">
            <div class="w-full md:w-1/2 flex flex-col items-center md:items-start text-center md:text-left">
                <Avatar />
                <div class="mt-8 space-y-6">
                    <h1 class="text-4xl md:text-5xl leading-tight font-display text-white">
                        "Hi, I'm " <span class="text-[#7aa2f7]">"Colin"</span>
                    </h1>
                    <h2 class="text-2xl md:text-3xl text-[#9ece6a]">"Quantitative Developer"</h2>
                    <p class="text-xl text-[#a9b1d6] max-w-lg leading-relaxed border-l-4 border-[#414868] pl-4">
                        "Majoring in "
                        <span class="text-white underline decoration-[#bb9af7]">"Statistics"</span>
                        ". Build data-driven solutions and explore markets through algorithms."
                    </p>
                    <div class="flex gap-6 pt-4 justify-center md:justify-start">
                        {EDUCATION
                            .iter()
                            .map(|school| view! { <SchoolBadge school /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="w-full md:w-1/2 flex justify-center items-center min-h-[300px]">
                <SocialDeck />
            </div>
        </section>
        <ScrollHint />
        <ProjectLogs />
    }
}

#[component]
fn SchoolBadge(school: &'static Institution) -> impl IntoView {
    view! {
        <a
            href=school.url
            target="_blank"
            rel="noopener noreferrer"
            title=school.name
            class="group relative block w-16 h-16 bg-transparent p-1 border-2 border-black pixel-shadow hover:translate-y-1 hover:shadow-none transition-all duration-200"
        >
            <img src=school.logo alt=school.short_name class="w-full h-full object-contain" />
        </a>
    }
}

#[component]
fn ScrollHint() -> impl IntoView {
    view! {
        <div class="flex justify-center mb-12 animate-bounce">
            <div class="text-center">
                <p class="mb-2 text-[#565f89] text-xs">"SCROLL FOR QUESTS"</p>
                <div class="w-6 h-8 border-4 border-[#565f89] flex justify-center p-1">
                    <div class="w-full h-2 bg-[#7aa2f7]"></div>
                </div>
            </div>
        </div>
    }
}
