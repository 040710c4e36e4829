use leptos::prelude::*;

use super::icon::DeckIcon;
use crate::deck::{CardTransform, DeckHover};
use crate::portfolio::{SocialLink, SOCIALS};

#[component]
pub fn SocialDeck() -> impl IntoView {
    let hover = RwSignal::new(DeckHover::default());

    view! {
        <div
            class="relative h-64 w-full max-w-xs mx-auto mt-12 group"
            on:mouseenter=move |_| hover.update(DeckHover::enter_deck)
            on:mouseleave=move |_| hover.update(DeckHover::leave_deck)
        >
            {SOCIALS
                .iter()
                .enumerate()
                .map(|(index, social)| view! { <DeckCard social index hover /> })
                .collect_view()}
            <div class="absolute -bottom-10 w-full text-center text-gray-500 pointer-events-none font-display text-xs">
                {move || {
                    if hover.with(DeckHover::is_inside) { "SELECT A CARD" } else { "HOVER TO REVEAL" }
                }}
            </div>
        </div>
    }
}

#[component]
fn DeckCard(
    social: &'static SocialLink,
    index: usize,
    hover: RwSignal<DeckHover>,
) -> impl IntoView {
    let fanned = move || hover.with(DeckHover::is_inside);
    let style = move || hover.with(|h| CardTransform::for_card(index, h).to_style());

    view! {
        <a
            href=social.url
            target="_blank"
            rel="noopener noreferrer"
            aria-label=social.name
            on:mouseenter=move |_| hover.update(|h| h.enter_card(index))
            on:mouseleave=move |_| hover.update(|h| h.leave_card(index))
            class=format!(
                "absolute top-0 left-0 w-full h-48 border-4 border-black flex flex-col items-center justify-center transition-all duration-300 ease-out shadow-xl {} {}",
                social.colors.background,
                social.colors.foreground,
            )
            style=style
        >
            <div class="mb-2 p-2 border-2 border-black bg-white/20 rounded-none backdrop-blur-sm">
                <DeckIcon icon=social.icon />
            </div>
            <h3 class="text-xl font-bold font-display">{social.name}</h3>
            <p
                class="text-sm mt-2 transition-opacity duration-300 font-sans font-bold"
                class:opacity-100=fanned
                class:opacity-0=move || !fanned()
            >
                {move || if fanned() { "CLICK TO OPEN" } else { social.description }}
            </p>
            <div class="absolute top-2 left-2 w-2 h-2 bg-black/20"></div>
            <div class="absolute bottom-2 right-2 w-2 h-2 bg-black/20"></div>
        </a>
    }
}
