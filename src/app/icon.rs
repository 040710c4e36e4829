use leptos::{either::Either, prelude::*};

use crate::portfolio::{IconRef, SocialIcon};

/// Inline SVG for the symbolic icons (lucide outlines).
#[component]
pub fn SymbolIcon(icon: IconRef, #[prop(default = 20)] size: u32) -> impl IntoView {
    let paths = match icon {
        IconRef::BookOpen => Either::Left(view! {
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
        }),
        IconRef::Github => Either::Right(view! {
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        }),
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

#[component]
pub fn DeckIcon(icon: SocialIcon) -> impl IntoView {
    match icon {
        SocialIcon::Glyph(text) => {
            Either::Left(view! { <span class="font-bold text-lg font-mono">{text}</span> })
        }
        SocialIcon::Symbol(icon) => Either::Right(view! { <SymbolIcon icon /> }),
    }
}
