use std::num::NonZeroUsize;

use leptos::{either::Either, prelude::*};

use super::project_card::{ProjectCard, CARD_HEIGHT_CLASS};
use crate::pagination::Paginator;
use crate::portfolio::PROJECTS;

pub const PROJECTS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(4).unwrap();

fn page_button_class(disabled: bool) -> &'static str {
    if disabled {
        "px-4 py-2 border-4 border-black transition-all bg-[#24283b] text-[#414868] cursor-not-allowed opacity-50"
    } else {
        "px-4 py-2 border-4 border-black transition-all bg-[#73daca] text-[#1a1b26] hover:bg-[#9ece6a] pixel-shadow hover:translate-y-1 hover:shadow-none"
    }
}

/// The paginated project grid with its prev/next controls.
#[component]
pub fn ProjectLogs() -> impl IntoView {
    let pager = RwSignal::new(Paginator::new(PROJECTS.len(), PROJECTS_PER_PAGE));
    let at_first = move || !pager.with(Paginator::has_prev);
    let at_last = move || !pager.with(Paginator::has_next);

    let on_prev = move |_| {
        pager.update(|p| {
            if p.prev() {
                log::debug!("project page {}/{}", p.page(), p.total_pages());
            }
        })
    };
    let on_next = move |_| {
        pager.update(|p| {
            if p.next() {
                log::debug!("project page {}/{}", p.page(), p.total_pages());
            }
        })
    };

    view! {
        <section class="mb-20">
            <div class="flex items-center gap-4 mb-8">
                <div class="h-2 w-12 bg-[#7aa2f7]"></div>
                <h2 class="text-2xl font-display text-white">"PROJECT_LOGS"</h2>
                <div class="h-2 flex-grow bg-[#414868]"></div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-2 gap-8">
                {move || {
                    pager
                        .with(|p| p.slots(PROJECTS))
                        .into_iter()
                        .enumerate()
                        .map(|(index, slot)| match slot {
                            Some(project) => Either::Left(view! { <ProjectCard project index /> }),
                            None => {
                                Either::Right(
                                    view! {
                                        <div
                                            class=format!(
                                                "{CARD_HEIGHT_CLASS} border-4 border-transparent p-6 invisible",
                                            )
                                            aria-hidden="true"
                                        ></div>
                                    },
                                )
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="flex justify-center items-center gap-8 mt-8 font-display text-sm">
                <button on:click=on_prev disabled=at_first class=move || page_button_class(at_first())>
                    "< PREV"
                </button>
                <span class="text-[#7aa2f7] bg-[#24283b] px-4 py-2 border-2 border-[#414868]">
                    "PAGE "
                    {move || pager.with(Paginator::page)}
                    "/"
                    {move || pager.with(Paginator::total_pages)}
                </span>
                <button on:click=on_next disabled=at_last class=move || page_button_class(at_last())>
                    "NEXT >"
                </button>
            </div>
        </section>
    }
}
