use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use super::icon::SymbolIcon;
use super::pixel_card::PixelCard;
use crate::portfolio::{IconRef, Project};
use crate::reveal::{reveal_delay_ms, RevealLatch, REVEAL_THRESHOLD};

/// Fixed card height; grid placeholders use the same value.
pub const CARD_HEIGHT_CLASS: &str = "h-[290px]";

/// A project card that fades in the first time it scrolls into view.
///
/// `index` is the card's slot on the current page and staggers the reveal.
#[component]
pub fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);
    let latch = StoredValue::new(RevealLatch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        card_ref,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let fired = entries.iter().any(|entry| {
                latch
                    .try_update_value(|l| l.observe(entry.is_intersecting(), entry.intersection_ratio()))
                    .unwrap_or(false)
            });
            if fired {
                log::debug!("project {} revealed (slot {index})", project.id);
                set_visible.set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    on_cleanup(move || {
        latch.try_update_value(|l| l.release());
        stop();
    });

    view! {
        <div
            node_ref=card_ref
            class=move || {
                if visible.get() {
                    "transform transition-all duration-700 ease-out opacity-100 translate-y-0"
                } else {
                    "transform transition-all duration-700 ease-out opacity-0 translate-y-20"
                }
            }
            style=format!("transition-delay: {}ms;", reveal_delay_ms(index))
        >
            <PixelCard class=format!(
                "{CARD_HEIGHT_CLASS} flex flex-col justify-between hover:bg-[#292e42] group pixel-shadow-hover",
            )>
                <div>
                    <div class="flex justify-between items-start mb-3">
                        <h3 class="text-[#7aa2f7] text-xl font-bold leading-tight font-display mb-1">
                            {project.title}
                        </h3>
                        <span class="text-[#565f89] text-base font-bold">{project.id_label()}</span>
                    </div>
                    <p class="text-[#a9b1d6] text-xl mb-4 leading-relaxed line-clamp-3 font-medium">
                        {project.description}
                    </p>
                    <div class="flex flex-wrap gap-2 mb-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-2 py-1 bg-[#414868] text-[#7dcfff] text-lg border-2 border-[#1a1b26]">
                                        "#"
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center justify-center w-full py-2 bg-[#73daca] text-[#1a1b26] font-bold border-4 border-black hover:bg-[#9ece6a] transition-colors font-display text-sm"
                >
                    <span class="mr-2">
                        <SymbolIcon icon=IconRef::Github size=16 />
                    </span>
                    "VIEW REPO"
                </a>
            </PixelCard>
        </div>
    }
}
