use leptos::prelude::*;

/// Bordered, hard-shadowed box every card on the page sits in.
#[component]
pub fn PixelCard(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "relative bg-[#24283b] border-4 border-black p-6 pixel-shadow transition-all duration-200 {class}",
        )>{children()}</div>
    }
}
