use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <nav class="flex justify-between items-center mb-8 border-b-4 border-[#414868] pb-4">
                <a href="/" class="text-[#7aa2f7] text-xl font-display">
                    "COLIN.GITHUB"
                </a>
                <div class="flex gap-4 text-sm md:text-lg"></div>
            </nav>
        </header>
    }
}
