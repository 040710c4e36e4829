use leptos::prelude::*;

use crate::portfolio::PROFILE_PIC;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="relative w-48 h-48 mx-auto md:mx-0 mb-8 md:mb-0">
            <div class="w-full h-full rounded-full border-4 border-black pixel-shadow overflow-hidden bg-[#7aa2f7]">
                <img
                    src=PROFILE_PIC
                    alt="Colin's Avatar"
                    class="w-full h-full object-cover image-pixelated bg-[#1a1b26]"
                />
            </div>
        </div>
    }
}
