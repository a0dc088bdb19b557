use eddie_core::content::FOOTER;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-900 bg-black py-12 mt-auto">
            <p class="max-w-6xl mx-auto px-6 text-center text-gray-600 text-xs tracking-widest">
                {FOOTER}
            </p>
        </footer>
    }
}
