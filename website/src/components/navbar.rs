use eddie_core::content::HERO;
use eddie_core::NAV_LINKS;
use leptos::prelude::*;

use crate::scroll::scroll_to_section;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-black/80 backdrop-blur-md border-b border-gray-800">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <button
                    class="flex items-center space-x-2 group"
                    on:click=|_| {
                        if let Some(window) = web_sys::window() {
                            window.scroll_to_with_x_and_y(0.0, 0.0);
                        }
                    }
                >
                    <span class="w-2 h-2 bg-green-500 rounded-full group-hover:animate-pulse"></span>
                    <span class="font-bold text-white text-lg tracking-tight">{HERO.name}</span>
                </button>

                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS.iter().map(|link| {
                        let id = link.anchor.id();
                        let class = if link.highlighted {
                            "text-xs tracking-widest uppercase transition-colors text-green-500 hover:text-green-300"
                        } else {
                            "text-xs tracking-widest uppercase transition-colors text-gray-400 hover:text-white"
                        };
                        view! {
                            <button class=class on:click=move |_| scroll_to_section(id)>
                                {link.label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
