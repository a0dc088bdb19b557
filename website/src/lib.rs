pub mod components;
pub mod pages;
pub mod scroll;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-gray-200 selection:bg-green-500/30 font-mono">
            <Navbar />
            <main class="pt-16">
                <Home />
            </main>
            <Footer />
        </div>
    }
}
