use eddie_core::{LoadRating, LoadTier};
use leptos::prelude::*;

fn tier_class(tier: LoadTier) -> &'static str {
    match tier {
        LoadTier::High => "text-red-500",
        LoadTier::Medium => "text-white",
        LoadTier::Low => "text-green-500",
    }
}

/// Five-cell load indicator, e.g. `[███░░]`
#[component]
pub fn LoadBar(load: LoadRating) -> impl IntoView {
    let bar = load.bar();
    let label = format!("Load {load}");

    view! {
        <span class=format!("font-mono text-xs {}", tier_class(bar.tier)) title=label>
            {bar.to_string()}
        </span>
    }
}
