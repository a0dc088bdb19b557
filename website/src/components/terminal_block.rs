use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum Tone {
    #[default]
    Success,
    Warning,
    Neutral,
}

impl Tone {
    fn border(self) -> &'static str {
        match self {
            Tone::Success => "border-l-2 border-green-500 bg-green-950/10 p-6",
            Tone::Warning => "border-l-2 border-red-500 bg-red-950/10 p-6",
            Tone::Neutral => "border-l-2 border-gray-600 bg-gray-900/30 p-6",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Tone::Success => "text-green-500 shrink-0",
            Tone::Warning => "text-red-500 shrink-0",
            Tone::Neutral => "text-gray-500 shrink-0",
        }
    }
}

/// Bordered list styled like terminal output
#[component]
pub fn TerminalBlock(
    items: &'static [&'static str],
    #[prop(optional, into)] title: Option<&'static str>,
    #[prop(optional)] tone: Tone,
) -> impl IntoView {
    view! {
        <div class=tone.border()>
            {title.map(|title| view! {
                <h3 class="text-xs uppercase tracking-widest text-gray-500 mb-4">{title}</h3>
            })}
            <ul class="space-y-2">
                {items.iter().map(|item| view! {
                    <li class="flex space-x-3">
                        <span class=tone.marker()>">"</span>
                        <span class="text-gray-300">{*item}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
