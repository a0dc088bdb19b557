//! Inline SVG icons (Lucide outlines)

use eddie_core::content::IconKind;
use leptos::prelude::*;

#[component]
fn Svg(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn Cpu(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Svg class=class>
            <rect x="4" y="4" width="16" height="16" rx="2" />
            <rect x="9" y="9" width="6" height="6" />
            <path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
        </Svg>
    }
}

#[component]
pub fn Terminal(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Svg class=class>
            <polyline points="4 17 10 11 4 5" />
            <line x1="12" x2="20" y1="19" y2="19" />
        </Svg>
    }
}

#[component]
pub fn CheckCircle(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Svg class=class>
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <polyline points="22 4 12 14.01 9 11.01" />
        </Svg>
    }
}

#[component]
pub fn ArrowRight(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Svg class=class>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </Svg>
    }
}

#[component]
pub fn AlertTriangle(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Svg class=class>
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
            <path d="M12 9v4" />
            <path d="M12 17h.01" />
        </Svg>
    }
}

/// Icon for a deliverable card
pub fn icon_for(kind: IconKind, class: &'static str) -> AnyView {
    match kind {
        IconKind::Cpu => view! { <Cpu class=class /> }.into_any(),
        IconKind::Terminal => view! { <Terminal class=class /> }.into_any(),
        IconKind::CheckCircle => view! { <CheckCircle class=class /> }.into_any(),
        IconKind::ArrowRight => view! { <ArrowRight class=class /> }.into_any(),
    }
}
