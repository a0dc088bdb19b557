use eddie_core::content::*;
use eddie_core::{Anchor, Catalog, FieldName, PageSection};
use leptos::prelude::*;

use crate::components::contact_form::{field_id, ContactFormPanel};
use crate::components::icons::{icon_for, AlertTriangle};
use crate::components::load_bar::LoadBar;
use crate::components::section::Section;
use crate::components::terminal_block::{TerminalBlock, Tone};
use crate::scroll::{focus_element, scroll_to_section};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero />
        <WhatIDo />
        <HowIWork />
        <SystemsIndex catalog=Catalog::builtin() />
        <WhatIDontDo />
        <WhoThisIsFor />
        <Deliverable />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let on_cta = |_: leptos::ev::MouseEvent| {
        scroll_to_section(Anchor::Contact.id());
        focus_element(field_id(FieldName::Intent));
    };

    view! {
        <section class="min-h-[80vh] flex flex-col justify-center px-6">
            <div class="max-w-6xl mx-auto w-full">
                <h1 class="text-6xl md:text-8xl font-black text-white tracking-tighter mb-6">
                    {HERO.name}
                </h1>
                <p class="text-xl text-gray-400 mb-10">{HERO.role}</p>

                <div class="border-l-2 border-white pl-6 space-y-4 mb-12 max-w-3xl">
                    <p class="text-2xl text-white">{HERO.tagline}</p>
                    <p class="text-gray-300">{HERO.statement}</p>
                    <p class="text-red-500 font-bold">{HERO.warning}</p>
                    <div class="text-gray-500 text-sm space-y-1">
                        {HERO.rules.iter().map(|rule| view! { <p>{*rule}</p> }).collect_view()}
                    </div>
                </div>

                <button
                    class="px-8 py-4 bg-white text-black font-bold tracking-widest uppercase hover:bg-green-500 transition-colors"
                    on:click=on_cta
                >
                    {HERO.call_to_action}
                </button>
            </div>
        </section>
    }
}

#[component]
fn WhatIDo() -> impl IntoView {
    let capabilities: &'static [&'static str] = &CAPABILITIES;
    let (left, right) = capabilities.split_at(capabilities.len() / 2);

    view! {
        <Section title=PageSection::WhatIDo.title() id=Anchor::WhatIDo.id()>
            <p class="text-2xl text-white font-bold mb-4">{WHAT_I_DO_LEAD}</p>
            <p class="text-gray-400 mb-8">{WHAT_I_DO_INTRO}</p>
            <div class="grid md:grid-cols-2 gap-6 mb-8">
                <TerminalBlock items=left />
                <TerminalBlock items=right />
            </div>
            <div class="border border-gray-800 p-6 text-gray-300">
                <p>{WHAT_I_DO_CLOSING[0]}</p>
                <p class="text-white font-bold">{WHAT_I_DO_CLOSING[1]}</p>
            </div>
        </Section>
    }
}

#[component]
fn HowIWork() -> impl IntoView {
    view! {
        <Section title=PageSection::HowIWork.title() id=Anchor::HowIWork.id()>
            <div class="space-y-12">
                {PRINCIPLES.iter().map(|principle| {
                    let class = if principle.emphasized {
                        "border-l-4 border-green-500 pl-6"
                    } else {
                        "pl-7"
                    };
                    view! {
                        <div class=class>
                            <h3 class="text-lg text-white font-bold mb-2">{principle.title}</h3>
                            {principle.summary.iter().map(|line| view! {
                                <p class="text-gray-300">{*line}</p>
                            }).collect_view()}
                            <ul class="my-2 space-y-1">
                                {principle.bullets.iter().map(|bullet| view! {
                                    <li class="text-red-500">"- "{*bullet}</li>
                                }).collect_view()}
                            </ul>
                            {principle.details.iter().map(|line| view! {
                                <p class="text-gray-500 text-xs uppercase tracking-widest mt-1">{*line}</p>
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn SystemsIndex(catalog: Catalog) -> impl IntoView {
    view! {
        <Section title=PageSection::SystemsIndex.title() id=Anchor::Systems.id()>
            <p class="text-gray-300 mb-12">
                {SYSTEMS_LEAD}" "<span class="text-green-500">{SYSTEMS_LEAD_ACCENT}</span>
            </p>

            <div class="space-y-12">
                {catalog.categories().iter().map(|category| view! {
                    <div>
                        <h3 class="text-xs text-green-500 uppercase tracking-widest border-b border-gray-800 pb-2 mb-6">
                            {category.category.clone()}
                        </h3>
                        <div class="grid md:grid-cols-2 gap-6">
                            {category.items.iter().map(|item| view! {
                                <div class="border-l border-gray-700 pl-4 hover:border-white transition-colors">
                                    <div class="flex justify-between items-baseline mb-1">
                                        <span class="text-white font-bold">{item.name.clone()}</span>
                                        <LoadBar load=item.load />
                                    </div>
                                    <p class="text-gray-400 text-sm">{item.description.clone()}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="mt-12 border border-red-500/50 bg-red-950/10 p-4 flex items-start space-x-3">
                <AlertTriangle class="w-5 h-5 text-red-500 shrink-0" />
                <p class="text-sm text-gray-300">
                    <span class="text-red-500 font-bold">{SYSTEMS_WARNING_LABEL}</span>" "{SYSTEMS_WARNING}
                </p>
            </div>
        </Section>
    }
}

#[component]
fn WhatIDontDo() -> impl IntoView {
    view! {
        <Section title=PageSection::WhatIDontDo.title()>
            <p class="text-2xl text-white font-bold mb-4">{DONT_DO_LEAD}</p>
            <p class="text-gray-400 mb-8">{DONT_DO_INTRO}</p>
            <TerminalBlock items=&DONT_DO tone=Tone::Warning />
            <div class="mt-8 text-gray-400 space-y-1">
                <p>{DONT_DO_CLOSING[0]}</p>
                <p class="text-white">{DONT_DO_CLOSING[1]}</p>
            </div>
        </Section>
    }
}

#[component]
fn WhoThisIsFor() -> impl IntoView {
    view! {
        <Section title=PageSection::WhoThisIsFor.title()>
            <div class="grid md:grid-cols-2 gap-6 mb-8">
                <TerminalBlock items=&AUDIENCE />
                <TerminalBlock items=&NOT_AUDIENCE title=NOT_AUDIENCE_TITLE tone=Tone::Neutral />
            </div>
            <p class="border border-gray-800 p-6 text-center text-white">{FILTER_NOTICE}</p>
        </Section>
    }
}

#[component]
fn Deliverable() -> impl IntoView {
    let closing = DELIVERABLE_CLOSING.len() - 1;

    view! {
        <Section title=PageSection::Deliverable.title()>
            <p class="text-gray-400 mb-8">{DELIVERABLE_INTRO}</p>
            <div class="grid md:grid-cols-3 gap-6 mb-12">
                {DELIVERABLES.iter().map(|deliverable| view! {
                    <div class="border border-gray-800 p-6 flex flex-col items-start space-y-4">
                        {icon_for(deliverable.icon, "w-6 h-6 text-green-500")}
                        <p class="text-white">{deliverable.label}</p>
                    </div>
                }).collect_view()}
            </div>
            <div class="border-l-2 border-white pl-6 uppercase tracking-widest font-bold">
                {DELIVERABLE_CLOSING.iter().enumerate().map(|(i, line)| {
                    let class = if i == closing { "text-green-500" } else { "text-gray-400" };
                    view! { <p class=class>{*line}</p> }
                }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <Section title=PageSection::Contact.title() id=Anchor::Contact.id()>
            <div class="grid md:grid-cols-5 gap-12">
                <div class="md:col-span-2 space-y-4">
                    <p class="text-3xl text-white font-black uppercase">{CONTACT_HEADLINE[0]}</p>
                    <p class="text-3xl text-gray-600 font-black uppercase">{CONTACT_HEADLINE[1]}</p>
                    <p class="text-gray-400">{CONTACT_PITCH}</p>
                </div>
                <div class="md:col-span-3">
                    <ContactFormPanel />
                </div>
            </div>
        </Section>
    }
}
