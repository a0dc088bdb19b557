use leptos::prelude::*;

/// Page section: optional divider, title rail and body.
///
/// On wide screens the title sits in a quarter-width rail left of the body.
#[component]
pub fn Section(
    children: Children,
    #[prop(optional, into)] title: Option<&'static str>,
    #[prop(optional, into)] id: Option<&'static str>,
    #[prop(default = true)] show_top_border: bool,
) -> impl IntoView {
    let class = if show_top_border {
        "py-16 md:py-24 px-6 border-t border-gray-800 scroll-mt-16"
    } else {
        "py-16 md:py-24 px-6 scroll-mt-16"
    };
    let body_class = if title.is_some() {
        "md:col-span-3"
    } else {
        "md:col-span-4"
    };

    view! {
        <section id=id class=class>
            <div class="max-w-6xl mx-auto grid md:grid-cols-4 gap-8">
                {title.map(|title| view! {
                    <h2 class="text-sm font-bold text-white uppercase tracking-widest md:col-span-1">
                        {title}
                    </h2>
                })}
                <div class=body_class>
                    {children()}
                </div>
            </div>
        </section>
    }
}
