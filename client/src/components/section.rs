//! Shared building blocks: titled content sections and tag badges.

use leptos::prelude::*;

use crate::content::Accent;
use crate::state::session::SessionState;
use crate::util::theme::themed;

/// Main-column section with a rule under its heading.
#[component]
pub fn Section(heading: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="section">
            <h2 class=move || themed("section__heading", session.get().theme())>{heading}</h2>
            {children()}
        </section>
    }
}

/// Small tinted pill for a skill or technology name.
#[component]
pub fn TagBadge(label: &'static str, accent: Accent) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let class = move || format!("{} badge--{}", themed("badge", session.get().theme()), accent.as_str());

    view! { <span class=class>{label}</span> }
}
