//! Project card with description, technology badges, and outbound link.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section::{Section, TagBadge};
use crate::content::Project;
use crate::state::session::SessionState;
use crate::util::theme::themed;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <div class=move || format!("{} card--project", themed("card", theme()))>
            <h3 class=move || format!("{} card__title--linked", themed("card__title", theme()))>
                {project.title}
                <Icon kind=IconKind::ExternalLink modifier="icon--accent"/>
            </h3>
            <p class=move || themed("card__body", theme())>{project.description}</p>
            <div class="badge-row">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <TagBadge label=*tag accent=project.accent/> })
                    .collect::<Vec<_>>()}
            </div>
            <a class="card__link" href=project.link.href target="_blank" rel="noopener noreferrer">
                {project.link.label}
            </a>
        </div>
    }
}

#[component]
pub fn ProjectList(items: &'static [Project]) -> impl IntoView {
    view! {
        <Section heading="Notable Projects">
            <div class="stack stack--loose">
                {items.iter().map(|project| view! { <ProjectCard project=project/> }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
