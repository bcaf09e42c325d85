//! Sidebar cards: profile and contacts, technical skills, quick facts.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section::TagBadge;
use crate::content::{Contact, Portfolio, QuickFact, SkillGroup};
use crate::state::session::SessionState;
use crate::util::theme::themed;

#[component]
pub fn Sidebar(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <ProfileCard portfolio=portfolio/>
            <SkillsCard groups=portfolio.skills/>
            <QuickFactsCard facts=portfolio.quick_facts/>
        </aside>
    }
}

#[component]
fn ProfileCard(portfolio: &'static Portfolio) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();
    let profile = &portfolio.profile;

    view! {
        <div class=move || themed("card", theme())>
            <div class="profile">
                <div class=move || themed("profile__photo", theme())>
                    <img src=profile.photo_src alt=profile.name/>
                </div>
                <h3 class=move || themed("profile__name", theme())>{profile.name}</h3>
                <p class="profile__role">{profile.role}</p>
            </div>
            <hr class=move || themed("separator", theme())/>
            <div class="contacts">
                {portfolio.contacts.iter().map(|contact| view! { <ContactRow contact=contact/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ContactRow(contact: &'static Contact) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    let label = match contact.href {
        Some(href) => view! {
            <a class="contacts__link" href=href target="_blank" rel="noopener noreferrer">
                {contact.label}
            </a>
        }
        .into_any(),
        None => view! { <span>{contact.label}</span> }.into_any(),
    };

    view! {
        <div class=move || themed("contacts__row", theme())>
            <Icon kind=IconKind::from(contact.kind) modifier="icon--accent"/>
            {label}
        </div>
    }
}

#[component]
fn SkillsCard(groups: &'static [SkillGroup]) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <div class=move || themed("card", theme())>
            <h3 class=move || themed("card__heading", theme())>"Technical Skills"</h3>
            <div class="stack">
                {groups
                    .iter()
                    .map(|group| {
                        view! {
                            <div>
                                <h4 class=move || themed("card__subheading", theme())>{group.heading}</h4>
                                <div class="badge-row badge-row--tight">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <TagBadge label=*skill accent=group.accent/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn QuickFactsCard(facts: &'static [QuickFact]) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <div class=move || themed("card", theme())>
            <h3 class=move || themed("card__heading", theme())>"Quick Facts"</h3>
            <div class="facts">
                {facts
                    .iter()
                    .map(|fact| {
                        let value_class = move || match fact.accent {
                            Some(accent) => format!("facts__value facts__value--{}", accent.as_str()),
                            None => themed("facts__value", theme()),
                        };
                        view! {
                            <div class="facts__row">
                                <span class=move || themed("facts__label", theme())>{fact.label}</span>
                                <span class=value_class>{fact.value}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
