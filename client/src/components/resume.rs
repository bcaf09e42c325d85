//! Experience, education, and award listings for the main column.

use leptos::prelude::*;

use crate::components::section::Section;
use crate::content::{Award, Education, Experience};
use crate::state::session::SessionState;
use crate::util::theme::themed;

#[component]
pub fn ExperienceList(items: &'static [Experience]) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <Section heading="Professional Experience">
            <div class="stack">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class=move || themed("card", theme())>
                                <h3 class=move || themed("card__title", theme())>{item.title}</h3>
                                <p class="card__meta">
                                    {format!("{} \u{2022} {}", item.organization, item.period)}
                                </p>
                                <p class=move || themed("card__body", theme())>{item.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[component]
pub fn EducationList(items: &'static [Education]) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <Section heading="Education">
            <div class="stack">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class=move || themed("card", theme())>
                                <h3 class=move || themed("card__title", theme())>{item.degree}</h3>
                                <p class="card__meta">{item.institution}</p>
                                <p class=move || themed("card__body", theme())>{item.detail}</p>
                                <p class="card__score">{item.score}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[component]
pub fn AwardsList(items: &'static [Award]) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <Section heading="Awards and Recognition">
            <div class=move || themed("card", theme())>
                <ul class="awards">
                    {items
                        .iter()
                        .map(|award| {
                            let accent = award.rank.accent().as_str();
                            view! {
                                <li class="awards__item">
                                    <span class=format!("awards__bullet awards__bullet--{accent}")></span>
                                    <div>
                                        <strong class=format!("awards__rank awards__rank--{accent}")>
                                            {award.rank.label()}
                                        </strong>
                                        {format!(" - {}", award.title)}
                                        <span class=move || themed("awards__note", theme())>{award.note}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </Section>
    }
}
