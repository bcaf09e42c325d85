//! The portfolio page: splash, then content.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the `SessionController`. A mount effect starts the session
//! and schedules the splash task; `on_cleanup` tears the controller down so a
//! late timer cannot touch a disposed view. Every controller mutation is
//! published into the `RwSignal<SessionState>` context.

use leptos::prelude::*;

use crate::components::page_footer::PageFooter;
use crate::components::project_card::ProjectList;
use crate::components::resume::{AwardsList, EducationList, ExperienceList};
use crate::components::sidebar::Sidebar;
use crate::components::splash_screen::SplashScreen;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::PORTFOLIO;
use crate::session::SessionController;
use crate::state::session::{Phase, SessionState};
use crate::util::splash_timer;
use crate::util::theme::{apply_document_theme, themed};
use crate::util::theme_store::BrowserThemeStore;

type PageSession = StoredValue<SessionController<BrowserThemeStore>>;

fn publish(controller: PageSession, session: RwSignal<SessionState>) {
    if let Some(state) = controller.try_with_value(SessionController::state) {
        session.set(state);
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller: PageSession = StoredValue::new(SessionController::new(BrowserThemeStore));

    // Mount: restore theme, arm splash. Effects only run in the browser.
    Effect::new(move || {
        let Some(task) = controller.try_update_value(SessionController::on_start).flatten() else {
            return;
        };
        publish(controller, session);
        splash_timer::schedule(task, move |token| {
            if controller.try_update_value(|c| c.on_splash_elapsed(&token)) == Some(true) {
                publish(controller, session);
            }
        });
    });

    Effect::new(move || apply_document_theme(session.get().theme()));

    on_cleanup(move || {
        controller.try_update_value(SessionController::teardown);
    });

    let on_toggle = Callback::new(move |()| {
        if let Some(state) = controller.try_update_value(SessionController::toggle_theme) {
            session.set(state);
        }
    });

    view! {
        <ThemeToggle on_toggle=on_toggle/>
        <Show when=move || session.get().phase() == Phase::Content fallback=|| view! { <SplashScreen/> }>
            <PortfolioContent/>
        </Show>
    }
}

/// Header, main column, sidebar, and footer.
#[component]
fn PortfolioContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();
    let profile = &PORTFOLIO.profile;

    view! {
        <div class=move || themed("portfolio", theme())>
            <div class="portfolio__inner">
                <header class=move || themed("page-header", theme())>
                    <h1 class=move || themed("page-header__name", theme())>{profile.name}</h1>
                    <p class=move || themed("page-header__tagline", theme())>{profile.tagline}</p>
                </header>

                <div class="portfolio__grid">
                    <main class="portfolio__main">
                        <section class="section">
                            <p class=move || themed("intro", theme())>
                                <strong class=move || themed("intro__name", theme())>{profile.name}</strong>
                                " "
                                {profile.bio}
                            </p>
                        </section>
                        <ExperienceList items=PORTFOLIO.experience/>
                        <EducationList items=PORTFOLIO.education/>
                        <ProjectList items=PORTFOLIO.projects/>
                        <AwardsList items=PORTFOLIO.awards/>
                    </main>
                    <Sidebar portfolio={&PORTFOLIO}/>
                </div>

                <PageFooter/>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;
