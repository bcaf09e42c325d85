//! Fixed-position light/dark toggle, visible in both splash and content.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::session::SessionState;
use crate::util::theme::{Theme, themed};

/// Toggle button. Shows a sun and "Light" while dark mode is on, a moon and
/// "Dark" while it is off.
#[component]
pub fn ThemeToggle(on_toggle: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = move || session.get().theme();

    view! {
        <button
            class=move || themed("theme-toggle", theme())
            type="button"
            title="Toggle color theme"
            on:click=move |_| on_toggle.run(())
        >
            {move || {
                let kind = if theme() == Theme::Dark { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind=kind modifier="theme-toggle__icon"/> }
            }}
            <span class="theme-toggle__label">{move || theme().toggle_label()}</span>
        </button>
    }
}
