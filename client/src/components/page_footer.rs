//! Footer with the page's last-edited date.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::date::today_long;
use crate::util::theme::themed;

#[component]
pub fn PageFooter() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let edited = today_long().map(|date| format!("This page was last edited on {date}."));

    view! {
        <footer class=move || themed("page-footer", session.get().theme())>
            {edited.map(|text| view! { <p>{text}</p> })}
        </footer>
    }
}
