//! Full-viewport splash overlay with the animated "Y" mark.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::theme::themed;

/// Strokes of the mark, drawn in sequence by the `draw-line` animation.
const MARK_STROKES: [(&str, &str); 3] = [("M20 20 L64 64", "0s"), ("M108 20 L64 64", "0.5s"), ("M64 64 L64 108", "1s")];

const DOT_DELAYS: [&str; 3] = ["0s", "0.1s", "0.2s"];

#[component]
pub fn SplashScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class=move || themed("splash", session.get().theme()) role="status" aria-label="Loading">
            <div class="splash__body">
                <svg class="splash__mark" width="128" height="128" viewBox="0 0 128 128" aria-hidden="true">
                    {MARK_STROKES
                        .iter()
                        .map(|(d, delay)| {
                            view! {
                                <path
                                    class="splash__stroke"
                                    d=*d
                                    style:animation-delay=*delay
                                ></path>
                            }
                        })
                        .collect::<Vec<_>>()}
                </svg>
                <div class="splash__dots">
                    {DOT_DELAYS
                        .iter()
                        .map(|delay| view! { <span class="splash__dot" style:animation-delay=*delay></span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
