//! Inline stroke icons used by the toggle, project cards, and contact rows.

use leptos::prelude::*;

use crate::content::ContactKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    ExternalLink,
    MapPin,
    Mail,
    Phone,
    Github,
    Linkedin,
}

impl From<ContactKind> for IconKind {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Location => Self::MapPin,
            ContactKind::Email => Self::Mail,
            ContactKind::Phone => Self::Phone,
            ContactKind::Github => Self::Github,
            ContactKind::Linkedin => Self::Linkedin,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] modifier: &'static str) -> impl IntoView {
    let paths: &'static [&'static str] = match kind {
        IconKind::Sun => &[
            "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
        ],
        IconKind::Moon => &["M12 3a6 6 0 0 0 9 9a9 9 0 1 1-9-9z"],
        IconKind::ExternalLink => &["M15 3h6v6", "M10 14L21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
        IconKind::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
            "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
        ],
        IconKind::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M22 6l-10 7L2 6"],
        IconKind::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2a19.79 19.79 0 0 1-8.63-3.07a19.5 19.5 0 0 1-6-6a19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        IconKind::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5c.08-1.25-.27-2.48-1-3.5c.28-1.15.28-2.35 0-3.5c0 0-1 0-3 1.5c-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5c-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        IconKind::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
    };

    view! {
        <svg
            class=format!("icon {modifier}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}
