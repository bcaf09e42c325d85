#![cfg(feature = "ssr")]

use super::*;

const CONTENT_HEADINGS: [&str; 6] = [
    "Professional Experience",
    "Education",
    "Notable Projects",
    "Awards and Recognition",
    "Technical Skills",
    "Quick Facts",
];

fn render(state: SessionState) -> String {
    let owner = Owner::new();
    owner.set();
    provide_context(RwSignal::new(state));
    view! { <PortfolioPage/> }.to_html()
}

fn toggle_label(html: &str) -> &str {
    let start = html.find("theme-toggle__label").expect("toggle label rendered");
    let rest = &html[start..];
    let end = rest.find("</span>").expect("toggle label closed");
    &rest[..end]
}

#[test]
fn loading_state_renders_splash_only() {
    let html = render(SessionState { loading: true, dark_mode: false });
    assert!(html.contains("splash splash--light"));
    for heading in CONTENT_HEADINGS {
        assert!(!html.contains(heading), "{heading} rendered during splash");
    }
}

#[test]
fn loaded_state_renders_content_sections() {
    let html = render(SessionState { loading: false, dark_mode: false });
    assert!(!html.contains("splash__mark"));
    for heading in CONTENT_HEADINGS {
        assert!(html.contains(heading), "{heading} missing from content");
    }
    assert!(html.contains(PORTFOLIO.profile.name));
}

#[test]
fn toggle_is_rendered_in_both_phases() {
    for loading in [true, false] {
        let html = render(SessionState { loading, dark_mode: false });
        assert!(html.contains("theme-toggle theme-toggle--light"));
    }
}

#[test]
fn toggle_label_names_the_theme_it_switches_to() {
    let dark = render(SessionState { loading: false, dark_mode: true });
    assert!(toggle_label(&dark).contains("Light"));
    assert!(dark.contains("theme-toggle theme-toggle--dark"));

    let light = render(SessionState { loading: false, dark_mode: false });
    assert!(toggle_label(&light).contains("Dark"));
}

#[test]
fn dark_mode_styles_splash_and_content() {
    let splash = render(SessionState { loading: true, dark_mode: true });
    assert!(splash.contains("splash splash--dark"));

    let content = render(SessionState { loading: false, dark_mode: true });
    assert!(content.contains("portfolio portfolio--dark"));
    assert!(!content.contains("portfolio portfolio--light"));
}
