//! Home view - the public salon site

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{measure_sections, PageSection, SiteHeader, StoriesStrip};
use crate::state::AppState;
use crate::theme::{palette, HEADING_FONT};

const SERVICES: &[(&str, &str)] = &[
    ("Cut & Style", "Precision cuts finished with a signature blow-dry."),
    ("Color", "Balayage, highlights and full color by our colorists."),
    ("Treatments", "Bond repair and deep conditioning rituals."),
    ("Bridal", "Trials and on-the-day styling for the whole party."),
];

/// Measure the viewport and sections, then update the header's active entry.
fn track_active_section(mut state: AppState, viewport: Option<Rc<MountedData>>) {
    let ticket = state.nav.write().begin_measure();
    spawn(async move {
        let mut threshold = None;
        if let Some(viewport) = viewport {
            if let Ok(rect) = viewport.get_client_rect().await {
                threshold = Some(rect.height() / 2.0);
            }
        }
        let bounds = measure_sections(state).await;
        if state.nav.write().apply_measure(ticket, threshold, &bounds) {
            tracing::debug!("Active section: {}", state.nav.read().active());
        }
    });
}

/// Home view component - hero, about, stories, contact and services
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let mut scroller = use_signal(|| None::<Rc<MountedData>>);
    let colors = palette();

    // Runs again whenever the scroller or a section mounts, so a restored
    // scroll position highlights the right entry before any scrolling.
    use_effect(move || {
        let viewport = scroller();
        let mounted = state.sections.read().len();
        tracing::trace!("Measuring {mounted} mounted sections");
        track_active_section(state, viewport);
    });

    let on_scroll = move |_: Event<ScrollData>| {
        track_active_section(state, scroller.peek().clone());
    };

    rsx! {
        div {
            class: "home-scroll",
            style: "height: 100vh; overflow-y: auto; scroll-behavior: smooth;",
            onmounted: move |evt: Event<MountedData>| scroller.set(Some(evt.data())),
            onscroll: on_scroll,

            SiteHeader {}

            PageSection {
                id: "home",
                style: "
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: {colors.bg_inverse};
                    color: {colors.text_inverse};
                ",
                h1 {
                    style: "font-family: {HEADING_FONT}; font-size: 64px; margin: 0; letter-spacing: 0.1em;",
                    "SALON "
                    span { style: "color: {colors.gold};", "JZER" }
                }
                p {
                    style: "max-width: 520px; font-size: 18px; line-height: 1.6; opacity: 0.85;",
                    "Hair artistry in the heart of the city."
                }
            }

            PageSection {
                id: "about",
                style: "padding: 96px 48px; max-width: 880px; margin: 0 auto;",
                SectionHeading { title: "About" }
                p {
                    style: "font-size: 17px; line-height: 1.8; color: {colors.text_secondary};",
                    "Salon JZER is a team of stylists and colorists who believe every appointment should leave you
                    feeling like the best version of yourself. We take the time to listen, plan and craft a look
                    that fits your life."
                }
            }

            PageSection {
                id: "stories",
                style: "padding: 96px 48px; background: {colors.bg_secondary};",
                SectionHeading { title: "Stories" }
                StoriesStrip {}
            }

            PageSection {
                id: "contact",
                style: "padding: 96px 48px; max-width: 880px; margin: 0 auto;",
                SectionHeading { title: "Contact" }
                p { style: "line-height: 1.8;", "Open Tuesday to Saturday, 9am to 7pm." }
                p { style: "line-height: 1.8;", "Book by phone or drop by the salon." }
            }

            PageSection {
                id: "services",
                style: "padding: 96px 48px 140px; background: {colors.bg_inverse}; color: {colors.text_inverse};",
                SectionHeading { title: "Services" }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px;",
                    for (name, description) in SERVICES.iter().copied() {
                        div {
                            key: "{name}",
                            style: "padding: 24px; border: 1px solid {colors.gold}; border-radius: 8px;",
                            h3 { style: "margin: 0 0 8px; color: {colors.gold};", "{name}" }
                            p { style: "margin: 0; line-height: 1.6; opacity: 0.85;", "{description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionHeading(title: String) -> Element {
    let colors = palette();

    rsx! {
        h2 {
            style: "
                font-family: {HEADING_FONT};
                font-size: 36px;
                margin: 0 0 32px;
                padding-bottom: 12px;
                border-bottom: 3px solid {colors.gold};
                display: inline-block;
            ",
            "{title}"
        }
    }
}
