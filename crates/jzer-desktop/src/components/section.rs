use std::collections::HashMap;

use dioxus::prelude::*;

use jzer_core::nav::SectionRect;

use crate::state::AppState;

/// A home page section the header can scroll to and track.
#[component]
pub fn PageSection(id: String, #[props(default)] style: String, children: Element) -> Element {
    let mut state = use_context::<AppState>();
    let element_id = id.clone();

    rsx! {
        section {
            id: "{id}",
            style: "{style}",
            onmounted: move |evt: Event<MountedData>| {
                state.sections.write().insert(element_id.clone(), evt.data());
            },
            {children}
        }
    }
}

/// Read the current rectangle of every mounted section.
///
/// Sections that fail to report a rectangle are left out.
pub async fn measure_sections(state: AppState) -> HashMap<String, SectionRect> {
    let mounted: Vec<_> = state
        .sections
        .read()
        .iter()
        .map(|(id, data)| (id.clone(), data.clone()))
        .collect();

    let mut bounds = HashMap::with_capacity(mounted.len());
    for (id, data) in mounted {
        match data.get_client_rect().await {
            Ok(rect) => {
                bounds.insert(id, SectionRect::new(rect.min_y(), rect.max_y()));
            }
            Err(error) => tracing::debug!("Could not measure section '{id}': {error:?}"),
        }
    }
    bounds
}
