//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{adaptive_panel::AdaptivePanel, query_panel::QueryPanel, tab_bar::TabBar};
use crate::config::ApiConfig;
use crate::state::query::QueryState;
use crate::state::recommend::AdaptiveState;
use crate::state::ui::{Panel, UiState};

/// Root application component.
///
/// Provides shared state contexts and lays out the two switchable sections.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let query = RwSignal::new(QueryState::default());
    let adaptive = RwSignal::new(AdaptiveState::default());

    provide_context(ApiConfig::from_build_env());
    provide_context(ui);
    provide_context(query);
    provide_context(adaptive);

    let section_hidden = move |panel: Panel| move || !ui.with(|s| s.is_visible(panel));

    view! {
        <Title text="AI Learning Assistant"/>

        <main class="app">
            <header class="app-header">
                <h1>"AI Learning Assistant"</h1>
                <TabBar/>
            </header>

            <section id="query-section" class="content-section" class:hidden=section_hidden(Panel::Query)>
                <QueryPanel/>
            </section>

            <section id="adaptive-section" class="content-section" class:hidden=section_hidden(Panel::Adaptive)>
                <AdaptivePanel/>
            </section>
        </main>
    }
}
