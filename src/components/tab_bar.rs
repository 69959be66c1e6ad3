//! Two-button switcher between the page sections.

use leptos::prelude::*;

use crate::state::ui::{Panel, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let tab_button = move |panel: Panel, label: &'static str| {
        view! {
            <button
                class="tab-btn"
                class:active=move || ui.with(|s| s.is_tab_active(panel))
                on:click=move |_| ui.update(|s| s.switch_tab(panel.id()))
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="tab-bar">
            {tab_button(Panel::Query, "Query Understanding")}
            {tab_button(Panel::Adaptive, "Adaptive Learning")}
        </nav>
    }
}
